use crate::bank::{Amount, Timestamp};

use super::account::{Account, TransactionError};
use tracing::debug;

impl Account {
    /// Withdraw `amount` now.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.withdraw_at(amount, chrono::Utc::now())
    }

    /// Withdraw `amount`, recorded at the given instant.
    ///
    /// The ledger stores the negated amount. There is no overdraft check: the
    /// balance is allowed to go negative.
    pub fn withdraw_at(&mut self, amount: Amount, at: Timestamp) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            debug!(account = %self.account_number(), %amount, "rejected withdrawal");
            return Err(TransactionError::InvalidAmount(amount));
        }

        self.record(-amount, at)?;
        debug!(account = %self.account_number(), %amount, "withdrew");

        Ok(())
    }
}
