use crate::bank::{Amount, Timestamp};

use super::account::{Account, TransactionError};
use tracing::debug;

impl Account {
    /// Deposit `amount` now.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.deposit_at(amount, chrono::Utc::now())
    }

    /// Deposit `amount`, recorded at the given instant.
    pub fn deposit_at(&mut self, amount: Amount, at: Timestamp) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            debug!(account = %self.account_number(), %amount, "rejected deposit");
            return Err(TransactionError::InvalidAmount(amount));
        }

        self.record(amount, at)?;
        debug!(account = %self.account_number(), %amount, "deposited");

        Ok(())
    }
}
