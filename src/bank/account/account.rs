use crate::bank::{
    transaction::{self, Transaction},
    AccountNumber, AccountType, Amount, Timestamp,
};

use thiserror::Error;

/// Note: I chose to keep errors simple here, carrying only the value that was
/// rejected. Callers already know which account they were operating on.
#[derive(Debug, PartialEq, Error)]
pub enum TransactionError {
    /// Deposits, withdrawals and transfers must be strictly positive.
    #[error("invalid amount {0}: must be greater than zero")]
    InvalidAmount(Amount),

    /// Applying the amount would overflow the account balance.
    #[error("applying {0} would overflow the account balance")]
    Overflow(Amount),

    /// A transfer references an account the customer does not hold.
    #[error("unknown account {0}")]
    UnknownAccount(AccountNumber),

    /// A transfer from an account to itself.
    #[error("cannot transfer from account {0} to itself")]
    SameAccount(AccountNumber),
}

/// Account is an append-only ledger of transactions.
///
/// The balance is never stored: it is always the sum of the ledger, so it
/// cannot drift from the transactions it is computed from. The only way to
/// add to the ledger is through `deposit` and `withdraw`, which validate the
/// amount first.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    account_type: AccountType,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(account_number: impl Into<AccountNumber>, account_type: AccountType) -> Self {
        Self {
            account_number: account_number.into(),
            account_type,
            transactions: Vec::new(),
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Read-only view of the ledger, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Calculate the balance, i.e. the sum of every transaction.
    pub fn balance(&self) -> Amount {
        transaction::sum(&self.transactions)
    }

    pub fn sum_transactions(&self) -> Amount {
        self.balance()
    }

    /// Append a validated, signed amount to the ledger.
    pub(super) fn record(&mut self, amount: Amount, at: Timestamp) -> Result<(), TransactionError> {
        // Every accepted amount was checked against the running balance, so
        // summing the ledger later can't overflow either.
        // Re-summing the ledger makes each append linear in its length. Fine
        // for in-memory ledgers of a few thousand entries.
        self.balance()
            .checked_add(amount)
            .ok_or(TransactionError::Overflow(amount))?;

        self.transactions.push(Transaction::new(amount, at));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::bank::{Account, AccountType, TransactionError};

    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_is_empty() {
        let acc = Account::new("12345", AccountType::Savings);

        assert_eq!("12345", acc.account_number());
        assert_eq!(AccountType::Savings, acc.account_type());
        assert!(acc.transactions().is_empty());
        assert_eq!(dec!(0), acc.balance());
    }

    #[test]
    fn test_balance() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let mut acc = Account::new("1", AccountType::Current);

        acc.record(dec!(100.0), at).expect("should record a deposit");
        acc.record(dec!(-25.5), at).expect("should record a withdrawal");
        acc.record(dec!(0.5), at).expect("should record a deposit");

        assert_eq!(dec!(75.0), acc.balance());
        assert_eq!(acc.balance(), acc.sum_transactions());
        assert_eq!(3, acc.transactions().len());
    }

    #[test]
    fn test_record_overflow() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let mut acc = Account::new("1", AccountType::Current);

        acc.record(Decimal::MAX, at).expect("should not overflow");
        assert_eq!(
            Err(TransactionError::Overflow(dec!(1))),
            acc.record(dec!(1), at)
        );
        assert_eq!(1, acc.transactions().len());
        assert_eq!(Decimal::MAX, acc.balance());
    }
}
