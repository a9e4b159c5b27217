use super::{Amount, Timestamp};

/// A single ledger entry.
///
/// The sign of the amount tells what happened: positive amounts are deposits,
/// negative amounts are withdrawals. Amounts are never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: Amount,
    timestamp: Timestamp,
}

impl Transaction {
    // Only accounts create transactions, after validating the amount.
    pub(super) fn new(amount: Amount, timestamp: Timestamp) -> Self {
        Self { amount, timestamp }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

/// Sum the amounts of a sequence of transactions.
pub fn sum(transactions: &[Transaction]) -> Amount {
    transactions.iter().map(Transaction::amount).sum()
}
