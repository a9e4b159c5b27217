pub mod account;
pub mod account_type;
#[allow(clippy::module_inception)]
pub mod bank;
pub mod customer;
pub mod transaction;

pub use account::{Account, TransactionError};
pub use account_type::AccountType;
pub use bank::Bank;
pub use customer::Customer;
pub use transaction::Transaction;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `BTreeMap<AccountNumber, Account>` is self-explanatory where
// `BTreeMap<String, Account>` would need a comment.
pub type AccountNumber = String;

// Money and rates are exact decimals. Floats would drift across tier
// boundaries and sums.
pub type Amount = rust_decimal::Decimal;

pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Sum amounts, capping at `Amount::MAX` instead of overflowing.
///
/// Each ledger is overflow-checked on its own, but totals across accounts
/// or customers are not bounded.
pub fn saturating_sum(amounts: impl IntoIterator<Item = Amount>) -> Amount {
    amounts
        .into_iter()
        .fold(Amount::ZERO, |total, amount| total.saturating_add(amount))
}

/// Number of fractional digits every reported money amount is rounded to.
pub const MONEY_PRECISION: u32 = 2;
