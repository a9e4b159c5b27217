#[allow(clippy::module_inception)]
pub mod account;
pub mod deposit;
pub mod withdrawal;

pub use account::{Account, TransactionError};
