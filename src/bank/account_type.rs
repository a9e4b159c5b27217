use crate::interest::schedule::{self, RateSchedule};

use serde::Serialize;
use std::fmt;

/// The kind of account, which decides how interest is earned.
///
/// Every variant maps to a fixed `RateSchedule`; rates are data, not code,
/// and never change at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Flat rate on the whole balance. Also the fallback account type.
    #[default]
    Current,

    /// Two tiers, split at 1000.
    Savings,

    /// Three tiers, split at 1000 and 2000.
    MaxiSavings,

    /// Flat rate, raised when no withdrawal happened recently.
    MaxiSavingsAdd,
}

impl AccountType {
    pub fn schedule(&self) -> &'static RateSchedule {
        match self {
            Self::Current => &schedule::CURRENT,
            Self::Savings => &schedule::SAVINGS,
            Self::MaxiSavings => &schedule::MAXI_SAVINGS,
            Self::MaxiSavingsAdd => &schedule::MAXI_SAVINGS_ADD,
        }
    }

    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Savings => "SAVINGS",
            Self::MaxiSavings => "MAXI_SAVINGS",
            Self::MaxiSavingsAdd => "MAXI_SAVINGS_ADD",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
