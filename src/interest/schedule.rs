//! Rate schedules: how much interest a balance earns in one year.
//!
//! A schedule only knows about rates and tiers. Rounding is left to the
//! caller, so that sub-totals of individual tiers are never rounded.

use crate::bank::{Amount, Timestamp, Transaction};

use super::quiet_period::no_withdrawal_within;
use rust_decimal_macros::dec;

/// Upper bounds of every tier but the last, which is unbounded.
pub const TIER_LIMITS: [Amount; 2] = [dec!(1000), dec!(2000)];

/// How far back a withdrawal cancels the quiet-period bonus.
pub const WITHDRAWAL_WINDOW_DAYS: i64 = 10;

pub const CURRENT: RateSchedule = RateSchedule::Tiered(&[dec!(0.001)]);

pub const SAVINGS: RateSchedule = RateSchedule::Tiered(&[dec!(0.001), dec!(0.002)]);

pub const MAXI_SAVINGS: RateSchedule =
    RateSchedule::Tiered(&[dec!(0.02), dec!(0.05), dec!(0.10)]);

pub const MAXI_SAVINGS_ADD: RateSchedule = RateSchedule::QuietPeriod {
    recent_withdrawal_rate: dec!(0.001),
    quiet_rate: dec!(0.05),
    window_days: WITHDRAWAL_WINDOW_DAYS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateSchedule {
    /// Rate `i` applies to the part of the balance between `TIER_LIMITS[i - 1]`
    /// and `TIER_LIMITS[i]`. The last rate applies to everything above the
    /// previous limit. A single rate is a flat schedule.
    Tiered(&'static [Amount]),

    /// One rate over the whole balance, chosen by whether the account made a
    /// withdrawal within the last `window_days` days.
    QuietPeriod {
        recent_withdrawal_rate: Amount,
        quiet_rate: Amount,
        window_days: i64,
    },
}

impl RateSchedule {
    /// Unrounded interest earned in one year.
    ///
    /// `transactions` and `at` only matter to schedules that look at the
    /// withdrawal history. Negative balances earn nothing.
    pub fn annual_interest(
        &self,
        balance: Amount,
        transactions: &[Transaction],
        at: Timestamp,
    ) -> Amount {
        let balance = balance.max(Amount::ZERO);

        match *self {
            Self::Tiered(rates) => tiered_interest(balance, rates),
            Self::QuietPeriod {
                recent_withdrawal_rate,
                quiet_rate,
                window_days,
            } => {
                if no_withdrawal_within(transactions, window_days, at) {
                    balance * quiet_rate
                } else {
                    balance * recent_withdrawal_rate
                }
            }
        }
    }

    pub fn flat_rate(&self) -> Amount {
        match self {
            Self::Tiered(rates) => rates.first().copied().unwrap_or_default(),
            Self::QuietPeriod {
                recent_withdrawal_rate,
                ..
            } => *recent_withdrawal_rate,
        }
    }

    pub fn second_rate(&self) -> Option<Amount> {
        match self {
            Self::Tiered(rates) => rates.get(1).copied(),
            Self::QuietPeriod { quiet_rate, .. } => Some(*quiet_rate),
        }
    }

    pub fn third_rate(&self) -> Option<Amount> {
        match self {
            Self::Tiered(rates) => rates.get(2).copied(),
            Self::QuietPeriod { .. } => None,
        }
    }
}

// Walk the tiers from the bottom up, charging each slice of the balance at
// its own rate, until the balance is used up.
fn tiered_interest(balance: Amount, rates: &[Amount]) -> Amount {
    let mut interest = Amount::ZERO;
    let mut floor = Amount::ZERO;

    for (tier, rate) in rates.iter().enumerate() {
        let is_last = tier + 1 == rates.len();
        let ceiling = match TIER_LIMITS.get(tier) {
            Some(limit) if !is_last => balance.min(*limit),
            _ => balance,
        };
        if ceiling <= floor {
            break;
        }

        interest += (ceiling - floor) * *rate;
        floor = ceiling;
    }

    interest
}

#[cfg(test)]
mod tests {
    use super::{RateSchedule, CURRENT, MAXI_SAVINGS, MAXI_SAVINGS_ADD, SAVINGS};

    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_current() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        for (balance, want) in vec![
            (dec!(0), dec!(0)),
            (dec!(100), dec!(0.1)),
            (dec!(1000), dec!(1)),
            (dec!(3000), dec!(3)),
        ] {
            assert_eq!(want, CURRENT.annual_interest(balance, &[], at), "{}", balance);
        }
    }

    #[test]
    fn test_savings() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        for (balance, want) in vec![
            (dec!(500), dec!(0.5)),
            (dec!(1000), dec!(1)),
            (dec!(1000.01), dec!(1.00002)),
            (dec!(1500), dec!(2)),
            (dec!(3000), dec!(5)),
        ] {
            assert_eq!(want, SAVINGS.annual_interest(balance, &[], at), "{}", balance);
        }
    }

    #[test]
    fn test_maxi_savings() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        for (balance, want) in vec![
            (dec!(500), dec!(10)),
            (dec!(1000), dec!(20)),
            (dec!(1000.5), dec!(20.025)),
            (dec!(1500), dec!(45)),
            (dec!(2000), dec!(70)),
            (dec!(2500), dec!(120)),
            (dec!(3000), dec!(170)),
        ] {
            assert_eq!(want, MAXI_SAVINGS.annual_interest(balance, &[], at), "{}", balance);
        }
    }

    #[test]
    fn test_negative_balance_earns_nothing() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        for schedule in vec![CURRENT, SAVINGS, MAXI_SAVINGS, MAXI_SAVINGS_ADD] {
            assert_eq!(dec!(0), schedule.annual_interest(dec!(-250), &[], at));
        }
    }

    #[test]
    fn test_monotonic_in_balance() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        for schedule in vec![CURRENT, SAVINGS, MAXI_SAVINGS, MAXI_SAVINGS_ADD] {
            let mut previous = dec!(0);
            let mut balance = dec!(-100);
            while balance <= dec!(3500) {
                let interest = schedule.annual_interest(balance, &[], at);
                assert!(interest >= dec!(0));
                assert!(interest >= previous, "{:?} at {}", schedule, balance);
                previous = interest;
                balance += dec!(12.5);
            }
        }
    }

    #[test]
    fn test_quiet_period() {
        use crate::bank::{Account, AccountType};

        let at = Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap();

        let mut quiet = Account::new("1", AccountType::MaxiSavingsAdd);
        quiet.deposit_at(dec!(1000), at - Duration::days(30)).unwrap();
        quiet.withdraw_at(dec!(100), at - Duration::days(11)).unwrap();
        assert_eq!(
            dec!(45),
            MAXI_SAVINGS_ADD.annual_interest(quiet.balance(), quiet.transactions(), at)
        );

        let mut recent = quiet.clone();
        recent.withdraw_at(dec!(100), at - Duration::days(3)).unwrap();
        assert_eq!(
            dec!(0.8),
            MAXI_SAVINGS_ADD.annual_interest(recent.balance(), recent.transactions(), at)
        );
    }

    #[test]
    fn test_custom_tiers() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        const TWO_TIERS: RateSchedule = RateSchedule::Tiered(&[dec!(0.01), dec!(0.1)]);

        assert_eq!(dec!(10), TWO_TIERS.annual_interest(dec!(1000), &[], at));
        assert_eq!(dec!(110), TWO_TIERS.annual_interest(dec!(2000), &[], at));
    }
}
