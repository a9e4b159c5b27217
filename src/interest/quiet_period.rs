use crate::bank::{Timestamp, Transaction};

use chrono::Duration;

/// Whether the ledger holds no withdrawal made strictly after `at - days`.
///
/// A withdrawal exactly `days` days before `at` is outside the window.
pub fn no_withdrawal_within(transactions: &[Transaction], days: i64, at: Timestamp) -> bool {
    let window_start = at - Duration::days(days);

    !transactions
        .iter()
        .any(|tx| tx.is_withdrawal() && tx.timestamp() > window_start)
}

#[cfg(test)]
mod tests {
    use super::no_withdrawal_within;
    use crate::bank::{Account, AccountType};

    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_withdrawal_within() {
        let at = Utc.with_ymd_and_hms(2024, 8, 20, 15, 0, 0).unwrap();

        for (withdrawn_ago, want) in vec![
            (None, true),
            (Some(Duration::days(3)), false),
            (Some(Duration::days(10) - Duration::seconds(1)), false),
            (Some(Duration::days(10)), true),
            (Some(Duration::days(11)), true),
            // A withdrawal stamped after the evaluation instant is still recent.
            (Some(-Duration::days(1)), false),
        ] {
            let mut acc = Account::new("1", AccountType::MaxiSavingsAdd);
            acc.deposit_at(dec!(500), at - Duration::days(1)).unwrap();
            if let Some(ago) = withdrawn_ago {
                acc.withdraw_at(dec!(20), at - ago).unwrap();
            }

            assert_eq!(
                want,
                no_withdrawal_within(acc.transactions(), 10, at),
                "{:?}",
                withdrawn_ago
            );
        }
    }

    #[test]
    fn test_recent_deposits_do_not_count() {
        let at = Utc.with_ymd_and_hms(2024, 8, 20, 15, 0, 0).unwrap();
        let mut acc = Account::new("1", AccountType::MaxiSavingsAdd);
        acc.deposit_at(dec!(500), at - Duration::hours(1)).unwrap();

        assert!(no_withdrawal_within(acc.transactions(), 10, at));
    }
}
