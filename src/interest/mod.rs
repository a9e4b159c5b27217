//! The interest engine.
//!
//! Interest is computed per account from its type's `RateSchedule`, then
//! rolled up: account → customer → bank. The evaluation instant is always
//! passed in; nothing here reads the wall clock.

pub mod quiet_period;
pub mod schedule;

pub use schedule::RateSchedule;

use crate::bank::{saturating_sum, Account, Amount, Bank, Customer, Timestamp, MONEY_PRECISION};

use rust_decimal::RoundingStrategy;
use tracing::{debug, trace};

/// When money amounts get rounded while rolling interest up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Round every account's interest, sum the rounded figures per customer,
    /// then round the bank total once more.
    #[default]
    PerAccount,

    /// Sum unrounded account interest, and only round the customer and bank
    /// totals.
    AtTotal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestCalculator {
    evaluated_at: Timestamp,
    rounding: Rounding,
}

impl InterestCalculator {
    pub fn new(evaluated_at: Timestamp) -> Self {
        Self {
            evaluated_at,
            rounding: Rounding::default(),
        }
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        Self { rounding, ..self }
    }

    pub fn evaluated_at(&self) -> Timestamp {
        self.evaluated_at
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Interest the account earns in one year, rounded to cents.
    ///
    /// Rounding happens once, on the account total, never on tiers.
    pub fn interest_earned_by_account(&self, account: &Account) -> Amount {
        round_money(self.unrounded_account_interest(account))
    }

    /// Interest earned across all of the customer's accounts.
    pub fn interest_earned_by_customer(&self, customer: &Customer) -> Amount {
        let interest = match self.rounding {
            Rounding::PerAccount => saturating_sum(
                customer
                    .accounts()
                    .map(|account| self.interest_earned_by_account(account)),
            ),
            Rounding::AtTotal => round_money(self.unrounded_customer_interest(customer)),
        };

        debug!(customer = customer.name(), %interest, "customer interest");
        interest
    }

    /// Interest the bank pays all of its customers in one year, rounded to
    /// cents.
    pub fn total_interest_paid_by_bank(&self, bank: &Bank) -> Amount {
        let total = match self.rounding {
            Rounding::PerAccount => saturating_sum(
                bank.customers()
                    .iter()
                    .map(|customer| self.interest_earned_by_customer(customer)),
            ),
            Rounding::AtTotal => saturating_sum(
                bank.customers()
                    .iter()
                    .map(|customer| self.unrounded_customer_interest(customer)),
            ),
        };

        let total = round_money(total);
        debug!(customers = bank.customers().len(), %total, "bank interest");
        total
    }

    fn unrounded_account_interest(&self, account: &Account) -> Amount {
        let account_type = account.account_type();
        let balance = account.balance();
        let interest = account_type.schedule().annual_interest(
            balance,
            account.transactions(),
            self.evaluated_at,
        );

        trace!(
            account = account.account_number(),
            %account_type,
            %balance,
            %interest,
            "account interest"
        );
        interest
    }

    fn unrounded_customer_interest(&self, customer: &Customer) -> Amount {
        saturating_sum(
            customer
                .accounts()
                .map(|account| self.unrounded_account_interest(account)),
        )
    }
}

/// Round to cents, ties away from zero.
pub fn round_money(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(MONEY_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Interest `account` earns in one year as of `at`, rounded to cents.
pub fn interest_earned_by_account(account: &Account, at: Timestamp) -> Amount {
    InterestCalculator::new(at).interest_earned_by_account(account)
}

/// Sum of the (rounded) interest earned by each of the customer's accounts.
pub fn interest_earned_by_customer(customer: &Customer, at: Timestamp) -> Amount {
    InterestCalculator::new(at).interest_earned_by_customer(customer)
}

/// Sum of every customer's interest, rounded to cents.
pub fn total_interest_paid_by_bank(bank: &Bank, at: Timestamp) -> Amount {
    InterestCalculator::new(at).total_interest_paid_by_bank(bank)
}
