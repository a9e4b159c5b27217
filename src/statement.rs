//! Human-readable statements.
//!
//! Statements only read accounts (type, transactions, balance) and customers
//! (name, accounts). They don't depend on the interest engine.

use crate::bank::{saturating_sum, Account, Amount, Bank, Customer, MONEY_PRECISION};

use rust_decimal::{prelude::ToPrimitive, RoundingStrategy};

/// Statement of every transaction of every account the customer holds,
/// followed by the grand total.
pub fn generate_statement(customer: &Customer) -> String {
    let mut statement = format!("Statement for {}\n", customer.name());

    for account in customer.accounts() {
        statement.push('\n');
        statement.push_str(&account_statement(account));
        statement.push('\n');
    }

    let total = saturating_sum(customer.accounts().map(Account::balance));

    statement.push_str("\nTotal In all Accounts ");
    statement.push_str(&to_dollars(total));
    statement
}

fn account_statement(account: &Account) -> String {
    let mut block = format!("{}: ", account.account_type());

    for tx in account.transactions() {
        let label = if tx.is_withdrawal() {
            "withdrawal"
        } else {
            "deposit"
        };
        block.push_str(&format!("\n  {} {}", label, to_dollars(tx.amount())));
    }

    block.push_str(&format!("\nTotal {}", to_dollars(account.balance())));
    block
}

/// One line per customer, with how many accounts they hold.
pub fn customer_summary(bank: &Bank) -> String {
    let mut summary = String::from("Customer Summary");

    for customer in bank.customers() {
        let count = customer.number_of_accounts();
        let noun = if count == 1 { "account" } else { "accounts" };
        summary.push_str(&format!("\n - {} ({} {})", customer.name(), count, noun));
    }

    summary
}

/// Format an amount as `$#,##0.00`.
///
/// The sign is dropped: statements tell deposits and withdrawals apart with
/// labels, not signs.
pub fn to_dollars(amount: Amount) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(MONEY_PRECISION, RoundingStrategy::MidpointAwayFromZero);

    let dollars = rounded.trunc().normalize().to_string();
    let cents = (rounded.fract() * Amount::ONE_HUNDRED)
        .to_u8()
        .unwrap_or_default();

    format!("${}.{:02}", group_thousands(&dollars), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
