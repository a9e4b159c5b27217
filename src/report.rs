use crate::bank::{Account, AccountType, Amount, Bank, Timestamp};
use crate::interest::InterestCalculator;

use serde::Serialize;

#[derive(Serialize)]
struct InterestRecord<'a> {
    customer: &'a str,

    #[serde(rename = "account")]
    account_number: &'a str,

    #[serde(rename = "type")]
    account_type: AccountType,

    balance: Amount,

    interest: Amount,
}

impl<'a> InterestRecord<'a> {
    fn new(customer: &'a str, account: &'a Account, calculator: &InterestCalculator) -> Self {
        Self {
            customer,
            account_number: account.account_number(),
            account_type: account.account_type(),
            balance: account.balance(),
            interest: calculator.interest_earned_by_account(account),
        }
    }
}

/// Writes one CSV row per account of the bank to the given stream, with the
/// interest each account earns in one year as of `at`.
pub fn write(
    output_stream: impl std::io::Write,
    bank: &Bank,
    at: Timestamp,
) -> Result<(), std::io::Error> {
    let calculator = InterestCalculator::new(at);
    let mut writer = csv::Writer::from_writer(output_stream);

    for customer in bank.customers() {
        for account in customer.accounts() {
            writer.serialize(InterestRecord::new(customer.name(), account, &calculator))?;
        }
    }

    writer.flush()
}
