//! Bank customers, accounts and transactions, with tiered annual interest.
//!
//! `bank`: the data model (transactions, accounts, customers, the bank) and
//! the deposit/withdraw validation gate.
//! `interest`: the interest engine, applying each account type's rate
//! schedule and rolling results up from accounts to customers to the bank.
//! `statement` and `report`: text statements and a CSV interest report.

pub mod bank;
pub mod interest;
pub mod report;
pub mod statement;
