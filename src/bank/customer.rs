use super::{Account, AccountNumber, Amount, Timestamp, TransactionError};

use std::collections::BTreeMap;
use tracing::debug;

/// A customer owns their accounts, keyed by account number.
///
/// Accounts are kept ordered by account number so that anything iterating
/// over them (statements, reports) is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    accounts: BTreeMap<AccountNumber, Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open an account for this customer.
    ///
    /// If the customer already held an account with the same number, it is
    /// replaced and returned.
    pub fn open_account(&mut self, account: Account) -> Option<Account> {
        self.accounts
            .insert(account.account_number().to_owned(), account)
    }

    /// Builder-style variant of `open_account`.
    pub fn with_account(mut self, account: Account) -> Self {
        self.open_account(account);
        self
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn account(&self, account_number: &str) -> Option<&Account> {
        self.accounts.get(account_number)
    }

    pub fn account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(account_number)
    }

    pub fn number_of_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Move `amount` from one of the customer's accounts to another, now.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Amount) -> Result<(), TransactionError> {
        self.transfer_at(from, to, amount, chrono::Utc::now())
    }

    /// Move `amount` between two of the customer's accounts.
    ///
    /// Both legs share the same timestamp. Everything that could fail is
    /// checked before either ledger is touched, so a failed transfer leaves
    /// both accounts unchanged.
    pub fn transfer_at(
        &mut self,
        from: &str,
        to: &str,
        amount: Amount,
        at: Timestamp,
    ) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount(amount));
        }
        if from == to {
            return Err(TransactionError::SameAccount(from.to_owned()));
        }

        let from_balance = self
            .account(from)
            .ok_or_else(|| TransactionError::UnknownAccount(from.to_owned()))?
            .balance();
        let to_balance = self
            .account(to)
            .ok_or_else(|| TransactionError::UnknownAccount(to.to_owned()))?
            .balance();

        from_balance
            .checked_sub(amount)
            .ok_or(TransactionError::Overflow(amount))?;
        to_balance
            .checked_add(amount)
            .ok_or(TransactionError::Overflow(amount))?;

        // Both accounts exist and both legs fit, so neither call below can fail.
        if let Some(account) = self.account_mut(from) {
            account.withdraw_at(amount, at)?;
        }
        if let Some(account) = self.account_mut(to) {
            account.deposit_at(amount, at)?;
        }

        debug!(customer = %self.name, from, to, %amount, "transferred");

        Ok(())
    }
}
