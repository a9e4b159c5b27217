use super::Customer;

/// The bank holds its customers in the order they were registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    customers: Vec<Customer>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.add_customer(customer);
        self
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> impl Iterator<Item = &mut Customer> {
        self.customers.iter_mut()
    }

    /// Find the customer holding the given account.
    ///
    /// Accounts don't point back to their owner; this lookup replaces that
    /// back-reference.
    pub fn owner_of(&self, account_number: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.account(account_number).is_some())
    }
}
