use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// A thread-safe in-memory store for debtor accounts.
///
/// Uses `Arc<DashMap<String, Account>>` so clones share the same accounts.
/// Ideal for testing or small datasets where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<DashMap<String, Account>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `accounts`.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let store = Self::new();
        for account in accounts {
            store.accounts.insert(account.number.clone(), account);
        }
        store
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, account_number: &str) -> Result<Option<Account>> {
        Ok(self
            .accounts
            .get(account_number)
            .map(|entry| entry.value().clone()))
    }

    fn update(&self, account: Account) -> Result<()> {
        self.accounts.insert(account.number.clone(), account);
        Ok(())
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(accounts)
    }
}
