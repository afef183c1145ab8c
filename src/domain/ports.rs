use super::account::Account;
use crate::error::Result;

/// Persistence port for debtor accounts.
///
/// `update` is an upsert: it replaces the stored account with the same number
/// or inserts it if absent.
pub trait AccountStore: Send + Sync {
    fn get(&self, account_number: &str) -> Result<Option<Account>>;
    fn update(&self, account: Account) -> Result<()>;
    fn all_accounts(&self) -> Result<Vec<Account>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type AccountStoreFactory = Box<dyn Fn() -> Result<AccountStoreBox> + Send + Sync>;
