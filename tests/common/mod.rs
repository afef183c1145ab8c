#![allow(dead_code)]

use scheme_payments::domain::account::Account;
use scheme_payments::domain::ports::AccountStore;
use scheme_payments::error::{PaymentError, Result};
use scheme_payments::infrastructure::in_memory::InMemoryAccountStore;
use std::io::Error;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps an in-memory store and counts every call made through the port.
#[derive(Clone, Default)]
pub struct RecordingAccountStore {
    inner: InMemoryAccountStore,
    gets: Arc<AtomicUsize>,
    updates: Arc<AtomicUsize>,
}

impl RecordingAccountStore {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            inner: InMemoryAccountStore::with_accounts(accounts),
            ..Self::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Reads an account without counting it as a port call.
    pub fn peek(&self, account_number: &str) -> Option<Account> {
        self.inner.get(account_number).unwrap()
    }
}

impl AccountStore for RecordingAccountStore {
    fn get(&self, account_number: &str) -> Result<Option<Account>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(account_number)
    }

    fn update(&self, account: Account) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(account)
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts()
    }
}

/// A store that finds accounts but refuses to persist them.
pub struct ReadOnlyAccountStore {
    inner: InMemoryAccountStore,
}

impl ReadOnlyAccountStore {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            inner: InMemoryAccountStore::with_accounts(accounts),
        }
    }
}

impl AccountStore for ReadOnlyAccountStore {
    fn get(&self, account_number: &str) -> Result<Option<Account>> {
        self.inner.get(account_number)
    }

    fn update(&self, _account: Account) -> Result<()> {
        Err(PaymentError::IoError(Error::other("store is read-only")))
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts()
    }
}

pub fn write_csv(path: &Path, header: &[&str], rows: &[&[&str]]) -> std::result::Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(*row)?;
    }
    wtr.flush()?;
    Ok(())
}
