//! Accounts that can be debited, credited and transferred from several threads.
//!
//! Each [`SharedAccount`] guards its [`Account`] with its own lock. A transfer takes
//! both locks in ascending lock-id order, so two opposite transfers between the same
//! pair of accounts can never deadlock.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::account::Account;
use super::error::LedgerError;
use super::Decimal;

static NEXT_LOCK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
pub struct SharedAccount {
    lock_id: u64,
    inner: Mutex<Account>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            lock_id: NEXT_LOCK_ID.fetch_add(1, Ordering::Relaxed),
            inner: Mutex::new(account),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.inner.lock().balance()
    }

    /// Copy of the account as it is right now
    pub fn snapshot(&self) -> Account {
        self.inner.lock().clone()
    }

    pub fn debit(&self, amount: Decimal) -> Result<(), LedgerError> {
        self.inner.lock().debit(amount)
    }

    pub fn credit(&self, amount: Decimal) {
        self.inner.lock().credit(amount);
    }

    pub fn into_inner(self) -> Account {
        self.inner.into_inner()
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}

/// Move `amount` from `from` to `to` while holding both accounts' locks.
///
/// Same all-or-nothing behavior as [`Bank::transfer`](super::Bank::transfer).
pub fn transfer_shared(
    from: &SharedAccount,
    to: &SharedAccount,
    amount: Decimal,
) -> Result<(), LedgerError> {
    if from.lock_id == to.lock_id {
        let mut account = from.inner.lock();
        account.debit(amount)?;
        account.credit(amount);
        return Ok(());
    }

    let (mut from_guard, mut to_guard) = if from.lock_id < to.lock_id {
        let first = from.inner.lock();
        let second = to.inner.lock();
        (first, second)
    } else {
        let first = to.inner.lock();
        let second = from.inner.lock();
        (second, first)
    };

    to_guard.credited_balance(amount)?;
    from_guard.debit(amount)?;
    to_guard.credit(amount);
    Ok(())
}
