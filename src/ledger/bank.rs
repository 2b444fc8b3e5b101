use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::account::Account;
use super::error::LedgerError;
use super::Decimal;

static NEXT_BANK_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Bank`], held by member accounts as their back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BankId(u64);

impl BankId {
    pub(super) fn next() -> Self {
        Self(NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bank#{}", self.0)
    }
}

/// A named bank owning a collection of accounts.
///
/// [`Bank::transfer`] works on any two accounts, members or not. The `*_member`
/// operations and [`Bank::transfer_between`] address member accounts by owner.
#[derive(Debug)]
pub struct Bank {
    id: BankId,
    name: String,
    /// Member accounts in insertion order
    accounts: Vec<Account>,
}

impl Bank {
    /// Create a new `Bank` with no accounts
    pub fn new(name: impl Into<String>) -> Self {
        let bank = Self {
            id: BankId::next(),
            name: name.into(),
            accounts: Vec::new(),
        };
        log::trace!("Bank {} ({}) initialized", bank.name, bank.id);
        bank
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Member accounts in the order they were added
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns the number of member accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Returns the first member account held by `owner`
    pub fn find_account(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /// Add `account` to this bank and point its back-reference here.
    pub fn add_account(&mut self, mut account: Account) {
        account.attach(self.id);
        log::debug!("[{}] Added account for {}", self.name, account.owner());
        self.accounts.push(account);
    }

    /// Open a member account, refusing an owner that already has one.
    pub fn open_account(
        &mut self,
        owner: impl Into<String>,
        balance: Decimal,
    ) -> Result<&Account, LedgerError> {
        let owner = owner.into();
        if self.find_account(&owner).is_some() {
            return Err(LedgerError::DuplicateOwner { owner });
        }

        self.add_account(Account::new(owner, balance));
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// The credit side is range-checked, then the debit runs and the credit only runs
    /// if it succeeded, so on error neither account has changed. Neither account needs
    /// to be a member.
    pub fn transfer(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        log::trace!(
            "[{}] transfer {} -> {} amount={}",
            self.name,
            from.owner(),
            to.owner(),
            amount
        );
        to.credited_balance(amount)?;
        from.debit(amount)?;
        to.credit(amount);
        Ok(())
    }

    pub fn debit_member(&mut self, owner: &str, amount: Decimal) -> Result<(), LedgerError> {
        let index = self.position(owner)?;
        self.accounts[index].debit(amount)
    }

    pub fn credit_member(&mut self, owner: &str, amount: Decimal) -> Result<(), LedgerError> {
        let index = self.position(owner)?;
        self.accounts[index].try_credit(amount)
    }

    /// Transfer between two member accounts addressed by owner.
    ///
    /// Both owners are resolved before anything is mutated.
    pub fn transfer_between(
        &mut self,
        from_owner: &str,
        to_owner: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let from = self.position(from_owner)?;
        let to = self.position(to_owner)?;

        if from == to {
            let account = &mut self.accounts[from];
            account.debit(amount)?;
            account.credit(amount);
            return Ok(());
        }

        let (from_account, to_account) = pair_mut(&mut self.accounts, from, to);
        log::trace!(
            "[{}] transfer {} -> {} amount={}",
            self.name,
            from_owner,
            to_owner,
            amount
        );
        to_account.credited_balance(amount)?;
        from_account.debit(amount)?;
        to_account.credit(amount);
        Ok(())
    }

    fn position(&self, owner: &str) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.owner() == owner)
            .ok_or_else(|| LedgerError::AccountNotFound {
                owner: owner.to_string(),
            })
    }
}

/// Borrow two distinct elements mutably.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
