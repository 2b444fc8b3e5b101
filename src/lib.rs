//! An exact-decimal bank ledger.
//!
//! Accounts carry an owner and a [`rust_decimal::Decimal`] balance that can never be
//! overdrawn by a debit. A [`Bank`] owns a set of accounts and moves money between
//! accounts with an all-or-nothing [`Bank::transfer`].

mod ledger;

pub use ledger::{
    transfer_shared, Account, Bank, BankId, Error, LedgerError, Operation, OperationError,
    OperationRecord, OperationType, ScriptSummary, SharedAccount,
};
