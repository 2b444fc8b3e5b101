//! Ledger module.
//!
//! This module contains the balance rules and everything built on them:
//! - `Account` - Owner and exact balance with debit/credit
//! - `Bank` - Named collection of accounts coordinating transfers
//! - `Operation` types - Scripted open/debit/credit/transfer rows
//! - `SharedAccount` - Lock-protected account for use across threads
//! - `Error` types - Domain and script errors

mod account;
mod bank;
mod error;
mod operation;
mod script;
mod shared;

pub(crate) use rust_decimal::Decimal;

pub use account::Account;
pub use bank::{Bank, BankId};
pub use error::{Error, LedgerError, OperationError};
pub use operation::{Operation, OperationRecord, OperationType};
pub use script::ScriptSummary;
pub use shared::{transfer_shared, SharedAccount};
