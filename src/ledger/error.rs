use crate::ledger::operation::OperationRecord;
use crate::ledger::Decimal;

/// Top-level error type for running an operation script.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),
}

/// Errors during `OperationRecord` -> `Operation` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(OperationRecord),
}

/// Domain errors raised by accounts and banks.
/// A script run logs these and moves on to the next row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Insufficient Funds")]
    InsufficientFunds {
        owner: String,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Account for {owner} not found")]
    AccountNotFound { owner: String },

    #[error("Account for {owner} already exists")]
    DuplicateOwner { owner: String },

    #[error("Balance of {owner} would leave the representable range")]
    AmountOutOfRange { owner: String },
}
