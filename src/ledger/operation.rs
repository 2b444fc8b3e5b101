use super::error::OperationError;
use super::Decimal;
use serde::Deserialize;

/// Raw operation record as parsed from CSV input.
/// This is the unvalidated form that needs conversion to an [`Operation`].
#[derive(Debug, Deserialize, Clone)]
pub struct OperationRecord {
    pub op: OperationType,
    pub owner: String,
    /// Destination owner: required for Transfer, must be empty otherwise
    pub to: Option<String>,
    /// Opening balance for Open, amount moved for everything else.
    /// Kept as text so it can be parsed without rounding.
    pub amount: Option<String>,
}

impl std::fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (owner: {}", self.op, self.owner)?;
        if let Some(to) = &self.to {
            write!(f, ", to: {to}")?;
        }
        if let Some(amount) = &self.amount {
            write!(f, ", amount: {amount}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Open,
    Debit,
    Credit,
    Transfer,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Open => write!(f, "open"),
            OperationType::Debit => write!(f, "debit"),
            OperationType::Credit => write!(f, "credit"),
            OperationType::Transfer => write!(f, "transfer"),
        }
    }
}

/// A validated operation ready to be applied to a bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Open { owner: String, balance: Decimal },
    Debit { owner: String, amount: Decimal },
    Credit { owner: String, amount: Decimal },
    Transfer {
        from: String,
        to: String,
        amount: Decimal,
    },
}

impl TryFrom<OperationRecord> for Operation {
    type Error = OperationError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        // from_str_exact refuses input that would have to be rounded to fit a Decimal
        let amount = match record.amount.as_deref().map(Decimal::from_str_exact) {
            Some(Ok(amount)) if amount >= Decimal::ZERO => amount,
            _ => return Err(OperationError::InvalidOperation(record)),
        };
        if record.owner.is_empty() {
            return Err(OperationError::InvalidOperation(record));
        }

        match (record.op, record.to.as_deref()) {
            (OperationType::Open, None) => Ok(Operation::Open {
                owner: record.owner,
                balance: amount,
            }),
            (OperationType::Debit, None) => Ok(Operation::Debit {
                owner: record.owner,
                amount,
            }),
            (OperationType::Credit, None) => Ok(Operation::Credit {
                owner: record.owner,
                amount,
            }),
            (OperationType::Transfer, Some(to)) if !to.is_empty() => Ok(Operation::Transfer {
                from: record.owner,
                to: to.to_string(),
                amount,
            }),
            _ => Err(OperationError::InvalidOperation(record)),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Open { owner, balance } => {
                write!(f, "[open] owner={owner} balance={balance}")
            }
            Operation::Debit { owner, amount } => {
                write!(f, "[debit] owner={owner} amount={amount}")
            }
            Operation::Credit { owner, amount } => {
                write!(f, "[credit] owner={owner} amount={amount}")
            }
            Operation::Transfer { from, to, amount } => {
                write!(f, "[transfer] from={from} to={to} amount={amount}")
            }
        }
    }
}
