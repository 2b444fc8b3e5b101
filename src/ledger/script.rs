use std::io::{Read, Write};

use super::bank::Bank;
use super::error::{Error, LedgerError};
use super::operation::{Operation, OperationRecord};

/// Row counts of one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub applied: u64,
    pub skipped: u64,
}

impl ScriptSummary {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

impl Bank {
    /// Apply an operation script from any source (File, `TcpStream`, etc.)
    ///
    /// Malformed rows stop the run with an error. Rows that fail a ledger rule
    /// (insufficient funds, unknown or duplicate owner, balance out of range) are
    /// logged, skipped and counted in the returned [`ScriptSummary`].
    /// The CSV reader is buffered, so `reader` does not need an `io::BufReader`.
    pub fn process_operations<R: Read>(&mut self, reader: R) -> Result<ScriptSummary, Error> {
        log::info!("[{}] Starting operation processing", self.name());

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut summary = ScriptSummary::default();

        for result in csv_reader.deserialize() {
            let record: OperationRecord = result?;

            let row_num = summary.applied + summary.skipped + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            let operation = Operation::try_from(record)?;

            if let Err(e) = self.apply_operation(operation) {
                log::warn!("[row {row_num}] - Skipped: {e}");
                summary.skipped += 1;
            } else {
                summary.applied += 1;
            }
        }

        log::info!(
            "Processing complete: {} applied, {} skipped, {} accounts",
            summary.applied,
            summary.skipped,
            self.account_count()
        );
        Ok(summary)
    }

    /// Write every member account as `owner,balance` to any sink, in insertion order.
    pub fn export_accounts<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.account_count());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for account in self.accounts() {
            csv_writer.serialize(account)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    /// Apply a single validated operation.
    pub fn apply_operation(&mut self, operation: Operation) -> Result<(), LedgerError> {
        log::trace!("Applying operation: {operation}");
        match operation {
            Operation::Open { owner, balance } => {
                self.open_account(owner, balance)?;
                Ok(())
            }
            Operation::Debit { owner, amount } => self.debit_member(&owner, amount),
            Operation::Credit { owner, amount } => self.credit_member(&owner, amount),
            Operation::Transfer { from, to, amount } => self.transfer_between(&from, &to, amount),
        }
    }
}
