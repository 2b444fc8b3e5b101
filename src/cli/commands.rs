pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-ledger",
    author,
    version,
    about = "Apply an operation script to an exact-decimal bank ledger",
    long_about = None,
    after_help = "OUTPUT:\n    Final balances are printed to stdout in CSV format (owner,balance).\n    Use shell redirection to save to a file:\n\n    bank-ledger operations.csv > balances.csv"
)]
pub struct Args {
    /// Path to the input operations CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: op, owner, to, amount"
    )]
    pub input_file: PathBuf,

    /// Name of the bank the accounts are opened in
    #[arg(long = "bank", value_name = "NAME", default_value = "Banco del Estado")]
    pub bank_name: String,

    /// Exit with an error if any row was skipped by a ledger rule
    #[arg(long)]
    pub strict: bool,
}
