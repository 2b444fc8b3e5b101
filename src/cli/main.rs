mod commands;

use std::fs::File;

use anyhow::{bail, Context, Result};
use bank_ledger::{Bank, ScriptSummary};
use clap::Parser;
use commands::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default level is info; override with RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut bank = Bank::new(args.bank_name.as_str());
    let summary = run_script(&mut bank, &args)?;

    bank.export_accounts(std::io::stdout())
        .context("Failed to export balances to stdout")?;

    eprintln!(
        "{}: {} rows applied, {} skipped, {} accounts",
        bank.name(),
        summary.applied,
        summary.skipped,
        bank.account_count()
    );

    if args.strict && !summary.is_clean() {
        bail!(
            "{} row(s) of {} were skipped",
            summary.skipped,
            args.input_file.display()
        );
    }
    Ok(())
}

fn run_script(bank: &mut Bank, args: &Args) -> Result<ScriptSummary> {
    log::info!(
        "Applying operations from {} to {}",
        args.input_file.display(),
        bank.name()
    );
    let file = File::open(&args.input_file)
        .with_context(|| format!("Failed to open input file: {}", args.input_file.display()))?;

    bank.process_operations(file)
        .with_context(|| format!("Failed to apply {}", args.input_file.display()))
}
