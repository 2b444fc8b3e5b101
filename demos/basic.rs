//! Basic example of using a `Bank`.
//!
//! Run with: `cargo run --example basic`

use bank_ledger::{Account, Bank};
use rust_decimal::Decimal;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Direct API: transfer between two accounts
    let bank = Bank::new("Banco del Estado");
    let mut juan = Account::new("Juan", Decimal::new(15_008_989, 4));
    let mut john = Account::new("John Doe", Decimal::from(2500));
    bank.transfer(&mut juan, &mut john, Decimal::from(500))
        .expect("Juan has enough funds");
    println!("Juan: {}, John Doe: {}", juan.balance(), john.balance());

    // Scripted API: the same ledger rules driven from CSV
    let operations = r"op,owner,to,amount
open,Juan,,1000.12345
open,John Doe,,2500
debit,Juan,,100
credit,John Doe,,0.5
transfer,Juan,John Doe,1500
transfer,John Doe,Juan,500.5
";

    let mut bank = Bank::new("Banco del Estado");
    bank.process_operations(Cursor::new(operations))
        .expect("Failed to process operations");

    println!("\n=== Final Balances ===");
    bank.export_accounts(std::io::stdout())
        .expect("Failed to export accounts");
}
