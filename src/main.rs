//! Statement Extract CLI
//!
//! Reads a bank statement PDF and writes the extracted transactions to a CSV
//! file, with a short console preview.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- statement.pdf [output.csv]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use statement_extract::{export, parse_pages, pdf, ExtractError, Result};
use std::env;
use std::path::Path;
use std::process;

/// Output file used when no explicit path is given.
const DEFAULT_OUTPUT: &str = "statement.csv";

/// Number of records shown in the console preview.
const PREVIEW_ROWS: usize = 5;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ExtractError::MissingArgument);
    }

    let input_path = Path::new(&args[1]);
    let output_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let pages = pdf::extract_pages(input_path)?;
    let records = parse_pages(&pages)?;

    if records.is_empty() {
        println!("No transaction records could be extracted");
        return Ok(());
    }

    export::write_csv_path(&records, Path::new(output_path))?;

    println!("Saved {} transactions to {}", records.len(), output_path);
    println!("\nFirst records:");
    for record in records.iter().take(PREVIEW_ROWS) {
        println!(
            "{}  {}  {}  {}",
            record.date, record.category, record.amount, record.balance
        );
    }

    Ok(())
}
