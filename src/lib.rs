//! # Statement Extract
//!
//! Extracts transaction records from the text layout of a paginated bank
//! statement PDF and exports them to CSV.
//!
//! ## Design Principles
//!
//! - **Line-oriented parsing**: each page is split into trimmed lines and
//!   classified against anchored regex shapes
//! - **Explicit state machine**: one in-progress record and a section flag,
//!   both surviving page breaks
//! - **Fail the document, not the record**: an invalid calendar date on a
//!   header line aborts the whole parse
//! - **Canonical text fields**: amounts and balances are re-rendered with
//!   `.` decimals and no grouping before export
//!
//! ## Example
//!
//! ```
//! use statement_extract::parse_pages;
//!
//! let page = "Расшифровка операций\n\
//!             01.01.2024 12:00 123456 Продукты -1 000,00 5 000,00\n\
//!             01.01.2024 Покупка в магазине\n";
//! let records = parse_pages([page]).unwrap();
//! assert_eq!(records[0].amount, "-1000.00");
//! ```

pub mod classify;
pub mod error;
pub mod export;
pub mod normalize;
pub mod parser;
pub mod pdf;
pub mod record;

pub use classify::{classify, HeaderFields, LineClass};
pub use error::{ExtractError, Result};
pub use parser::{parse_pages, StatementParser};
pub use record::{build_result_set, Transaction};
