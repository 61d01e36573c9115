//! Statement parsing state machine.
//!
//! Folds classified lines, page by page, into transaction records. A record
//! opened on one page stays in progress across page breaks until the next
//! header line or end of input finalizes it.

use crate::classify::{classify, HeaderFields, LineClass};
use crate::error::Result;
use crate::normalize::{normalize_amount, normalize_balance, normalize_date};
use crate::record::{build_result_set, Transaction};
use log::{debug, warn};

/// The statement parser.
///
/// Holds the two pieces of state the line stream is folded over: whether the
/// operations section has been entered, and the record currently being built.
/// Both persist across page boundaries; one parser instance handles one
/// document.
pub struct StatementParser {
    in_section: bool,
    current: Option<Transaction>,
    records: Vec<Transaction>,
}

impl StatementParser {
    /// Creates a parser with no section entered and no record in progress.
    pub fn new() -> Self {
        StatementParser {
            in_section: false,
            current: None,
            records: Vec::new(),
        }
    }

    /// Processes the text of one page.
    ///
    /// Lines are trimmed and empty lines skipped before classification. A
    /// page-footer marker aborts the remaining lines of this page only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExtractError::InvalidDate`] if a header line carries
    /// an impossible calendar date; the whole parse stops there.
    pub fn process_page(&mut self, text: &str) -> Result<()> {
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match classify(line, self.in_section) {
                LineClass::SectionStart => {
                    debug!("Entering operations section");
                    self.in_section = true;
                }
                LineClass::PageBoundary => {
                    debug!("Page footer reached, skipping rest of page");
                    break;
                }
                LineClass::OperationHeader(fields) => self.start_record(fields)?,
                LineClass::DescriptionContinuation(text) => {
                    match &mut self.current {
                        Some(record) if !text.is_empty() => record.push_description(&text),
                        Some(_) => {}
                        None => warn!("Description line with no record in progress: {}", line),
                    }
                }
                LineClass::Unmatched => {}
            }
        }
        Ok(())
    }

    /// Finalizes the record in progress, if any, and starts a new one from
    /// the captured header fields.
    fn start_record(&mut self, fields: HeaderFields) -> Result<()> {
        if let Some(done) = self.current.take() {
            self.records.push(done);
        }

        debug!(
            "New operation {} auth {} ({})",
            fields.date, fields.auth_code, fields.category
        );

        self.current = Some(Transaction {
            date: normalize_date(&fields.date)?,
            category: fields.category,
            description: String::new(),
            amount: normalize_amount(&fields.amount),
            balance: normalize_balance(&fields.balance),
        });
        Ok(())
    }

    /// Flushes the last in-progress record and returns the filtered,
    /// deduplicated result set in document order.
    pub fn finish(mut self) -> Vec<Transaction> {
        if let Some(done) = self.current.take() {
            self.records.push(done);
        }
        build_result_set(self.records)
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a sequence of page texts in document order.
pub fn parse_pages<I, S>(pages: I) -> Result<Vec<Transaction>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = StatementParser::new();
    for page in pages {
        parser.process_page(page.as_ref())?;
    }
    Ok(parser.finish())
}
