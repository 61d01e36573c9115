//! Transaction record model and result-set construction.

use serde::Serialize;
use std::collections::HashSet;

/// A finalized, normalized transaction record.
///
/// All fields are canonical text: date as `dd.mm.yyyy`, amount as a signed
/// decimal with `.` separator and no grouping (positive amounts unsigned),
/// balance the same without a sign. The serde renames carry the spreadsheet
/// column labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Transaction {
    /// Operation date
    #[serde(rename = "Дата операции")]
    pub date: String,

    /// Category label captured verbatim from the header line
    #[serde(rename = "Категория")]
    pub category: String,

    /// Accumulated description; empty when no continuation lines matched
    #[serde(rename = "Описание операции")]
    pub description: String,

    /// Signed canonical amount
    #[serde(rename = "Сумма операции")]
    pub amount: String,

    /// Unsigned canonical balance
    #[serde(rename = "Сальдо")]
    pub balance: String,
}

impl Transaction {
    /// Appends a description fragment, space-joined with what is already there.
    pub fn push_description(&mut self, fragment: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(fragment);
    }

    /// A record is exportable only when date, amount, and balance are present.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.amount.is_empty() && !self.balance.is_empty()
    }
}

/// Builds the final result set: drops records missing date, amount, or
/// balance, then removes exact duplicates, keeping the first occurrence and
/// preserving document order.
pub fn build_result_set(records: Vec<Transaction>) -> Vec<Transaction> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(Transaction::is_complete)
        .filter(|record| seen.insert(record.clone()))
        .collect()
}
