//! Line classification for statement pages.
//!
//! Pattern-matches one trimmed line at a time against the known record
//! shapes. The section-start marker is the only shape recognized before the
//! operations section has been entered; everything else is gated on the
//! `in_section` flag.

use regex::Regex;
use std::sync::OnceLock;

/// Literal marker that opens the operations table.
const SECTION_MARKER: &str = "Расшифровка операций";

/// Raw field captures from an operation header line, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub date: String,
    pub auth_code: String,
    pub category: String,
    pub amount: String,
    pub balance: String,
}

/// The classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Marker line opening the operations table (trailing content allowed).
    SectionStart,
    /// Footer marker; the rest of the current page carries no data.
    PageBoundary,
    /// Line that begins a new transaction record.
    OperationHeader(HeaderFields),
    /// Free-text continuation for the record in progress; payload is trimmed
    /// and may be empty.
    DescriptionContinuation(String),
    /// Line with no recognized shape; ignored.
    Unmatched,
}

/// Operation header: `DATE TIME AUTHCODE CATEGORY SIGNED_AMOUNT BALANCE`,
/// anchored to the full line. The category capture is non-greedy so the
/// trailing amount and balance anchor the match.
fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(\d{2}\.\d{2}\.\d{4})\s+\d{2}:\d{2}\s+(\d{6})\s+(.*?)\s+([+-]?\s*[\d\s]+,\d{2})\s+([\d\s]+,\d{2})$",
        )
        .expect("header pattern compiles")
    })
}

/// Description continuation: a date token followed by free text. The payload
/// stops at the card-operation boilerplate when present.
fn description_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{2}\.\d{2}\.\d{4}\s+(.*?)(?:\. Операция по карте|$)")
            .expect("description pattern compiles")
    })
}

/// Page footer phrases; either one ends the usable content of a page.
fn footer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Продолжение на следующей странице|Для проверки подлинности документа")
            .expect("footer pattern compiles")
    })
}

/// Classifies one trimmed, non-empty line.
///
/// Header lines are tested before description lines, so a line matching both
/// shapes always classifies as a header.
pub fn classify(line: &str, in_section: bool) -> LineClass {
    if line.contains(SECTION_MARKER) {
        return LineClass::SectionStart;
    }
    if !in_section {
        return LineClass::Unmatched;
    }
    if footer_re().is_match(line) {
        return LineClass::PageBoundary;
    }
    if let Some(caps) = header_re().captures(line) {
        return LineClass::OperationHeader(HeaderFields {
            date: caps[1].to_string(),
            auth_code: caps[2].to_string(),
            category: caps[3].trim().to_string(),
            amount: caps[4].to_string(),
            balance: caps[5].to_string(),
        });
    }
    if let Some(caps) = description_re().captures(line) {
        return LineClass::DescriptionContinuation(caps[1].trim().to_string());
    }
    LineClass::Unmatched
}
