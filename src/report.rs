//! Human-readable and JSON reports of a session

use std::cmp::Reverse;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{CodeEntry, EncodingSummary, HuffmanSession};

/// Order entries by ascending frequency, then by descending code length.
/// Entries equal on both keep their incoming order.
pub fn sorted_entries(entries: &[CodeEntry]) -> Vec<CodeEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| (e.frequency, Reverse(e.code.len())));
    sorted
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub input: String,
    pub codes: Vec<CodeEntry>,
    pub encoded: String,
    pub summary: EncodingSummary,
}

impl Report {
    pub fn from_session(session: &HuffmanSession) -> Self {
        Self {
            input: session.input().to_string(),
            codes: sorted_entries(&session.code_list()),
            encoded: session.encoded().to_string(),
            summary: session.summary(),
        }
    }
}

pub fn render_text(session: &HuffmanSession) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "String: {}", session.input());
    for entry in sorted_entries(&session.code_list()) {
        let _ = writeln!(out, "{} {} {}", entry.symbol, entry.code, entry.frequency);
    }
    let _ = writeln!(out, "Encoded String: {}", session.encoded());
    out
}

pub fn render_json(session: &HuffmanSession) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::from_session(session))?)
}
