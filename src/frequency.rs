//! Symbol frequency analysis
//!
//! Counts every `char` of the input in one pass, remembering the order in
//! which distinct symbols first appear.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    order: Vec<char>,
    counts: HashMap<char, u64>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::default();
        for c in text.chars() {
            let count = table.counts.entry(c).or_insert(0);
            if *count == 0 {
                table.order.push(c);
            }
            *count += 1;
        }
        table
    }

    /// Distinct symbols in first-seen order.
    pub fn symbols(&self) -> &[char] {
        &self.order
    }

    /// Occurrences of `symbol`, or 0 when it never appeared.
    pub fn count(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts; equals the input length in chars.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.order.iter().map(move |&c| (c, self.counts[&c]))
    }
}
