//! huffman-codes: Huffman prefix codes for text.
//!
//! The pipeline runs in one pass over a complete input string:
//! - Frequency analysis of every `char`
//! - A binary min-heap priority queue merging the two lightest subtrees
//! - A depth-first walk of the finished tree assigning `0`/`1` codes
//! - Encoding the input as delimiter-separated code tokens
//!
//! [`HuffmanSession`] owns every intermediate result and exposes them
//! read-only once the build has finished.

pub mod cli;
pub mod codes;
pub mod config;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod input;
pub mod queue;
pub mod report;
pub mod tree;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::codes::CodeTable;
use crate::config::CoderConfig;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// One distinct symbol with its frequency and assigned code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub symbol: char,
    pub frequency: u64,
    pub code: String,
}

/// Size statistics for an encoded input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingSummary {
    pub symbol_count: u64,
    pub distinct_symbols: usize,
    pub encoded_bits: u64,
    pub average_code_length: f64,
    pub entropy_bits: f64,
}

/// A fully built Huffman coding of one input
#[derive(Debug, Clone)]
pub struct HuffmanSession {
    input: String,
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
    encoded: String,
    encoded_bits: u64,
}

impl HuffmanSession {
    /// Build frequencies, tree, codes and encoded output for `input`
    pub fn new(input: impl Into<String>, config: &CoderConfig) -> Result<Self> {
        config.validate()?;
        let input = input.into();

        let size = input.chars().count();
        if size > config.max_input_size {
            return Err(HuffmanError::InputTooLarge {
                size,
                limit: config.max_input_size,
            });
        }

        let frequencies = FrequencyTable::from_text(&input);
        debug!(distinct = frequencies.len(), "frequency table built");

        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree, &config.single_symbol_code);
        debug!(codes = codes.len(), depth = tree.depth(), "code table built");

        let encoded = encoder::encode(&input, &codes, &config.delimiter)?;
        let encoded_bits = encoder::encoded_bit_length(&input, &codes)?;
        info!(
            symbols = size,
            distinct = frequencies.len(),
            encoded_bits,
            "huffman session complete"
        );

        Ok(Self {
            input,
            frequencies,
            tree,
            codes,
            encoded,
            encoded_bits,
        })
    }

    /// Build with the default configuration
    pub fn from_text(input: impl Into<String>) -> Result<Self> {
        Self::new(input, &CoderConfig::default())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// The encoded input: one code token per input symbol
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Entries for every distinct symbol in first-seen order
    pub fn code_list(&self) -> Vec<CodeEntry> {
        self.frequencies
            .iter()
            .filter_map(|(symbol, frequency)| {
                self.codes.get(symbol).map(|code| CodeEntry {
                    symbol,
                    frequency,
                    code: code.to_string(),
                })
            })
            .collect()
    }

    pub fn summary(&self) -> EncodingSummary {
        let symbol_count = self.frequencies.total();
        let average_code_length = if symbol_count == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / symbol_count as f64
        };
        EncodingSummary {
            symbol_count,
            distinct_symbols: self.frequencies.len(),
            encoded_bits: self.encoded_bits,
            average_code_length,
            entropy_bits: self.compute_entropy(),
        }
    }

    /// Shannon entropy of the input in bits per symbol
    fn compute_entropy(&self) -> f64 {
        let total = self.frequencies.total();
        if total == 0 {
            return 0.0;
        }
        let len = total as f64;
        let mut entropy = 0.0;
        for (_, f) in self.frequencies.iter() {
            let p = f as f64 / len;
            entropy -= p * p.log2();
        }
        entropy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_aaabbc() {
        let session = HuffmanSession::from_text("aaabbc").unwrap();
        assert_eq!(session.tree().weight(), 6);
        assert_eq!(session.codes().len(), 3);
        assert_eq!(session.encoded().split(' ').count(), 6);
        assert!(session.codes().is_prefix_free());
    }

    #[test]
    fn test_code_list_first_seen_order() {
        let session = HuffmanSession::from_text("banana").unwrap();
        let list = session.code_list();
        let symbols: Vec<char> = list.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, vec!['b', 'a', 'n']);
        assert_eq!(list[1].frequency, 3);
        assert_eq!(list[1].code, session.codes().get('a').unwrap());
    }

    #[test]
    fn test_empty_input_is_valid() {
        let session = HuffmanSession::from_text("").unwrap();
        assert!(session.frequencies().is_empty());
        assert!(session.tree().is_empty());
        assert!(session.codes().is_empty());
        assert_eq!(session.encoded(), "");
        assert!(session.code_list().is_empty());
        assert_eq!(session.summary().average_code_length, 0.0);
    }

    #[test]
    fn test_input_too_large() {
        let config = CoderConfig {
            max_input_size: 4,
            ..CoderConfig::default()
        };
        let result = HuffmanSession::new("hello", &config);
        assert!(matches!(
            result,
            Err(HuffmanError::InputTooLarge { size: 5, limit: 4 })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CoderConfig {
            delimiter: String::new(),
            ..CoderConfig::default()
        };
        assert!(HuffmanSession::new("abc", &config).is_err());
    }

    #[test]
    fn test_summary_uniform_data() {
        let session = HuffmanSession::from_text("aaaaaaaaaa").unwrap();
        let summary = session.summary();
        assert_eq!(summary.symbol_count, 10);
        assert_eq!(summary.encoded_bits, 10);
        assert!(summary.entropy_bits < 0.01, "uniform data should have ~0 entropy");
    }

    #[test]
    fn test_average_length_bounded_by_entropy() {
        let session = HuffmanSession::from_text("the quick brown fox jumps over the lazy dog").unwrap();
        let summary = session.summary();
        assert!(summary.average_code_length >= summary.entropy_bits - 1e-9);
        assert!(summary.average_code_length < summary.entropy_bits + 1.0);
    }
}
