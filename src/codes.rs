//! Code table generation
//!
//! Walks a finished [`HuffmanTree`] depth-first: a left edge appends `0`, a
//! right edge appends `1`, and each leaf receives the path taken to reach it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::tree::{HuffmanTree, Node};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: HashMap<char, String>,
}

impl CodeTable {
    /// Build the table for `tree`. A tree made of a single leaf has no edges,
    /// so that leaf is bound to `single_symbol_code` instead.
    pub fn from_tree(tree: &HuffmanTree, single_symbol_code: &str) -> Self {
        let mut codes = HashMap::new();
        match tree.root() {
            None => {}
            Some(Node::Leaf { symbol, .. }) => {
                warn!(symbol = ?symbol, code = single_symbol_code, "single-symbol input");
                codes.insert(*symbol, single_symbol_code.to_string());
            }
            Some(root) => assign_codes(root, String::new(), &mut codes),
        }
        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(c, code)| (*c, code.as_str()))
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // After sorting, any prefix sits directly before one of its extensions.
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

fn assign_codes(node: &Node, prefix: String, codes: &mut HashMap<char, String>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{prefix}0"), codes);
            assign_codes(right, prefix + "1", codes);
        }
    }
}
