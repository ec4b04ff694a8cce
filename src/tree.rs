//! Huffman tree construction
//!
//! Seeds a [`PriorityQueue`] with one leaf per distinct symbol and merges the
//! two lightest subtrees until a single tree is left.

use tracing::debug;

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::queue::PriorityQueue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Join two subtrees; `left` is the one extracted first.
    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A finished Huffman tree. `root` is `None` for empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut queue = PriorityQueue::with_capacity(frequencies.len());
        for (symbol, weight) in frequencies.iter() {
            queue.insert(weight, Node::Leaf { symbol, weight });
        }

        if queue.is_empty() {
            debug!("no symbols, returning empty tree");
            return Ok(Self::default());
        }

        while queue.len() > 1 {
            let (w1, first) = queue.remove_min()?;
            let (w2, second) = queue.remove_min()?;
            debug!(w1, w2, merged = w1 + w2, "merging subtrees");
            let merged = Node::merge(first, second);
            queue.insert(merged.weight(), merged);
        }

        let root = queue.remove_min_payload()?;
        debug!(weight = root.weight(), "huffman tree complete");
        Ok(Self { root: Some(root) })
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Weight of the root, 0 for the empty tree.
    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::weight)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// Longest root-to-leaf path in edges.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_text(text)).unwrap()
    }

    fn assert_full(node: &Node) {
        if let Node::Internal { weight, left, right } = node {
            assert_eq!(*weight, left.weight() + right.weight());
            assert_full(left);
            assert_full(right);
        }
    }

    #[test]
    fn test_empty_tree() {
        let tree = build("");
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.weight(), 0);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn test_single_symbol_is_bare_leaf() {
        let tree = build("aaaa");
        assert_eq!(tree.root(), Some(&Node::Leaf { symbol: 'a', weight: 4 }));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_aaabbc_merge_order() {
        let tree = build("aaabbc");
        let Some(Node::Internal { weight, left, right }) = tree.root() else {
            panic!("expected internal root");
        };
        assert_eq!(*weight, 6);
        // c(1) and b(2) merge first into a weight-3 subtree.
        let (leaf, merged) = if left.is_leaf() { (left, right) } else { (right, left) };
        assert_eq!(**leaf, Node::Leaf { symbol: 'a', weight: 3 });
        match &**merged {
            Node::Internal { weight, left, right } => {
                assert_eq!(*weight, 3);
                assert_eq!(**left, Node::Leaf { symbol: 'c', weight: 1 });
                assert_eq!(**right, Node::Leaf { symbol: 'b', weight: 2 });
            }
            other => panic!("expected merged subtree, got {:?}", other),
        }
    }

    #[test]
    fn test_root_weight_is_input_length() {
        let text = "she sells sea shells by the sea shore";
        let tree = build(text);
        assert_eq!(tree.weight(), text.chars().count() as u64);
        assert_eq!(tree.leaf_count(), FrequencyTable::from_text(text).len());
        assert_full(tree.root().unwrap());
    }
}
