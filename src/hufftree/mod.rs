use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{HuffmanError, Result};
use crate::min_heap::MinHeap;
use crate::{CodeTable, FrequencyTable};

/// A node of the Huffman tree. Every internal node owns exactly two
/// children and its weight is the sum of theirs.
#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Heap handle for a node during tree construction.
///
/// The ordering is the determinism contract of the whole codec: weight
/// ascending, then at equal weight a leaf orders strictly before any
/// internal node, two leaves fall back to the symbol's code point, and
/// two internal nodes fall back to their creation sequence number.
#[derive(Debug)]
pub struct HeapEntry {
    pub node: HuffNode,
    pub seq: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then_with(|| match (&self.node, &other.node) {
                (HuffNode::Leaf { symbol: a, .. }, HuffNode::Leaf { symbol: b, .. }) => a.cmp(b),
                (HuffNode::Leaf { .. }, HuffNode::Internal { .. }) => Ordering::Less,
                (HuffNode::Internal { .. }, HuffNode::Leaf { .. }) => Ordering::Greater,
                (HuffNode::Internal { .. }, HuffNode::Internal { .. }) => self.seq.cmp(&other.seq),
            })
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Counts the occurrences of each symbol in the text.
pub fn count_occurrences(text: &str) -> FrequencyTable {
    let mut occurrences = FrequencyTable::new();
    for symbol in text.chars() {
        *occurrences.entry(symbol).or_insert(0) += 1;
    }
    occurrences
}

/// Builds the Huffman tree for a frequency table and returns its root.
///
/// One leaf per symbol goes into the priority queue; the two minimum
/// nodes are repeatedly merged under a fresh internal node until a
/// single node remains. A table with a single symbol yields a lone leaf
/// as root.
pub fn build_tree(occurrences: &FrequencyTable) -> Result<HuffNode> {
    if occurrences.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let mut queue = MinHeap::new();
    let mut seq = 0;

    for (&symbol, &weight) in occurrences.iter() {
        queue.insert(HeapEntry { node: HuffNode::Leaf { symbol, weight }, seq });
        seq += 1;
    }

    while queue.len() > 1 {
        let x = queue.extract_min()?;
        let y = queue.extract_min()?;

        queue.insert(HeapEntry { node: HuffNode::merge(x.node, y.node), seq });
        seq += 1;
    }

    Ok(queue.extract_min()?.node)
}

/// Walks the tree iteratively and returns the code length of each
/// symbol. A root that is itself a leaf still gets a 1-bit code.
pub fn code_lengths(root: &HuffNode) -> BTreeMap<char, usize> {
    let mut lengths = BTreeMap::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                lengths.insert(*symbol, depth.max(1));
            }
            HuffNode::Internal { left, right, .. } => {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
    }

    lengths
}

/// Assigns canonical codes from the tree's code lengths: symbols are
/// ordered by (length, symbol) and receive consecutive values, the
/// running value shifting left whenever the length grows.
pub fn generate_codes(root: &HuffNode) -> CodeTable {
    let mut by_length: BTreeMap<usize, Vec<char>> = BTreeMap::new();
    for (symbol, len) in code_lengths(root) {
        by_length.entry(len).or_default().push(symbol);
    }

    let mut codes = CodeTable::new();
    let mut current: u64 = 0;
    let mut prev_len = 0;

    for (len, symbols) in by_length {
        current <<= len - prev_len;
        for symbol in symbols {
            codes.insert(symbol, format!("{:0width$b}", current, width = len));
            current += 1;
        }
        prev_len = len;
    }

    codes
}
