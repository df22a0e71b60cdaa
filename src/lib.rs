use std::collections::{BTreeMap, HashMap};

pub mod artifact;
pub mod bitstreams;
pub mod codec;
pub mod error;
pub mod hufftree;
pub mod min_heap;

/// Occurrence count per symbol, built once per compression call.
pub type FrequencyTable = HashMap<char, usize>;

/// Prefix-free mapping from symbol to its code as a string of '0'/'1'.
/// Kept sorted so the persisted form is deterministic.
pub type CodeTable = BTreeMap<char, String>;
