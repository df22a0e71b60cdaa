use std::collections::HashMap;

use crate::artifact;
use crate::bitstreams::{bytes_to_bits, pack, pad, unpad};
use crate::error::{HuffmanError, Result};
use crate::hufftree::{build_tree, count_occurrences, generate_codes};
use crate::CodeTable;

/// Replaces each symbol of the text with its code, in order.
///
/// The table is checked on every symbol: it cannot miss an entry when it
/// was derived from the same text, but it may have been supplied
/// externally.
pub fn encode(text: &str, codes: &CodeTable) -> Result<String> {
    let mut encoded = String::new();

    for symbol in text.chars() {
        match codes.get(&symbol) {
            Some(code) => encoded.push_str(code),
            None => return Err(HuffmanError::UnknownSymbol(symbol)),
        }
    }

    Ok(encoded)
}

/// Scans the bit stream left to right, emitting a symbol whenever the
/// accumulated candidate matches an inverted table entry. Unambiguous
/// because the table is prefix-free. Leftover candidate bits at the end
/// mean the stream was truncated or encoded with a different table.
pub fn decode(bits: &str, codes: &CodeTable) -> Result<String> {
    let reversed: HashMap<&str, char> =
        codes.iter().map(|(&symbol, code)| (code.as_str(), symbol)).collect();

    let mut current_code = String::new();
    let mut decoded = String::new();

    for bit in bits.chars() {
        current_code.push(bit);
        if let Some(&symbol) = reversed.get(current_code.as_str()) {
            decoded.push(symbol);
            current_code.clear();
        }
    }

    if !current_code.is_empty() {
        return Err(HuffmanError::CorruptData(format!(
            "{} unmatched bits left at end of stream",
            current_code.len()
        )));
    }

    Ok(decoded)
}

/// Compresses a whole text into an artifact: frequency table, Huffman
/// tree, canonical codes, bit packing, then the serialized layout.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    let occurrences = count_occurrences(text);
    let root = build_tree(&occurrences)?;
    let codes = generate_codes(&root);

    let encoded_bits = encode(text, &codes)?;
    let packed_bytes = pack(&pad(&encoded_bits));

    artifact::serialize(&codes, &packed_bytes)
}

/// Reverses `compress`: parses the artifact, strips the padding and
/// decodes the bit stream back into the original text.
pub fn decompress(artifact_bytes: &[u8]) -> Result<String> {
    let (codes, packed_bytes) = artifact::deserialize(artifact_bytes)?;

    let encoded_bits = unpad(&bytes_to_bits(&packed_bytes))?;

    decode(&encoded_bits, &codes)
}

#[cfg(test)]
mod tests;
