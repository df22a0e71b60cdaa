use crate::error::{HuffmanError, Result};
use crate::CodeTable;

/// Persisted layout: the code table as a single JSON object line,
/// terminated by one line break, immediately followed by the packed
/// bytes. serde_json escapes control characters inside strings, so the
/// first raw 0x0A byte always delimits the table.
pub fn serialize(codes: &CodeTable, packed_bytes: &[u8]) -> Result<Vec<u8>> {
    let table_line = serde_json::to_string(codes)
        .map_err(|e| HuffmanError::MalformedArtifact(format!("cannot render code table: {}", e)))?;

    let mut artifact = Vec::with_capacity(table_line.len() + 1 + packed_bytes.len());
    artifact.extend_from_slice(table_line.as_bytes());
    artifact.push(b'\n');
    artifact.extend_from_slice(packed_bytes);

    Ok(artifact)
}

/// Splits an artifact back into its code table and packed bytes,
/// rejecting anything that does not parse into a valid prefix-free
/// table followed by at least the padding-header byte.
pub fn deserialize(artifact: &[u8]) -> Result<(CodeTable, Vec<u8>)> {
    let newline = artifact
        .iter()
        .position(|&byte| byte == b'\n')
        .ok_or_else(|| HuffmanError::MalformedArtifact("missing code table terminator".to_string()))?;

    let table_line = std::str::from_utf8(&artifact[..newline])
        .map_err(|_| HuffmanError::MalformedArtifact("code table is not valid UTF-8".to_string()))?;

    let codes: CodeTable = serde_json::from_str(table_line)
        .map_err(|e| HuffmanError::MalformedArtifact(format!("cannot parse code table: {}", e)))?;

    validate_code_table(&codes)?;

    let packed_bytes = &artifact[newline + 1..];
    if packed_bytes.is_empty() {
        return Err(HuffmanError::MalformedArtifact(
            "artifact truncated before the packed bytes".to_string(),
        ));
    }

    Ok((codes, packed_bytes.to_vec()))
}

/// A parsed table is only usable if every code is a non-empty string of
/// '0'/'1' and no code is a prefix of another.
fn validate_code_table(codes: &CodeTable) -> Result<()> {
    if codes.is_empty() {
        return Err(HuffmanError::MalformedArtifact("code table has no entries".to_string()));
    }

    for (symbol, code) in codes.iter() {
        if code.is_empty() || !code.chars().all(|c| c == '0' || c == '1') {
            return Err(HuffmanError::MalformedArtifact(format!(
                "symbol {:?} has invalid code {:?}",
                symbol, code
            )));
        }
    }

    for (x, code_x) in codes.iter() {
        for (y, code_y) in codes.iter() {
            if x != y && code_y.starts_with(code_x.as_str()) {
                return Err(HuffmanError::MalformedArtifact(format!(
                    "code {:?} of {:?} is a prefix of code {:?} of {:?}",
                    code_x, x, code_y, y
                )));
            }
        }
    }

    Ok(())
}
