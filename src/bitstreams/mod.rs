use crate::error::{HuffmanError, Result};

/// Prepends the 8-bit padding header and appends the trailing zero bits
/// that bring the stream to a whole number of bytes. The header value is
/// the number of appended bits, always in [0, 7].
pub fn pad(bits: &str) -> String {
    let extra = (8 - bits.len() % 8) % 8;

    let mut padded = String::with_capacity(8 + bits.len() + extra);
    padded.push_str(&format!("{:08b}", extra));
    padded.push_str(bits);
    for _ in 0..extra {
        padded.push('0');
    }

    padded
}

/// Groups a padded bit stream into consecutive 8-bit big-endian chunks.
/// The input length must be a multiple of 8, which `pad` guarantees.
pub fn pack(padded_bits: &str) -> Vec<u8> {
    padded_bits
        .as_bytes()
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | (bit - b'0')))
        .collect()
}

/// Expands each byte into its 8-bit big-endian textual form.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.push_str(&format!("{:08b}", byte));
    }
    bits
}

/// Strips the padding header and the trailing padding bits it announces.
pub fn unpad(padded_bits: &str) -> Result<String> {
    if padded_bits.len() < 8 {
        return Err(HuffmanError::CorruptData(
            "padded stream shorter than the 8-bit padding header".to_string(),
        ));
    }

    let (header, body) = padded_bits.split_at(8);
    let extra = usize::from_str_radix(header, 2)
        .map_err(|_| HuffmanError::CorruptData(format!("invalid padding header {:?}", header)))?;

    if extra > 7 {
        return Err(HuffmanError::CorruptData(format!(
            "padding header {} outside the range [0, 7]",
            extra
        )));
    }
    if body.len() < extra {
        return Err(HuffmanError::CorruptData(format!(
            "padded stream of {} bits cannot hold {} padding bits",
            body.len(),
            extra
        )));
    }

    Ok(body[..body.len() - extra].to_string())
}
