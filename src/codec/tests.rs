use rand::Rng;

use crate::artifact::deserialize;
use crate::error::HuffmanError;
use crate::CodeTable;

use super::{compress, decode, decompress, encode};

fn table(pairs: &[(char, &str)]) -> CodeTable {
    pairs.iter().map(|&(symbol, code)| (symbol, code.to_string())).collect()
}

#[test]
fn test_scenario_a_bit_exact() {
    let artifact = compress("aaab").unwrap();

    let (codes, packed) = deserialize(&artifact).unwrap();
    assert_eq!(codes, table(&[('a', "0"), ('b', "1")]));
    assert_eq!(packed, vec![0x04, 0x10]);

    assert_eq!(decompress(&artifact).unwrap(), "aaab");
}

#[test]
fn test_scenario_b_singleton_alphabet() {
    let artifact = compress("aaaa").unwrap();

    let (codes, packed) = deserialize(&artifact).unwrap();
    assert_eq!(codes, table(&[('a', "0")]));
    assert_eq!(packed, vec![0x04, 0x00]);

    assert_eq!(decompress(&artifact).unwrap(), "aaaa");
}

#[test]
fn test_scenario_c_empty_input() {
    assert!(matches!(compress(""), Err(HuffmanError::EmptyInput)));
}

#[test]
fn test_encode_with_known_table() {
    let codes = table(&[('a', "0"), ('b', "1")]);

    assert_eq!(encode("aaab", &codes).unwrap(), "0001");
}

#[test]
fn test_encode_unknown_symbol() {
    let codes = table(&[('a', "0"), ('b', "1")]);

    match encode("abc", &codes) {
        Err(HuffmanError::UnknownSymbol(symbol)) => assert_eq!(symbol, 'c'),
        other => panic!("expected UnknownSymbol, got {:?}", other),
    }
}

#[test]
fn test_decode_resets_candidate_per_symbol() {
    let codes = table(&[('a', "0"), ('b', "10"), ('c', "11")]);

    assert_eq!(decode("0101100", &codes).unwrap(), "abcaa");
}

#[test]
fn test_decode_leftover_bits() {
    let codes = table(&[('a', "0"), ('b', "11")]);

    assert!(matches!(decode("01", &codes), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_decode_empty_stream() {
    let codes = table(&[('a', "0"), ('b', "1")]);

    assert_eq!(decode("", &codes).unwrap(), "");
}

#[test]
fn test_round_trip_plain_text() {
    let text = "the quick brown fox jumps over the lazy dog";

    assert_eq!(decompress(&compress(text).unwrap()).unwrap(), text);
}

#[test]
fn test_round_trip_unicode_text() {
    let text = "zażółć gęślą jaźń\nłąka, 北京, okay";

    assert_eq!(decompress(&compress(text).unwrap()).unwrap(), text);
}

#[test]
fn test_round_trip_single_character() {
    assert_eq!(decompress(&compress("x").unwrap()).unwrap(), "x");
}

#[test]
fn test_round_trip_random_inputs() {
    let alphabet: Vec<char> = "abcdefgh \n".chars().collect();
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let len = rng.gen_range(1..500);
        let text: String =
            (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect();

        assert_eq!(decompress(&compress(&text).unwrap()).unwrap(), text);
    }
}

#[test]
fn test_compression_is_deterministic() {
    let text = "deterministic across independent runs";

    assert_eq!(compress(text).unwrap(), compress(text).unwrap());
}

#[test]
fn test_tampered_padding_header_is_rejected() {
    let mut artifact = compress("aaab").unwrap();

    // First packed byte sits right after the table's newline.
    let header_index = artifact.iter().position(|&b| b == b'\n').unwrap() + 1;
    artifact[header_index] = 9;

    assert!(matches!(decompress(&artifact), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_stream_from_foreign_table_is_rejected() {
    let codes = table(&[('a', "00"), ('b', "010")]);

    assert!(matches!(decode("0100100", &codes), Err(HuffmanError::CorruptData(_))));
}
