//! Tests for token extraction

use super::*;

#[test]
fn test_word_range_at_end_of_text() {
    let range = current_word_range("Budi Sant", 9).unwrap();
    assert_eq!(range, TokenRange { start: 5, len: 4 });
    assert_eq!(range.end(), 9);
}

#[test]
fn test_word_range_none_at_caret_zero() {
    assert_eq!(current_word_range("Budi", 0), None);
}

#[test]
fn test_word_range_none_after_space() {
    assert_eq!(current_word_range("Budi ", 5), None);
}

#[test]
fn test_word_range_none_after_punctuation() {
    assert_eq!(current_word_range("Jl. Merdeka,", 12), None);
}

#[test]
fn test_word_range_mid_word_only_covers_left_side() {
    // Caret between "Bu" and "di"
    let range = current_word_range("Budi", 2).unwrap();
    assert_eq!(range, TokenRange { start: 0, len: 2 });
}

#[test]
fn test_word_range_stops_at_punctuation() {
    let range = current_word_range("RT.05", 5).unwrap();
    assert_eq!(range, TokenRange { start: 3, len: 2 });
}

#[test]
fn test_word_range_clamps_caret_past_end() {
    let range = current_word_range("Ani", 99).unwrap();
    assert_eq!(range, TokenRange { start: 0, len: 3 });
}

#[test]
fn test_word_range_counts_characters_not_bytes() {
    // "é" is two bytes but one character
    let range = current_word_range("José Ramé", 9).unwrap();
    assert_eq!(range, TokenRange { start: 5, len: 4 });
}

#[test]
fn test_already_typed_tokens_splits_on_whitespace_and_newlines() {
    let tokens = already_typed_tokens("Budi  Santoso\nJr ", 17);
    assert_eq!(tokens, vec!["Budi", "Santoso", "Jr"]);
}

#[test]
fn test_already_typed_tokens_empty_at_start() {
    assert!(already_typed_tokens("Budi", 0).is_empty());
}

#[test]
fn test_extract_active_token() {
    let token = extract_active_token("Budi Sant", 9).unwrap();
    assert_eq!(token.fragment, "Sant");
    assert_eq!(token.already_typed, vec!["Budi"]);
    assert_eq!(token.range, TokenRange { start: 5, len: 4 });
}

#[test]
fn test_extract_active_token_none_without_word() {
    assert!(extract_active_token("", 0).is_none());
    assert!(extract_active_token("Budi ", 5).is_none());
}

#[test]
fn test_tokenize_discards_empty_pieces() {
    assert_eq!(tokenize("  a \t b\n\nc  "), vec!["a", "b", "c"]);
    assert!(tokenize("   ").is_empty());
}
