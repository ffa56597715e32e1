//! Tests for candidate scoring

use super::*;
use proptest::prelude::*;

fn typed(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_score_exact_match() {
    assert_eq!(score("Budi", "budi"), MatchScore::Exact);
    assert_eq!(score("Budi", "budi").value(), 100);
}

#[test]
fn test_score_prefix_match() {
    assert_eq!(score("Budi Santoso", "bud"), MatchScore::Prefix);
}

#[test]
fn test_score_whole_word_match() {
    assert_eq!(score("Ahmad Budi", "BUDI"), MatchScore::WholeWord);
}

#[test]
fn test_score_substring_match() {
    assert_eq!(score("Ahmad Budi", "bud"), MatchScore::Substring);
}

#[test]
fn test_score_no_match() {
    assert_eq!(score("Ahmad Budi", "xyz"), MatchScore::None);
    assert_eq!(MatchScore::None.value(), 0);
}

#[test]
fn test_score_display_is_numeric() {
    assert_eq!(MatchScore::Prefix.to_string(), "75");
    assert_eq!(MatchScore::WholeWord.to_string(), "50");
}

#[test]
fn test_evaluate_anchored_without_typed_tokens() {
    assert_eq!(
        evaluate("Budi Santoso", "bud", &[]),
        Some("Budi Santoso".to_string())
    );
}

#[test]
fn test_evaluate_floating_fallback_when_first_token_misses() {
    assert_eq!(evaluate("Ahmad Budi", "bud", &[]), Some("Budi".to_string()));
}

#[test]
fn test_evaluate_anchored_after_typed_tokens() {
    assert_eq!(
        evaluate("Budi Santoso", "s", &typed(&["budi"])),
        Some("Santoso".to_string())
    );
}

#[test]
fn test_evaluate_typed_tokens_compare_case_insensitively() {
    assert_eq!(
        evaluate("Siti Nurhaliza Putri", "p", &typed(&["SITI", "nurHALIZA"])),
        Some("Putri".to_string())
    );
}

#[test]
fn test_evaluate_floating_picks_last_matching_token() {
    // Leading token doesn't match "ani", so the last "s..." token wins
    assert_eq!(
        evaluate("Sari Ayu Sasmita", "sa", &typed(&["ani"])),
        Some("Sasmita".to_string())
    );
}

#[test]
fn test_evaluate_rejects_low_score() {
    assert_eq!(evaluate("Ahmad Budi", "s", &typed(&["budi"])), None);
}

#[test]
fn test_evaluate_rejects_candidate_not_longer_than_fragment() {
    assert_eq!(evaluate("Budi", "budi", &[]), None);
    assert_eq!(evaluate("Bu", "bud", &[]), None);
}

#[test]
fn test_evaluate_rejects_too_few_tokens() {
    assert_eq!(evaluate("Budiman", "bud", &typed(&["budi"])), None);
}

#[test]
fn test_evaluate_rejects_substring_without_token_prefix() {
    // "udi" occurs inside "Budi" but no token starts with it
    assert_eq!(evaluate("Ahmad Budi", "udi", &[]), None);
}

#[test]
fn test_evaluate_rejects_suggestion_equal_to_fragment() {
    // Floating match lands on the last token, which is the fragment itself
    assert_eq!(evaluate("Ahmad Budi", "budi", &[]), None);
}

#[test]
fn test_evaluate_normalizes_irregular_spacing() {
    assert_eq!(
        evaluate("Budi   Santoso  ", "bud", &[]),
        Some("Budi Santoso".to_string())
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_is_one_of_the_defined_values(
        candidate in "[a-zA-Z ]{0,20}",
        fragment in "[a-zA-Z]{0,6}"
    ) {
        let value = score(&candidate, &fragment).value();
        prop_assert!([0, 25, 50, 75, 100].contains(&value));
    }

    #[test]
    fn prop_exact_beats_everything(word in "[a-zA-Z]{1,12}") {
        prop_assert_eq!(score(&word.to_uppercase(), &word), MatchScore::Exact);
    }

    #[test]
    fn prop_prefix_beats_whole_word_and_substring(
        head in "[a-z]{1,6}",
        tail in "[a-z]{1,6}"
    ) {
        // "headtail head" contains the fragment as a word too, prefix still wins
        let candidate = format!("{}{} {}", head, tail, head);
        prop_assert_eq!(score(&candidate, &head), MatchScore::Prefix);
    }

    #[test]
    fn prop_whole_word_beats_substring(
        first in "[a-z]{1,6}",
        word in "[a-z]{1,6}"
    ) {
        let candidate = format!("0{} {} {}1", first, word, word);
        prop_assert_eq!(score(&candidate, &word), MatchScore::WholeWord);
    }

    #[test]
    fn prop_accepted_suggestion_is_never_empty_or_the_fragment(
        candidate in "[a-zA-Z]{1,8}( [a-zA-Z]{1,8}){0,3}",
        fragment in "[a-zA-Z]{1,4}"
    ) {
        if let Some(suggestion) = evaluate(&candidate, &fragment, &[]) {
            prop_assert!(!suggestion.is_empty());
            prop_assert_ne!(suggestion.to_lowercase(), fragment.to_lowercase());
            prop_assert!(suggestion.to_lowercase().starts_with(&fragment.to_lowercase()));
        }
    }
}
