//! Candidate scoring and acceptance
//!
//! A candidate is scored against the typed fragment, then anchored against
//! the tokens already typed. The accepted suggestion is the tail of the
//! candidate starting at the matched token.

use std::fmt;

use super::tokens::tokenize;

/// Lowest score a candidate needs before anchoring is attempted
pub const MIN_ACCEPT_SCORE: MatchScore = MatchScore::Substring;

/// How well a candidate matches a fragment, ordered by precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchScore {
    /// Fragment does not occur in the candidate
    None,
    /// Fragment occurs somewhere in the candidate
    Substring,
    /// Fragment equals one whitespace-delimited word of the candidate
    WholeWord,
    /// Candidate starts with the fragment
    Prefix,
    /// Candidate equals the fragment
    Exact,
}

impl MatchScore {
    pub fn value(self) -> u8 {
        match self {
            MatchScore::None => 0,
            MatchScore::Substring => 25,
            MatchScore::WholeWord => 50,
            MatchScore::Prefix => 75,
            MatchScore::Exact => 100,
        }
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Score `candidate` against `fragment`, case-insensitively
pub fn score(candidate: &str, fragment: &str) -> MatchScore {
    let candidate = candidate.to_lowercase();
    let fragment = fragment.to_lowercase();
    score_lowered(&candidate, &fragment)
}

fn score_lowered(candidate: &str, fragment: &str) -> MatchScore {
    if candidate == fragment {
        MatchScore::Exact
    } else if candidate.starts_with(fragment) {
        MatchScore::Prefix
    } else if candidate.split_whitespace().any(|word| word == fragment) {
        MatchScore::WholeWord
    } else if candidate.contains(fragment) {
        MatchScore::Substring
    } else {
        MatchScore::None
    }
}

/// Decide whether `candidate` is offered for `fragment`, and what text to show
///
/// The match index is anchored after `already_typed` when the candidate's
/// leading tokens equal them and the next token starts with the fragment.
/// Otherwise the last token starting with the fragment is used. Returns the
/// candidate's tokens from the match index to the end.
pub fn evaluate(candidate: &str, fragment: &str, already_typed: &[String]) -> Option<String> {
    let candidate_lower = candidate.to_lowercase();
    let fragment_lower = fragment.to_lowercase();

    if score_lowered(&candidate_lower, &fragment_lower) < MIN_ACCEPT_SCORE {
        return None;
    }
    if candidate.chars().count() <= fragment.chars().count() {
        return None;
    }

    let tokens = tokenize(candidate);
    if tokens.len() < already_typed.len() + 1 {
        return None;
    }

    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let match_index = anchored_index(&lowered, &fragment_lower, already_typed)
        .or_else(|| floating_index(&lowered, &fragment_lower))?;

    let suggestion = tokens[match_index..].join(" ").trim().to_string();
    if suggestion.is_empty() || suggestion.to_lowercase() == fragment_lower {
        return None;
    }

    Some(suggestion)
}

fn anchored_index(lowered: &[String], fragment: &str, already_typed: &[String]) -> Option<usize> {
    let leading_match = already_typed
        .iter()
        .zip(lowered)
        .all(|(typed, token)| typed.to_lowercase() == *token);

    let index = already_typed.len();
    let anchored = leading_match
        && lowered
            .get(index)
            .is_some_and(|token| token.starts_with(fragment));

    anchored.then_some(index)
}

fn floating_index(lowered: &[String], fragment: &str) -> Option<usize> {
    lowered.iter().rposition(|token| token.starts_with(fragment))
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod scorer_tests;
