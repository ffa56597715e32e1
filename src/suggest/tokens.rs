//! Token extraction around the caret
//!
//! All offsets are character offsets (Unicode scalar values), matching what
//! the host widget reports as caret position.

/// Character range of the word being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRange {
    pub start: usize,
    pub len: usize,
}

impl TokenRange {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Everything the engine needs to know about the in-progress word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToken {
    /// Where the fragment sits in the text
    pub range: TokenRange,
    /// The partially typed word immediately before the caret
    pub fragment: String,
    /// Whitespace-separated tokens typed before the fragment
    pub already_typed: Vec<String>,
}

/// Split on whitespace (including newlines), dropping empty pieces
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Find the alphanumeric run ending at `caret`
///
/// Returns None when the caret is at the start of the text or the character
/// right before it is not alphanumeric. A caret past the end is clamped.
pub fn current_word_range(text: &str, caret: usize) -> Option<TokenRange> {
    let chars: Vec<char> = text.chars().collect();
    let caret = caret.min(chars.len());
    if caret == 0 {
        return None;
    }

    let mut start = caret;
    while start > 0 && chars[start - 1].is_alphanumeric() {
        start -= 1;
    }

    let len = caret - start;
    (len > 0).then_some(TokenRange { start, len })
}

/// Tokens typed before `token_start` (a character offset)
pub fn already_typed_tokens(text: &str, token_start: usize) -> Vec<String> {
    tokenize(&char_prefix(text, token_start))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Extract the fragment and its context in one pass over the text
pub fn extract_active_token(text: &str, caret: usize) -> Option<ActiveToken> {
    let range = current_word_range(text, caret)?;
    let fragment: String = text.chars().skip(range.start).take(range.len).collect();

    Some(ActiveToken {
        range,
        fragment,
        already_typed: already_typed_tokens(text, range.start),
    })
}

/// The first `count` characters of `text`
pub(crate) fn char_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tokens_tests;
