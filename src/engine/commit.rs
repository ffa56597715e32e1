//! Commit planning
//!
//! Works out which span of the text a chosen suggestion replaces. The chosen
//! suggestion may cover more than the fragment (a floating or multi-token
//! suggestion), so the longest suggestion prefix already typed before the
//! caret is replaced rather than just the fragment.

use serde::Serialize;

use crate::suggest::tokens::TokenRange;

/// Instruction for the host widget: replace a character span with text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitInstruction {
    /// Character offset where replacement starts
    pub replace_start: usize,
    /// Number of characters replaced
    pub replace_len: usize,
    /// Text inserted in place of the span
    pub replacement: String,
}

impl CommitInstruction {
    /// Apply the instruction to `text`, returning the new text
    pub fn apply(&self, text: &str) -> String {
        let before: String = text.chars().take(self.replace_start).collect();
        let after: String = text
            .chars()
            .skip(self.replace_start + self.replace_len)
            .collect();
        format!("{}{}{}", before, self.replacement, after)
    }

    /// Caret position right after the inserted text
    pub fn caret_after(&self) -> usize {
        self.replace_start + self.replacement.chars().count()
    }
}

/// Plan the replacement of `token` in `text` by `chosen`
///
/// Looks for the longest `L` in `token.len ..= min(len(chosen), caret)`,
/// longest first, where the `L` characters before the caret equal the
/// first `L` characters of `chosen` ignoring case. Without such an `L` the
/// token range itself is replaced.
pub fn plan_commit(text: &str, caret: usize, token: TokenRange, chosen: &str) -> CommitInstruction {
    let chars: Vec<char> = text.chars().collect();
    let caret = caret.min(chars.len());
    let chosen_chars: Vec<char> = chosen.chars().collect();
    let max_prefix = chosen_chars.len().min(caret);

    let matched_len = (token.len..=max_prefix).rev().find(|&len| {
        let typed: String = chars[caret - len..caret].iter().collect();
        let prefix: String = chosen_chars[..len].iter().collect();
        len > 0 && typed.to_lowercase() == prefix.to_lowercase()
    });

    match matched_len {
        Some(len) => CommitInstruction {
            replace_start: caret - len,
            replace_len: len,
            replacement: chosen.to_string(),
        },
        None => CommitInstruction {
            replace_start: token.start,
            replace_len: token.len,
            replacement: chosen.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod commit_tests;
