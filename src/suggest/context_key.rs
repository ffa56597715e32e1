//! Cache keys built from the typing context

use std::fmt;

/// Separator between the already-typed part and the fragment
pub const KEY_SEPARATOR: char = '|';

/// Normalized cache key: `lowercase(typed tokens joined by " ") | lowercase(fragment)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextKey(String);

impl ContextKey {
    /// Build a key from the already-typed tokens and the current fragment
    pub fn build<S: AsRef<str>>(already_typed: &[S], fragment: &str) -> Self {
        let left = already_typed
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_parts(&left, fragment)
    }

    /// Build a key from an already-joined left part and a fragment
    pub fn from_parts(left: &str, fragment: &str) -> Self {
        Self::from_raw(&format!("{}{}{}", left, KEY_SEPARATOR, fragment))
    }

    /// Normalize an arbitrary key string (lowercase, trimmed)
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.to_lowercase().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment part, after the last separator
    pub fn fragment(&self) -> &str {
        self.0
            .rsplit_once(KEY_SEPARATOR)
            .map(|(_, fragment)| fragment)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContextKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
