//! Normalization of committed values before they are learned

/// Trim and capitalize the first letter of each space-separated word
///
/// Values written entirely in capitals (acronyms, codes) are only trimmed.
/// Whitespace inside the value is kept as typed.
pub fn capitalize_words(value: &str) -> String {
    let trimmed = value.trim();

    let mut letters = trimmed.chars().filter(|c| c.is_alphabetic()).peekable();
    let all_caps = letters.peek().is_some() && letters.all(char::is_uppercase);
    if all_caps {
        return trimmed.to_string();
    }

    trimmed
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
