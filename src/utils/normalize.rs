use crate::types::Token;

/// Canonicalize raw text into comparable tokens: lowercase the whole string, replace
/// every non-word character with a space, split on whitespace runs, drop empties.
///
/// Never fails; empty or punctuation-only input yields an empty token list.
pub fn normalize(text: &str) -> Vec<Token> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
