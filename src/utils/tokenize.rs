use crate::types::Token;

/// Split raw text into display tokens: the same word-character splitting as
/// [`normalize`](crate::normalize), but case-preserving. Combo text keeps the source
/// casing; canonical comparisons go through `normalize`.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
