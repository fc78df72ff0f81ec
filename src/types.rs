use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing
/// title and subtitle text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// The normalized (lowercase, punctuation-stripped, space-joined) representation of a combo,
/// used for equality comparisons. Derived on demand and never cached across pipeline stages.
pub type CanonicalForm = String;

/// Per-token relevance weight in `0..=3`, sourced from an external override table.
pub type TokenRelevance = u8;

/// Relevance of a generated combo, the mean of its meaningful tokens' weights (`0.0..=3.0`).
pub type RelevanceScore = f32;

/// Final impact score of a scored combo, clamped to `0..=100`.
pub type ImpactScore = u8;

/// A set of tokens considered semantically empty for ranking purposes (articles,
/// prepositions, etc.). Entries are stored lowercase.
pub type StopwordSet = HashSet<Token>;
