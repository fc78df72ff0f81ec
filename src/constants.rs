use crate::models::{ComboGeneratorConfig, ImpactWeights};

pub const DEFAULT_COMBO_GENERATOR_CONFIG: ComboGeneratorConfig = ComboGeneratorConfig {
    min_combo_length: 2,
    max_combo_length: 4,
};

pub const DEFAULT_IMPACT_WEIGHTS: ImpactWeights = ImpactWeights {
    base_score: 50,
    category_bonus: 30,
    action_bonus: 30,
    long_tail_bonus: 20,
    mid_tail_bonus: 10,
    filler_penalty: 30,
    duplication_penalty: 20,
    max_filler_ratio: 0.4,
};

/// Tokens shorter than this never count as meaningful, regardless of stopword status.
pub const MIN_MEANINGFUL_TOKEN_LENGTH: usize = 3;

/// Minimum per-token relevance for a token to anchor a cross-element pair.
pub const CROSS_ELEMENT_MIN_RELEVANCE: u8 = 2;

/// Upper bound of the per-token relevance scale. Semantic pairs are forced to this value.
pub const MAX_TOKEN_RELEVANCE: u8 = 3;

/// Language names recognized by the semantic-pair overlay (whole-token, case-insensitive).
pub const LANGUAGE_NAMES: &[&str] = &[
    "english",
    "spanish",
    "french",
    "german",
    "italian",
    "chinese",
    "japanese",
    "korean",
    "portuguese",
    "russian",
    "arabic",
    "hindi",
    "mandarin",
];

/// Learning-action verbs recognized by the semantic-pair overlay (whole-token, case-insensitive).
pub const ACTION_VERBS: &[&str] = &[
    "learn",
    "speak",
    "study",
    "master",
    "practice",
    "improve",
    "understand",
    "read",
    "write",
    "listen",
    "teach",
];

/// Time-bound / promotional terms that mark a combo as low-value.
pub const TIME_BOUND_TERMS: &[&str] = &[
    "day", "week", "month", "year", "trial", "limited", "offer", "sale", "deal",
];

/// Freshness / version markers that mark a combo as low-value.
pub const FRESHNESS_TERMS: &[&str] = &["new", "latest", "updated", "version"];

pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "for", "with", "your", "you", "to", "of", "in", "on",
    "at", "by", "is", "it", "this", "that", "from", "as", "our", "my", "its",
];

pub const DEFAULT_CATEGORY_KEYWORDS: &[&str] = &[
    "language",
    "learning",
    "education",
    "vocabulary",
    "grammar",
    "lessons",
    "courses",
];

pub const DEFAULT_BENEFIT_KEYWORDS: &[&str] = &[
    "fast", "easy", "free", "fluent", "quickly", "simple", "fun", "effective",
];

pub const DEFAULT_CTA_VERBS: &[&str] = &[
    "learn", "speak", "master", "practice", "start", "try", "improve", "discover",
];
