use crate::types::RelevanceScore;
use std::fmt;

/// Records which generation strategy produced a combo. The semantic-pair overlay may
/// re-tag a combo produced by another strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboType {
    Sequential,
    StopwordBridged,
    CrossElement,
    SemanticPair,
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboType::Sequential => write!(f, "sequential"),
            ComboType::StopwordBridged => write!(f, "stopword_bridged"),
            ComboType::CrossElement => write!(f, "cross_element"),
            ComboType::SemanticPair => write!(f, "semantic_pair"),
        }
    }
}

/// Which original metadata field(s) contributed a combo's tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboSource {
    Title,
    Subtitle,
    TitleSubtitle,
}

impl fmt::Display for ComboSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboSource::Title => write!(f, "title"),
            ComboSource::Subtitle => write!(f, "subtitle"),
            ComboSource::TitleSubtitle => write!(f, "title+subtitle"),
        }
    }
}

/// A candidate multi-word keyword phrase extracted from title/subtitle text.
///
/// `text` keeps the original casing for display and is never token-order-rearranged
/// after generation; later stages only remove combos or annotate them.
#[derive(Debug, Clone, PartialEq)]
pub struct Combo {
    pub text: String,
    pub combo_type: ComboType,
    pub relevance_score: RelevanceScore,
    pub source: ComboSource,
}
