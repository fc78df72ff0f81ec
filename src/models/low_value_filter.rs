use crate::constants::{FRESHNESS_TERMS, TIME_BOUND_TERMS};
use crate::models::ScoredCombo;
use crate::utils::normalize;

/// Valuable/low-value partition of a scored combo set. Low-value combos are retained
/// with their score zeroed; callers decide whether to display them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LowValueSplit {
    pub valuable: Vec<ScoredCombo>,
    pub low_value: Vec<ScoredCombo>,
}

/// Segregate time-bound/numeric noise combos from the valuable set.
pub fn filter_low_value_combos(combos: Vec<ScoredCombo>) -> LowValueSplit {
    let mut split = LowValueSplit::default();

    for mut scored in combos {
        if is_low_value(&scored.combo) {
            scored.score = 0;
            split.low_value.push(scored);
        } else {
            split.valuable.push(scored);
        }
    }

    split
}

/// A combo is low-value when its text has a leading digit, any standalone digit token,
/// a time-bound/promotional term, or a freshness/version marker.
pub fn is_low_value(combo_text: &str) -> bool {
    if combo_text
        .trim_start()
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit())
    {
        return true;
    }

    normalize(combo_text).iter().any(|token| {
        token.chars().all(|c| c.is_ascii_digit())
            || TIME_BOUND_TERMS.contains(&token.as_str())
            || FRESHNESS_TERMS.contains(&token.as_str())
    })
}
