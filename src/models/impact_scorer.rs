use crate::constants::DEFAULT_IMPACT_WEIGHTS;
use crate::models::KeywordRuleset;
use crate::types::{ImpactScore, Token};
use crate::utils::{classify_length, normalize, LengthClass};
use std::collections::HashSet;
use std::fmt;

/// Additive scoring weights applied by the impact scorer before clamping to `0..=100`.
#[derive(Debug, Clone, Copy)]
pub struct ImpactWeights {
    pub base_score: i32,
    pub category_bonus: i32,
    pub action_bonus: i32,
    pub long_tail_bonus: i32,
    pub mid_tail_bonus: i32,
    pub filler_penalty: i32,
    pub duplication_penalty: i32,
    pub max_filler_ratio: f32,
}

impl fmt::Display for ImpactWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
          f,
          "ImpactWeights (\n\tbase_score: {},\n\tcategory_bonus: {},\n\taction_bonus: {},\n\tlong_tail_bonus: {},\n\tmid_tail_bonus: {},\n\tfiller_penalty: {},\n\tduplication_penalty: {},\n\tmax_filler_ratio: {}\n)",
          self.base_score,
          self.category_bonus,
          self.action_bonus,
          self.long_tail_bonus,
          self.mid_tail_bonus,
          self.filler_penalty,
          self.duplication_penalty,
          self.max_filler_ratio
      )
    }
}

/// Per-rule contribution to a combo's score. A field is zero when its rule did not fire;
/// penalty fields are negative when they did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub category_bonus: i32,
    pub action_bonus: i32,
    pub length_bonus: i32,
    pub filler_penalty: i32,
    pub duplication_penalty: i32,
}

/// A combo annotated with its impact score and the per-rule breakdown that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCombo {
    pub combo: String,
    pub score: ImpactScore,
    pub breakdown: ScoreBreakdown,
}

/// Assigns a deterministic 0-100 SEO/ASO value score per combo using fixed heuristics
/// over the injected keyword lists.
pub struct ImpactScorer<'a> {
    ruleset: &'a KeywordRuleset,
    weights: ImpactWeights,
}

impl<'a> ImpactScorer<'a> {
    pub fn new(ruleset: &'a KeywordRuleset) -> Self {
        Self::with_weights(ruleset, DEFAULT_IMPACT_WEIGHTS)
    }

    pub fn with_weights(ruleset: &'a KeywordRuleset, weights: ImpactWeights) -> Self {
        Self { ruleset, weights }
    }

    /// Score one combo: base score, category bonus, action/benefit bonus, length bonus,
    /// filler penalty, duplication penalty, clamped to `0..=100`.
    pub fn score_combo(&self, combo_text: &str) -> ScoredCombo {
        let tokens = normalize(combo_text);
        let canonical = tokens.join(" ");

        let mut breakdown = ScoreBreakdown::default();

        if self.matches_category(&canonical) {
            breakdown.category_bonus = self.weights.category_bonus;
        }

        // A CTA verb or a benefit keyword earns the action bonus once; the two
        // conditions do not stack.
        if self.matches_cta_verb(&tokens) || self.matches_benefit(&canonical) {
            breakdown.action_bonus = self.weights.action_bonus;
        }

        breakdown.length_bonus = match classify_length(tokens.len()) {
            LengthClass::LongTail => self.weights.long_tail_bonus,
            LengthClass::MidTail => self.weights.mid_tail_bonus,
            LengthClass::Short => 0,
        };

        if self.exceeds_filler_ratio(&tokens) {
            breakdown.filler_penalty = -self.weights.filler_penalty;
        }

        if Self::has_repeated_token(&tokens) {
            breakdown.duplication_penalty = -self.weights.duplication_penalty;
        }

        let total = self.weights.base_score
            + breakdown.category_bonus
            + breakdown.action_bonus
            + breakdown.length_bonus
            + breakdown.filler_penalty
            + breakdown.duplication_penalty;

        ScoredCombo {
            combo: combo_text.to_string(),
            score: total.clamp(0, 100) as ImpactScore,
            breakdown,
        }
    }

    /// Score a batch of combo texts in input order.
    pub fn score_combos(&self, combo_texts: &[String]) -> Vec<ScoredCombo> {
        combo_texts
            .iter()
            .map(|combo_text| self.score_combo(combo_text))
            .collect()
    }

    // Category and benefit keywords may be multi-word phrases; match them as substrings
    // of the canonical text.
    fn matches_category(&self, canonical: &str) -> bool {
        self.ruleset
            .category_keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && canonical.contains(keyword.as_str()))
    }

    fn matches_benefit(&self, canonical: &str) -> bool {
        self.ruleset
            .benefit_keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && canonical.contains(keyword.as_str()))
    }

    // CTA verbs are single words; whole-token matching keeps "read" from firing on "ready".
    fn matches_cta_verb(&self, tokens: &[Token]) -> bool {
        tokens
            .iter()
            .any(|token| self.ruleset.cta_verbs.iter().any(|verb| verb == token))
    }

    fn exceeds_filler_ratio(&self, tokens: &[Token]) -> bool {
        if tokens.is_empty() {
            return false;
        }

        let stopword_count = tokens
            .iter()
            .filter(|token| self.ruleset.is_stopword(token))
            .count();

        stopword_count as f32 / tokens.len() as f32 > self.weights.max_filler_ratio
    }

    fn has_repeated_token(tokens: &[Token]) -> bool {
        let mut seen = HashSet::new();
        tokens.iter().any(|token| !seen.insert(token))
    }
}
