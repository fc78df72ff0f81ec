use crate::constants::{
    ACTION_VERBS, CROSS_ELEMENT_MIN_RELEVANCE, LANGUAGE_NAMES, MAX_TOKEN_RELEVANCE,
    MIN_MEANINGFUL_TOKEN_LENGTH,
};
use crate::models::{Combo, ComboSource, ComboType, KeywordRuleset};
use crate::types::{CanonicalForm, RelevanceScore, StopwordSet, Token, TokenRef, TokenRelevance};
use crate::utils::{canonical_form, normalize};
use log::debug;
use std::collections::HashMap;

/// Inclusive word-count bounds for generated combos.
#[derive(Debug, Clone, Copy)]
pub struct ComboGeneratorConfig {
    pub min_combo_length: usize,
    pub max_combo_length: usize,
}

/// Per-token relevance supplier.
///
/// Relevance data originates from a mutable external override table, so the generator
/// takes an injected lookup rather than a fixed table. Tokens are passed lowercase.
pub trait RelevanceLookup {
    fn token_relevance(&self, token: &TokenRef) -> TokenRelevance;
}

impl<F> RelevanceLookup for F
where
    F: Fn(&TokenRef) -> TokenRelevance,
{
    fn token_relevance(&self, token: &TokenRef) -> TokenRelevance {
        self(token)
    }
}

impl RelevanceLookup for KeywordRuleset {
    fn token_relevance(&self, token: &TokenRef) -> TokenRelevance {
        KeywordRuleset::token_relevance(self, token)
    }
}

/// Enumerates candidate keyword phrases from title/subtitle token streams using four
/// strategies: sequential n-grams, stopword-bridged n-grams, cross-element pairs, and
/// a semantic-pair classification overlay.
pub struct ComboGenerator<'a, R: RelevanceLookup> {
    config: ComboGeneratorConfig,
    stop_words: &'a StopwordSet,
    relevance: &'a R,
}

impl<'a, R: RelevanceLookup> ComboGenerator<'a, R> {
    pub fn new(config: ComboGeneratorConfig, stop_words: &'a StopwordSet, relevance: &'a R) -> Self {
        Self {
            config,
            stop_words,
            relevance,
        }
    }

    /// Run all strategies over the given token streams and merge the candidates.
    ///
    /// Sequential and stopword-bridged generation run once over the title tokens alone
    /// and once over the concatenated title+subtitle stream; cross-element pairs span
    /// both fields. Candidates sharing a canonical form are merged, keeping the higher
    /// relevance (first seen wins ties). Output is sorted by relevance descending.
    pub fn generate(&self, title_tokens: &[Token], subtitle_tokens: &[Token]) -> Vec<Combo> {
        let mut candidates: Vec<Combo> = Vec::new();

        self.collect_stream_combos(title_tokens, ComboSource::Title, &mut candidates);

        let combined_tokens: Vec<Token> = title_tokens
            .iter()
            .chain(subtitle_tokens.iter())
            .cloned()
            .collect();
        self.collect_stream_combos(&combined_tokens, ComboSource::TitleSubtitle, &mut candidates);

        self.collect_cross_element_combos(title_tokens, subtitle_tokens, &mut candidates);

        for candidate in candidates.iter_mut() {
            self.apply_semantic_pair_override(candidate);
        }

        debug!("Generated {} combo candidates before merge", candidates.len());

        merge_combo_candidates(candidates)
    }

    /// A token is meaningful when it is not a stopword and longer than two characters.
    fn is_meaningful(&self, token: &TokenRef) -> bool {
        let lowercased = token.to_lowercase();
        lowercased.chars().count() >= MIN_MEANINGFUL_TOKEN_LENGTH
            && !self.stop_words.contains(&lowercased)
    }

    fn is_stopword(&self, token: &TokenRef) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    fn token_relevance(&self, token: &TokenRef) -> TokenRelevance {
        self.relevance.token_relevance(&token.to_lowercase())
    }

    /// Mean relevance over the window's meaningful tokens, or `None` for pure-filler windows.
    fn mean_relevance(&self, window: &[Token]) -> Option<RelevanceScore> {
        let meaningful_relevances: Vec<TokenRelevance> = window
            .iter()
            .filter(|token| self.is_meaningful(token))
            .map(|token| self.token_relevance(token))
            .collect();

        if meaningful_relevances.is_empty() {
            return None;
        }

        let total: u32 = meaningful_relevances.iter().map(|&weight| weight as u32).sum();
        Some(total as RelevanceScore / meaningful_relevances.len() as RelevanceScore)
    }

    /// Sequential and stopword-bridged n-gram generation over one token stream.
    fn collect_stream_combos(
        &self,
        tokens: &[Token],
        source: ComboSource,
        candidates: &mut Vec<Combo>,
    ) {
        // Sequential: contiguous n-grams within the configured word-count bounds.
        for window_size in self.config.min_combo_length.max(1)..=self.config.max_combo_length {
            for window in tokens.windows(window_size) {
                if let Some(relevance_score) = self.mean_relevance(window) {
                    candidates.push(Combo {
                        text: window.join(" "),
                        combo_type: ComboType::Sequential,
                        relevance_score,
                        source,
                    });
                }
            }
        }

        // Stopword-bridged: exactly one stopword, strictly interior, flanked by
        // meaningful tokens ("learn the language").
        for window_size in 2..=self.config.max_combo_length {
            for window in tokens.windows(window_size) {
                if let Some(combo) = self.bridged_combo(window, source) {
                    candidates.push(combo);
                }
            }
        }
    }

    fn bridged_combo(&self, window: &[Token], source: ComboSource) -> Option<Combo> {
        let stopword_positions: Vec<usize> = window
            .iter()
            .enumerate()
            .filter(|(_, token)| self.is_stopword(token))
            .map(|(position, _)| position)
            .collect();

        if stopword_positions.len() != 1 {
            return None;
        }

        let position = stopword_positions[0];
        if position == 0 || position == window.len() - 1 {
            return None;
        }
        if !self.is_meaningful(&window[position - 1]) || !self.is_meaningful(&window[position + 1]) {
            return None;
        }

        let meaningful_count = window
            .iter()
            .filter(|token| self.is_meaningful(token))
            .count();
        if meaningful_count < 2 {
            return None;
        }

        let relevance_score = self.mean_relevance(window)?;

        Some(Combo {
            text: window.join(" "),
            combo_type: ComboType::StopwordBridged,
            relevance_score,
            source,
        })
    }

    /// Pair every high-relevance meaningful title token with every high-relevance
    /// meaningful subtitle token. These phrases do not occur contiguously in the source
    /// text but both halves independently rank.
    fn collect_cross_element_combos(
        &self,
        title_tokens: &[Token],
        subtitle_tokens: &[Token],
        candidates: &mut Vec<Combo>,
    ) {
        let title_anchors = self.cross_element_anchors(title_tokens);
        let subtitle_anchors = self.cross_element_anchors(subtitle_tokens);

        for (title_token, title_relevance) in &title_anchors {
            for (subtitle_token, subtitle_relevance) in &subtitle_anchors {
                let relevance_score =
                    (*title_relevance as RelevanceScore + *subtitle_relevance as RelevanceScore) / 2.0;

                candidates.push(Combo {
                    text: format!("{} {}", title_token, subtitle_token),
                    combo_type: ComboType::CrossElement,
                    relevance_score,
                    source: ComboSource::TitleSubtitle,
                });
            }
        }
    }

    fn cross_element_anchors<'t>(&self, tokens: &'t [Token]) -> Vec<(&'t Token, TokenRelevance)> {
        tokens
            .iter()
            .filter(|token| self.is_meaningful(token))
            .map(|token| (token, self.token_relevance(token)))
            .filter(|(_, relevance)| *relevance >= CROSS_ELEMENT_MIN_RELEVANCE)
            .collect()
    }

    /// Re-tag any 2-word combo pairing a language name with an action verb as a
    /// `SemanticPair` and force its relevance to the maximum, overriding whatever the
    /// originating strategy computed.
    fn apply_semantic_pair_override(&self, combo: &mut Combo) {
        let tokens = normalize(&combo.text);
        if tokens.len() != 2 {
            return;
        }

        let is_language_action_pair = (LANGUAGE_NAMES.contains(&tokens[0].as_str())
            && ACTION_VERBS.contains(&tokens[1].as_str()))
            || (ACTION_VERBS.contains(&tokens[0].as_str())
                && LANGUAGE_NAMES.contains(&tokens[1].as_str()));

        if is_language_action_pair {
            combo.combo_type = ComboType::SemanticPair;
            combo.relevance_score = MAX_TOKEN_RELEVANCE as RelevanceScore;
        }
    }
}

/// Explicit fold into a canonical-form-keyed map: the higher-relevance candidate wins,
/// and on equal relevance the first-seen candidate is kept. Output is sorted by
/// relevance descending, text ascending.
pub fn merge_combo_candidates(candidates: Vec<Combo>) -> Vec<Combo> {
    let mut best_by_canonical: HashMap<CanonicalForm, Combo> = HashMap::new();

    for candidate in candidates {
        let key = canonical_form(&candidate.text);
        match best_by_canonical.get(&key) {
            Some(existing) if existing.relevance_score >= candidate.relevance_score => {}
            _ => {
                best_by_canonical.insert(key, candidate);
            }
        }
    }

    let mut merged: Vec<Combo> = best_by_canonical.into_values().collect();
    merged.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| a.text.cmp(&b.text)) // Secondary sort by text (ascending) for deterministic order
    });

    merged
}
