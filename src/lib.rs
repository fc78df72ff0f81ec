mod constants;
pub mod models;
pub use constants::{DEFAULT_COMBO_GENERATOR_CONFIG, DEFAULT_IMPACT_WEIGHTS};
pub use models::{
    filter_low_value_combos, find_redundant_combos, merge_combo_candidates, Combo,
    ComboGenerator, ComboGeneratorConfig, ComboSource, ComboType, Error, ImpactScorer,
    ImpactWeights, KeywordRuleset, LowValueSplit, RedundancyAnalysis, RedundancyType,
    RedundantGroup, RelevanceLookup, ScoreBreakdown, ScoredCombo,
};
pub mod types;
mod utils;
pub use utils::{
    calculate_avg_impact, calculate_avg_impact_from_scores, canonical_form, classify_length,
    dedupe_combos, normalize, tokenize, LengthClass,
};

/// Audit outcome for one title+subtitle pair: the generated combos, their impact
/// scores, the redundancy report, and the valuable/low-value split. Created fresh per
/// invocation and discarded after the caller consumes it.
#[derive(Debug, Clone)]
pub struct KeywordComboAudit {
    pub combos: Vec<Combo>,
    pub scored_combos: Vec<ScoredCombo>,
    pub redundancy: RedundancyAnalysis,
    pub valuable: Vec<ScoredCombo>,
    pub low_value: Vec<ScoredCombo>,
    pub avg_impact: f32,
}

pub fn audit_keyword_combos(
    title: &str,
    subtitle: &str,
    keyword_ruleset: &KeywordRuleset,
) -> Result<KeywordComboAudit, Error> {
    let keyword_combo_audit = audit_keyword_combos_with_custom_config(
        title,
        subtitle,
        keyword_ruleset,
        DEFAULT_COMBO_GENERATOR_CONFIG,
    )?;

    Ok(keyword_combo_audit)
}

pub fn audit_keyword_combos_with_custom_config(
    title: &str,
    subtitle: &str,
    keyword_ruleset: &KeywordRuleset,
    combo_generator_config: ComboGeneratorConfig,
) -> Result<KeywordComboAudit, Error> {
    let title_tokens = tokenize(title);
    let subtitle_tokens = tokenize(subtitle);

    let combo_generator = ComboGenerator::new(
        combo_generator_config,
        &keyword_ruleset.stop_words,
        keyword_ruleset,
    );
    let combos = combo_generator.generate(&title_tokens, &subtitle_tokens);

    let impact_scorer = ImpactScorer::new(keyword_ruleset);
    let combo_texts: Vec<String> = combos.iter().map(|combo| combo.text.clone()).collect();
    let scored_combos = impact_scorer.score_combos(&combo_texts);

    let redundancy = find_redundant_combos(&combo_texts);

    let LowValueSplit { valuable, low_value } = filter_low_value_combos(scored_combos.clone());
    let avg_impact = calculate_avg_impact(&valuable);

    Ok(KeywordComboAudit {
        combos,
        scored_combos,
        redundancy,
        valuable,
        low_value,
        avg_impact,
    })
}
