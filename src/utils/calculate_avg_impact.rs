use crate::models::ScoredCombo;
use crate::types::ImpactScore;

/// Arithmetic mean of a scored combo list's scores. Returns 0 for empty input so
/// callers never divide by zero themselves.
pub fn calculate_avg_impact(scored_combos: &[ScoredCombo]) -> f32 {
    let scores: Vec<ImpactScore> = scored_combos.iter().map(|scored| scored.score).collect();
    calculate_avg_impact_from_scores(&scores)
}

/// Arithmetic mean of raw scores, 0 for empty input.
pub fn calculate_avg_impact_from_scores(scores: &[ImpactScore]) -> f32 {
    if scores.is_empty() {
        return 0.0;
    }

    scores.iter().map(|&score| score as f32).sum::<f32>() / scores.len() as f32
}
