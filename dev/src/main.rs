use aso_combo_audit::{audit_keyword_combos, KeywordRuleset, DEFAULT_IMPACT_WEIGHTS};
use log::{error, info};

fn main() {
    env_logger::init();

    let keyword_ruleset = KeywordRuleset::default();

    let title = "Learn Spanish - Fast Language Lessons";
    let subtitle = "Speak, read and write with daily practice";

    info!("Scoring with: {}", DEFAULT_IMPACT_WEIGHTS);

    match audit_keyword_combos(title, subtitle, &keyword_ruleset) {
        Ok(audit) => {
            for (combo, scored) in audit.combos.iter().zip(audit.scored_combos.iter()) {
                info!(
                    "{:?} [{} / {}] relevance {:.2} -> impact {} ({:?})",
                    combo.text,
                    combo.combo_type,
                    combo.source,
                    combo.relevance_score,
                    scored.score,
                    scored.breakdown
                );
            }

            info!("average impact: {:.2}", audit.avg_impact);
            info!(
                "redundancy score: {} ({} group(s))",
                audit.redundancy.redundancy_score,
                audit.redundancy.redundant_groups.len()
            );
            for group in &audit.redundancy.redundant_groups {
                info!(
                    "{} family {:?}: {:?} ({} wasted tokens)",
                    group.group_type, group.pattern, group.combos, group.wasted_tokens
                );
            }
        }
        Err(e) => error!("Error auditing metadata: {}", e),
    }
}
