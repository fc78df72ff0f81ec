use aso_combo_audit::{audit_keyword_combos, KeywordRuleset};
use log::error;
use std::env;
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // An optional first argument points at a keyword ruleset CSV; the built-in
    // defaults are used otherwise.
    let keyword_ruleset = match env::args().nth(1) {
        Some(ruleset_path) => match KeywordRuleset::from_csv_file(&ruleset_path) {
            Ok(keyword_ruleset) => keyword_ruleset,
            Err(e) => {
                error!("Failed to load keyword ruleset from {}: {}", ruleset_path, e);
                std::process::exit(1);
            }
        },
        None => KeywordRuleset::default(),
    };

    // Read the metadata from stdin: first line is the title, second the subtitle
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let mut lines = input.lines();
    let title = lines.next().unwrap_or("");
    let subtitle = lines.next().unwrap_or("");

    match audit_keyword_combos(title, subtitle, &keyword_ruleset) {
        Ok(audit) => {
            // Sort by score (descending), then by combo text (ascending) for
            // deterministic order.
            let mut sorted_results: Vec<_> = audit.valuable.iter().collect();
            sorted_results.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.combo.cmp(&b.combo))
            });

            for scored in sorted_results {
                println!("{}: {}", scored.combo, scored.score);
            }

            println!("average impact: {:.2}", audit.avg_impact);
            println!("redundancy score: {}", audit.redundancy.redundancy_score);
            for group in &audit.redundancy.redundant_groups {
                println!(
                    "{} family \"{}\": {} combos, {} wasted tokens",
                    group.group_type,
                    group.pattern,
                    group.combos.len(),
                    group.wasted_tokens
                );
            }
        }
        Err(e) => {
            error!("Error auditing metadata: {}", e);
            std::process::exit(1);
        }
    }
}
