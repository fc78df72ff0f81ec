use aso_combo_audit::{audit_keyword_combos, ComboType, KeywordRuleset};
use test_utils::{load_keyword_ruleset_from_file, run_audit_for_file};

#[cfg(test)]
mod audit_tests {
    use super::*;

    #[test]
    fn test_audit_with_fixture_file() {
        let keyword_ruleset = load_keyword_ruleset_from_file("tests/test_ruleset.csv")
            .expect("Failed to load ruleset from CSV");

        let error_count =
            run_audit_for_file("tests/test_files/language_app.txt", &keyword_ruleset, true);
        assert_eq!(error_count, 0);
    }

    #[test]
    fn test_audit_pipeline_end_to_end() {
        let keyword_ruleset = load_keyword_ruleset_from_file("tests/test_ruleset.csv")
            .expect("Failed to load ruleset from CSV");

        let audit = audit_keyword_combos(
            "Learn Spanish - Fast Lessons",
            "Speak the language with fun",
            &keyword_ruleset,
        )
        .expect("Audit should not fail");

        assert!(!audit.combos.is_empty());
        assert_eq!(audit.scored_combos.len(), audit.combos.len());

        // Scored combos line up with the generated combos.
        for (combo, scored) in audit.combos.iter().zip(audit.scored_combos.iter()) {
            assert_eq!(combo.text, scored.combo);
            assert!(scored.score <= 100);
        }

        // Every scored combo lands on exactly one side of the split.
        assert_eq!(
            audit.valuable.len() + audit.low_value.len(),
            audit.scored_combos.len()
        );

        assert!(audit.redundancy.redundancy_score <= 100);
        assert!(audit.avg_impact >= 0.0 && audit.avg_impact <= 100.0);
    }

    #[test]
    fn test_audit_detects_semantic_pair() {
        let keyword_ruleset = KeywordRuleset::default();

        let audit = audit_keyword_combos("Learn Spanish", "", &keyword_ruleset)
            .expect("Audit should not fail");

        let pair = audit
            .combos
            .iter()
            .find(|combo| combo.text == "Learn Spanish")
            .expect("title pair should be generated");
        assert_eq!(pair.combo_type, ComboType::SemanticPair);
        assert!((pair.relevance_score - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_audit_empty_metadata_degrades_gracefully() {
        let keyword_ruleset = KeywordRuleset::default();

        let audit =
            audit_keyword_combos("", "", &keyword_ruleset).expect("Audit should not fail");

        assert!(audit.combos.is_empty());
        assert!(audit.scored_combos.is_empty());
        assert!(audit.valuable.is_empty());
        assert!(audit.low_value.is_empty());
        assert_eq!(audit.avg_impact, 0.0);
        assert_eq!(audit.redundancy.redundancy_score, 0);
        assert!(audit.redundancy.redundant_groups.is_empty());
    }

    #[test]
    fn test_ruleset_csv_round_trip_matches_library_loader() {
        let lenient = load_keyword_ruleset_from_file("tests/test_ruleset.csv")
            .expect("Failed to load ruleset from CSV");
        let strict = KeywordRuleset::from_csv_file("tests/test_ruleset.csv")
            .expect("Failed to load ruleset from CSV");

        assert_eq!(lenient.category_keywords, strict.category_keywords);
        assert_eq!(lenient.benefit_keywords, strict.benefit_keywords);
        assert_eq!(lenient.cta_verbs, strict.cta_verbs);
        assert_eq!(lenient.stop_words, strict.stop_words);
        assert_eq!(lenient.relevance_overrides, strict.relevance_overrides);
    }

    #[test]
    fn test_ruleset_csv_rejects_unknown_kind() {
        let csv_str = "Kind,Value,Weight\nnonsense,foo,\n";
        assert!(KeywordRuleset::from_csv_string(csv_str).is_err());
    }
}
