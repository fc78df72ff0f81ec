use aso_combo_audit::{filter_low_value_combos, ImpactScorer, KeywordRuleset, ScoredCombo};

fn score_all(combo_texts: &[&str]) -> Vec<ScoredCombo> {
    let ruleset = KeywordRuleset::default();
    let scorer = ImpactScorer::new(&ruleset);
    combo_texts
        .iter()
        .map(|combo_text| scorer.score_combo(combo_text))
        .collect()
}

#[cfg(test)]
mod low_value_filter_tests {
    use super::*;

    #[test]
    fn test_promotional_combo_is_segregated_and_zeroed() {
        let split = filter_low_value_combos(score_all(&["50% off this week"]));

        assert!(split.valuable.is_empty());
        assert_eq!(split.low_value.len(), 1);
        assert_eq!(split.low_value[0].combo, "50% off this week");
        assert_eq!(split.low_value[0].score, 0);
    }

    #[test]
    fn test_valuable_combo_passes_through_unchanged() {
        let scored = score_all(&["learn spanish fast"]);
        let original_score = scored[0].score;

        let split = filter_low_value_combos(scored);

        assert!(split.low_value.is_empty());
        assert_eq!(split.valuable.len(), 1);
        assert_eq!(split.valuable[0].combo, "learn spanish fast");
        assert_eq!(split.valuable[0].score, original_score);
    }

    #[test]
    fn test_leading_digit_is_low_value() {
        let split = filter_low_value_combos(score_all(&["3 easy steps"]));
        assert_eq!(split.low_value.len(), 1);
    }

    #[test]
    fn test_standalone_digit_token_is_low_value() {
        let split = filter_low_value_combos(score_all(&["top 10 phrases"]));
        assert_eq!(split.low_value.len(), 1);
    }

    #[test]
    fn test_digits_inside_a_word_are_not_standalone() {
        let split = filter_low_value_combos(score_all(&["a2 level practice"]));
        assert_eq!(split.valuable.len(), 1);
    }

    #[test]
    fn test_freshness_marker_is_low_value() {
        let split = filter_low_value_combos(score_all(&["latest spanish lessons"]));
        assert_eq!(split.low_value.len(), 1);
        assert_eq!(split.low_value[0].score, 0);
    }

    #[test]
    fn test_time_bound_term_matches_whole_token_only() {
        // "today" contains "day" but is not itself a time-bound term
        let split = filter_low_value_combos(score_all(&["learn spanish today"]));
        assert_eq!(split.valuable.len(), 1);
    }

    #[test]
    fn test_all_inputs_are_retained_across_the_split() {
        let scored = score_all(&[
            "learn spanish fast",
            "7 day trial",
            "speak like a local",
            "new version update",
        ]);
        let total = scored.len();

        let split = filter_low_value_combos(scored);
        assert_eq!(split.valuable.len() + split.low_value.len(), total);
    }

    #[test]
    fn test_empty_input() {
        let split = filter_low_value_combos(Vec::new());
        assert!(split.valuable.is_empty());
        assert!(split.low_value.is_empty());
    }
}
