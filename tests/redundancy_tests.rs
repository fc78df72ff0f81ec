use aso_combo_audit::{find_redundant_combos, RedundancyType};

fn combos(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|text| text.to_string()).collect()
}

#[cfg(test)]
mod redundancy_tests {
    use super::*;

    #[test]
    fn test_shared_prefix_family() {
        let analysis = find_redundant_combos(&combos(&[
            "learn spanish fast",
            "learn spanish now",
            "learn spanish today",
        ]));

        assert_eq!(analysis.redundant_groups.len(), 1);

        let group = &analysis.redundant_groups[0];
        assert_eq!(group.group_type, RedundancyType::Prefix);
        assert_eq!(group.pattern, "learn spanish");
        assert_eq!(group.combos.len(), 3);
        // The shared prefix is free for all but one member: 2 * (3 - 1)
        assert_eq!(group.wasted_tokens, 4);

        // round(100 * 4 / 9)
        assert_eq!(analysis.redundancy_score, 44);
    }

    #[test]
    fn test_shared_suffix_family() {
        let analysis =
            find_redundant_combos(&combos(&["learn spanish fast", "speak spanish fast"]));

        assert_eq!(analysis.redundant_groups.len(), 1);

        let group = &analysis.redundant_groups[0];
        assert_eq!(group.group_type, RedundancyType::Suffix);
        assert_eq!(group.pattern, "spanish fast");
        assert_eq!(group.wasted_tokens, 2);

        // round(100 * 2 / 6)
        assert_eq!(analysis.redundancy_score, 33);
    }

    #[test]
    fn test_prefix_pass_claims_members_before_suffix_pass() {
        // Both combos share the prefix "learn spanish" and the pair also shares a
        // suffix; the prefix pass claims them so no suffix group forms.
        let analysis = find_redundant_combos(&combos(&[
            "learn spanish fast",
            "learn spanish really fast",
        ]));

        assert_eq!(analysis.redundant_groups.len(), 1);
        assert_eq!(analysis.redundant_groups[0].group_type, RedundancyType::Prefix);
    }

    #[test]
    fn test_short_combos_do_not_participate() {
        let analysis = find_redundant_combos(&combos(&["learn spanish", "learn french"]));

        assert!(analysis.redundant_groups.is_empty());
        assert_eq!(analysis.redundancy_score, 0);
    }

    #[test]
    fn test_fewer_than_two_combos_is_trivial_case() {
        let analysis = find_redundant_combos(&combos(&["learn spanish fast"]));
        assert_eq!(analysis.redundancy_score, 0);
        assert!(analysis.redundant_groups.is_empty());

        let analysis = find_redundant_combos(&[]);
        assert_eq!(analysis.redundancy_score, 0);
        assert!(analysis.redundant_groups.is_empty());
    }

    #[test]
    fn test_group_members_are_canonical_forms() {
        let analysis = find_redundant_combos(&combos(&[
            "Learn Spanish, Fast!",
            "LEARN SPANISH now",
        ]));

        assert_eq!(analysis.redundant_groups.len(), 1);
        assert_eq!(
            analysis.redundant_groups[0].combos,
            vec!["learn spanish fast".to_string(), "learn spanish now".to_string()]
        );
    }

    #[test]
    fn test_score_stays_within_bounds() {
        // Heavily redundant input: score must cap at 100.
        let analysis = find_redundant_combos(&combos(&[
            "learn spanish fast",
            "learn spanish now",
            "learn spanish today",
            "learn spanish quickly",
            "learn spanish easily",
            "learn spanish abroad",
            "learn spanish online",
            "learn spanish offline",
        ]));

        assert!(analysis.redundancy_score <= 100);
    }
}
