use aso_combo_audit::{canonical_form, normalize, tokenize};

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        let tokens = normalize("Learn Spanish, Fast!");
        assert_eq!(tokens, vec!["learn", "spanish", "fast"]);
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        let tokens = normalize("learn    spanish\t\nfast");
        assert_eq!(tokens, vec!["learn", "spanish", "fast"]);
    }

    #[test]
    fn test_normalize_treats_underscore_as_word_character() {
        let tokens = normalize("snake_case token");
        assert_eq!(tokens, vec!["snake_case", "token"]);
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize(""), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_punctuation_only() {
        assert_eq!(normalize("... --- !!!"), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let tokens = tokenize("Learn Spanish - Fast Lessons");
        assert_eq!(tokens, vec!["Learn", "Spanish", "Fast", "Lessons"]);
    }
}

#[cfg(test)]
mod canonical_form_tests {
    use super::*;

    #[test]
    fn test_canonical_form_is_idempotent() {
        let samples = [
            "Learn Spanish, Fast!",
            "  speak   THE language ",
            "50% off this week",
            "",
            "---",
        ];

        for sample in samples {
            let once = canonical_form(sample);
            assert_eq!(canonical_form(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_canonical_form_equates_casing_and_punctuation_variants() {
        assert_eq!(
            canonical_form("Learn Spanish!"),
            canonical_form("learn   spanish")
        );
    }

    #[test]
    fn test_canonical_form_empty_input() {
        assert_eq!(canonical_form(""), "");
    }
}
