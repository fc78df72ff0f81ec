use aso_combo_audit::{audit_keyword_combos, canonical_form, KeywordRuleset};
use csv::Reader;
use std::collections::HashMap;
use std::error::Error;
use std::{fs, path::Path};

/// Utility to load a keyword ruleset from a CSV file for testing and benchmarking.
///
/// Unlike the library's strict loader, invalid rows are skipped with a warning so a
/// fixture edit doesn't take down the whole suite.
pub fn load_keyword_ruleset_from_file(file_path: &str) -> Result<KeywordRuleset, Box<dyn Error>> {
    let mut category_keywords = Vec::new();
    let mut benefit_keywords = Vec::new();
    let mut cta_verbs = Vec::new();
    let mut stop_words = Vec::new();
    let mut relevance_overrides: HashMap<String, u8> = HashMap::new();

    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        let kind = record.get(0).unwrap().trim().to_lowercase();
        let value = record.get(1).unwrap().trim().to_string();

        match kind.as_str() {
            "category" => category_keywords.push(value),
            "benefit" => benefit_keywords.push(value),
            "cta" => cta_verbs.push(value),
            "stopword" => stop_words.push(value),
            "relevance" => {
                let weight = record
                    .get(2)
                    .and_then(|field| field.trim().parse::<u8>().ok())
                    .unwrap_or(1);
                relevance_overrides.insert(value, weight);
            }
            _ => eprintln!("Skipping unknown ruleset kind: {:?}", kind),
        }
    }

    Ok(KeywordRuleset::new(
        category_keywords,
        benefit_keywords,
        cta_verbs,
        stop_words,
        relevance_overrides,
    ))
}

/// Read the value of the first line starting with `prefix` from a fixture file.
pub fn get_fixture_field(file_path: &Path, prefix: &str) -> String {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .find_map(|line| {
            let line = line.trim();
            if line.starts_with(prefix) {
                Some(line.replace(prefix, "").trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_default()
}

/// Extract expected combo canonical forms from lines starting with EXPECTED:
pub fn get_expected_combos(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.starts_with("EXPECTED:") {
                Some(line.replace("EXPECTED:", "").trim().to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Run an audit over a fixture file's TITLE:/SUBTITLE: metadata and check that every
/// EXPECTED: combo was generated. Returns the number of mismatches; with
/// `use_assertions` the first mismatch panics instead.
pub fn run_audit_for_file(
    test_file_path: &str,
    keyword_ruleset: &KeywordRuleset,
    use_assertions: bool,
) -> usize {
    let path = Path::new(test_file_path);
    let title = get_fixture_field(path, "TITLE:");
    let subtitle = get_fixture_field(path, "SUBTITLE:");

    let audit = audit_keyword_combos(&title, &subtitle, keyword_ruleset)
        .expect("Failed to audit fixture metadata");

    let generated: Vec<String> = audit
        .combos
        .iter()
        .map(|combo| canonical_form(&combo.text))
        .collect();

    let expected_combos = get_expected_combos(path);

    let mut error_count = 0;

    for expected in &expected_combos {
        let found = generated.contains(&canonical_form(expected));
        if !found {
            error_count += 1;
        }

        if use_assertions {
            assert!(
                found,
                "{} - Expected combo {:?} was not generated.",
                test_file_path, expected
            );
        }
    }

    error_count
}
