use crate::constants::{
    DEFAULT_BENEFIT_KEYWORDS, DEFAULT_CATEGORY_KEYWORDS, DEFAULT_CTA_VERBS, DEFAULT_STOP_WORDS,
    MAX_TOKEN_RELEVANCE,
};
use crate::models::Error;
use crate::types::{StopwordSet, Token, TokenRef, TokenRelevance};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Externally maintained keyword lists and per-token relevance overrides, injected into
/// one analysis run. Immutable for the duration of that run; the engine only performs
/// membership tests and override lookups against it.
#[derive(Debug, Clone)]
pub struct KeywordRuleset {
    pub category_keywords: Vec<String>,
    pub benefit_keywords: Vec<String>,
    pub cta_verbs: Vec<String>,
    pub stop_words: StopwordSet,
    pub relevance_overrides: HashMap<Token, TokenRelevance>,
}

impl Default for KeywordRuleset {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATEGORY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_BENEFIT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_CTA_VERBS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            HashMap::new(),
        )
    }
}

impl KeywordRuleset {
    pub fn new(
        category_keywords: Vec<String>,
        benefit_keywords: Vec<String>,
        cta_verbs: Vec<String>,
        stop_words: Vec<String>,
        relevance_overrides: HashMap<Token, TokenRelevance>,
    ) -> Self {
        // Membership tests are case-insensitive; store everything lowercase once.
        Self {
            category_keywords: category_keywords.iter().map(|kw| kw.to_lowercase()).collect(),
            benefit_keywords: benefit_keywords.iter().map(|kw| kw.to_lowercase()).collect(),
            cta_verbs: cta_verbs.iter().map(|kw| kw.to_lowercase()).collect(),
            stop_words: stop_words.iter().map(|kw| kw.to_lowercase()).collect(),
            relevance_overrides: relevance_overrides
                .into_iter()
                .map(|(token, weight)| (token.to_lowercase(), weight.min(MAX_TOKEN_RELEVANCE)))
                .collect(),
        }
    }

    pub fn is_stopword(&self, token: &TokenRef) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    /// Relevance weight for a single token: the override table wins, otherwise
    /// stopwords weigh 0 and every other token weighs 1.
    pub fn token_relevance(&self, token: &TokenRef) -> TokenRelevance {
        let lowercased = token.to_lowercase();

        if let Some(&weight) = self.relevance_overrides.get(&lowercased) {
            return weight.min(MAX_TOKEN_RELEVANCE);
        }

        if self.stop_words.contains(&lowercased) {
            0
        } else {
            1
        }
    }

    /// Load a ruleset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the CSV is malformed.
    pub fn from_csv_file<P: AsRef<Path>>(file_path: P) -> Result<Self, Error> {
        let csv_str = fs::read_to_string(file_path)?;
        Self::from_csv_string(&csv_str)
    }

    /// Parse a ruleset from a CSV-formatted string.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV reader encounters issues (e.g., invalid format,
    /// missing headers, or an unknown kind).
    ///
    /// # Notes
    ///
    /// This function expects the CSV to have the following column headers:
    /// - `Kind`: one of `category`, `benefit`, `cta`, `stopword`, `relevance`.
    /// - `Value`: the keyword, phrase, or token.
    /// - `Weight`: relevance weight in `0..=3` (only read for `relevance` rows).
    pub fn from_csv_string(csv_str: &str) -> Result<Self, Error> {
        let mut category_keywords = Vec::new();
        let mut benefit_keywords = Vec::new();
        let mut cta_verbs = Vec::new();
        let mut stop_words = Vec::new();
        let mut relevance_overrides = HashMap::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv_str));

        let headers = reader
            .headers()
            .map_err(|e| Error::RulesetParseError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column_index = |name: &str| -> Result<usize, Error> {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| Error::RulesetParseError(format!("Missing '{}' column", name)))
        };

        let kind_index = column_index("Kind")?;
        let value_index = column_index("Value")?;
        let weight_index = column_index("Weight")?;

        for record in reader.records() {
            let record = record
                .map_err(|e| Error::RulesetParseError(format!("Failed to read record: {}", e)))?;

            let kind = record
                .get(kind_index)
                .ok_or_else(|| Error::RulesetParseError("Missing 'Kind' field".to_string()))?
                .trim()
                .to_lowercase();

            let value = record
                .get(value_index)
                .ok_or_else(|| Error::RulesetParseError("Missing 'Value' field".to_string()))?
                .trim()
                .to_string();

            match kind.as_str() {
                "category" => category_keywords.push(value),
                "benefit" => benefit_keywords.push(value),
                "cta" => cta_verbs.push(value),
                "stopword" => stop_words.push(value),
                "relevance" => {
                    let weight = record
                        .get(weight_index)
                        .map(str::trim)
                        .filter(|field| !field.is_empty())
                        .ok_or_else(|| {
                            Error::RulesetParseError(format!(
                                "Missing 'Weight' for relevance override '{}'",
                                value
                            ))
                        })?
                        .parse::<TokenRelevance>()
                        .map_err(|e| {
                            Error::RulesetParseError(format!(
                                "Invalid 'Weight' for relevance override '{}': {}",
                                value, e
                            ))
                        })?;
                    relevance_overrides.insert(value, weight);
                }
                other => {
                    return Err(Error::RulesetParseError(format!(
                        "Unknown ruleset kind '{}'",
                        other
                    )));
                }
            }
        }

        Ok(Self::new(
            category_keywords,
            benefit_keywords,
            cta_verbs,
            stop_words,
            relevance_overrides,
        ))
    }
}
