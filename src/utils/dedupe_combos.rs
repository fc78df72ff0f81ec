use crate::types::CanonicalForm;
use crate::utils::canonical_form;
use std::collections::HashSet;

/// Collapse combos that are semantically identical after canonicalization.
///
/// Order-preserving and first-wins: the first occurrence of each distinct canonical
/// form is kept with its original casing, subsequent ones are discarded. This is
/// intentionally distinct from the generator's score-wins merge; it operates on
/// already-curated lists where presentation order matters more than score.
pub fn dedupe_combos(combos: &[String]) -> Vec<String> {
    let mut seen: HashSet<CanonicalForm> = HashSet::new();
    let mut kept: Vec<String> = Vec::new();

    for combo in combos {
        if seen.insert(canonical_form(combo)) {
            kept.push(combo.clone());
        }
    }

    kept
}
