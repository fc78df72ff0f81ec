use crate::types::CanonicalForm;
use crate::utils::normalize;

/// The space-joined normalized token sequence of a combo's text. Two combos with equal
/// canonical forms are duplicates regardless of original casing or punctuation.
/// Idempotent: `canonical_form(canonical_form(x)) == canonical_form(x)`.
pub fn canonical_form(text: &str) -> CanonicalForm {
    normalize(text).join(" ")
}
