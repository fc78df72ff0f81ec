pub mod calculate_avg_impact;
pub mod canonical_form;
pub mod classify_length;
pub mod dedupe_combos;
pub mod normalize;
pub mod tokenize;

pub use calculate_avg_impact::{calculate_avg_impact, calculate_avg_impact_from_scores};
pub use canonical_form::canonical_form;
pub use classify_length::{classify_length, LengthClass};
pub use dedupe_combos::dedupe_combos;
pub use normalize::normalize;
pub use tokenize::tokenize;
