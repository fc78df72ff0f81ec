pub mod combo;
pub use combo::{Combo, ComboSource, ComboType};

pub mod combo_generator;
pub use combo_generator::{
    merge_combo_candidates, ComboGenerator, ComboGeneratorConfig, RelevanceLookup,
};

pub mod keyword_ruleset;
pub use keyword_ruleset::KeywordRuleset;

pub mod impact_scorer;
pub use impact_scorer::{ImpactScorer, ImpactWeights, ScoreBreakdown, ScoredCombo};

pub mod redundancy_analyzer;
pub use redundancy_analyzer::{
    find_redundant_combos, RedundancyAnalysis, RedundancyType, RedundantGroup,
};

pub mod low_value_filter;
pub use low_value_filter::{filter_low_value_combos, LowValueSplit};

pub mod error;
pub use error::Error;
