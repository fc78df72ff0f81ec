use crate::types::{CanonicalForm, Token};
use crate::utils::normalize;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Minimum token count for a combo to participate in redundancy grouping.
const MIN_GROUPABLE_TOKENS: usize = 3;

/// Length of the shared prefix/suffix pattern, in tokens.
const PATTERN_TOKENS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedundancyType {
    Prefix,
    Suffix,
}

impl fmt::Display for RedundancyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedundancyType::Prefix => write!(f, "prefix"),
            RedundancyType::Suffix => write!(f, "suffix"),
        }
    }
}

/// A set of combos sharing a 2-token prefix or suffix, indicating wasted character
/// budget if all were used simultaneously.
#[derive(Debug, Clone, PartialEq)]
pub struct RedundantGroup {
    pub pattern: CanonicalForm,
    pub group_type: RedundancyType,
    pub combos: Vec<CanonicalForm>,
    pub wasted_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RedundancyAnalysis {
    pub redundancy_score: u8,
    pub redundant_groups: Vec<RedundantGroup>,
}

/// Find shared-prefix/suffix combo families and quantify the wasted token budget.
///
/// Only combos with at least 3 tokens participate. The prefix pass runs first and
/// claims its members exclusively; the suffix pass only sees unclaimed combos. The
/// score is the wasted share of all input tokens, as a rounded percentage capped at
/// 100. Fewer than 2 input combos is the defined trivial case: score 0, no groups.
pub fn find_redundant_combos(combos: &[String]) -> RedundancyAnalysis {
    if combos.len() < 2 {
        return RedundancyAnalysis::default();
    }

    let tokenized: Vec<Vec<Token>> = combos.iter().map(|combo| normalize(combo)).collect();
    let total_tokens: usize = tokenized.iter().map(|tokens| tokens.len()).sum();

    let participants: Vec<usize> = (0..tokenized.len())
        .filter(|&index| tokenized[index].len() >= MIN_GROUPABLE_TOKENS)
        .collect();

    let mut redundant_groups: Vec<RedundantGroup> = Vec::new();
    let mut claimed: HashSet<usize> = HashSet::new();

    collect_groups(
        &tokenized,
        &participants,
        RedundancyType::Prefix,
        &mut claimed,
        &mut redundant_groups,
    );
    collect_groups(
        &tokenized,
        &participants,
        RedundancyType::Suffix,
        &mut claimed,
        &mut redundant_groups,
    );

    let total_wasted: usize = redundant_groups.iter().map(|group| group.wasted_tokens).sum();

    let redundancy_score = if total_tokens == 0 {
        0
    } else {
        let percentage = (100.0 * total_wasted as f32 / total_tokens as f32).round() as u32;
        percentage.min(100) as u8
    };

    debug!(
        "Redundancy: {} group(s), {} wasted of {} total tokens",
        redundant_groups.len(),
        total_wasted,
        total_tokens
    );

    RedundancyAnalysis {
        redundancy_score,
        redundant_groups,
    }
}

/// Group unclaimed participants by their 2-token pattern, in first-occurrence order.
/// Groups with at least 2 members are redundant; the shared pattern is "free" for all
/// but one member, so `wasted_tokens = 2 * (members - 1)`.
fn collect_groups(
    tokenized: &[Vec<Token>],
    participants: &[usize],
    group_type: RedundancyType,
    claimed: &mut HashSet<usize>,
    redundant_groups: &mut Vec<RedundantGroup>,
) {
    let mut members_by_pattern: HashMap<CanonicalForm, Vec<usize>> = HashMap::new();
    let mut pattern_order: Vec<CanonicalForm> = Vec::new();

    for &index in participants {
        if claimed.contains(&index) {
            continue;
        }

        let pattern = pattern_of(&tokenized[index], group_type);
        let members = members_by_pattern.entry(pattern.clone()).or_default();
        if members.is_empty() {
            pattern_order.push(pattern);
        }
        members.push(index);
    }

    for pattern in pattern_order {
        let members = &members_by_pattern[&pattern];
        if members.len() < 2 {
            continue;
        }

        for &index in members {
            claimed.insert(index);
        }

        redundant_groups.push(RedundantGroup {
            pattern,
            group_type,
            combos: members
                .iter()
                .map(|&index| tokenized[index].join(" "))
                .collect(),
            wasted_tokens: PATTERN_TOKENS * (members.len() - 1),
        });
    }
}

fn pattern_of(tokens: &[Token], group_type: RedundancyType) -> CanonicalForm {
    match group_type {
        RedundancyType::Prefix => tokens[..PATTERN_TOKENS].join(" "),
        RedundancyType::Suffix => tokens[tokens.len() - PATTERN_TOKENS..].join(" "),
    }
}
