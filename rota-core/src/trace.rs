//! Data structures describing how a single description was normalized.
//!
//! A trace records the text after every stage and each rule that changed it.
//! Used for catalog debugging and by the `explain` command; the normal
//! `normalize` path never builds one.

use serde::{Deserialize, Serialize};

/// Pipeline stage a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Substitution,
    Removal,
}

/// One rule application that changed the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub stage: Stage,
    /// Catalog position of the rule within its stage.
    pub index: usize,
    pub description: String,
    /// `None` for removals, which have no priority.
    pub priority: Option<i32>,
    pub before: String,
    pub after: String,
}

/// The text after each stage, plus every rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationTrace {
    pub input: String,
    pub prepared: String,
    pub substituted: String,
    pub removed: String,
    pub canonical: String,
    pub hits: Vec<RuleHit>,
}

impl NormalizationTrace {
    /// Hits of a single stage, in the order they fired.
    pub fn hits_in(&self, stage: Stage) -> impl Iterator<Item = &RuleHit> + '_ {
        self.hits.iter().filter(move |h| h.stage == stage)
    }

    /// True if a rule with this description changed the text.
    pub fn fired(&self, description: &str) -> bool {
        self.hits.iter().any(|h| h.description == description)
    }
}

/// Result of normalizing a description twice when the passes disagree.
///
/// The catalog is not idempotent: some expansions contain abbreviations that
/// other rules rewrite again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drift {
    pub input: String,
    pub first_pass: String,
    pub second_pass: String,
}
