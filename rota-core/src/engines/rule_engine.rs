// rota-core/src/engines/rule_engine.rs
//! The catalog-driven `OffenseNormalizer`.
//!
//! `raw -> prep -> substitute -> remove -> finalize -> canonical`
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::sync::Arc;

use log::debug;

use crate::catalog::RuleCatalog;
use crate::engine::OffenseNormalizer;
use crate::errors::RotaError;
use crate::pipeline::{apply_removal, apply_substitution, apply_substitutions, finalize, prep, remove};
use crate::trace::{NormalizationTrace, RuleHit, Stage};

/// Normalizer backed by a compiled [`RuleCatalog`].
///
/// The catalog is shared through an `Arc`; cloning the engine is cheap and
/// every clone sees the same immutable rules.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    catalog: Arc<RuleCatalog>,
}

impl RuleEngine {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// Compiles the embedded catalog and wraps it in an engine.
    pub fn builtin() -> Result<Self, RotaError> {
        let catalog = RuleCatalog::builtin()?;
        debug!("RuleEngine ready with catalog {}.", catalog.fingerprint());
        Ok(Self::new(Arc::new(catalog)))
    }

    /// Canonical form of a present description.
    pub fn canonicalize(&self, text: &str) -> String {
        let prepared = prep(text);
        let substituted = apply_substitutions(&prepared, self.catalog.by_priority());
        let removed = remove(&substituted, self.catalog.removals());
        finalize(&removed)
    }

    pub fn shared_catalog(&self) -> Arc<RuleCatalog> {
        Arc::clone(&self.catalog)
    }
}

impl OffenseNormalizer for RuleEngine {
    fn normalize(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => self.canonicalize(text),
            None => String::new(),
        }
    }

    fn trace(&self, text: &str) -> NormalizationTrace {
        let prepared = prep(text);
        let mut hits = Vec::new();

        let mut current = prepared.clone();
        for rule in self.catalog.by_priority() {
            let next = match apply_substitution(rule, &current) {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => continue,
            };
            if next != current {
                hits.push(RuleHit {
                    stage: Stage::Substitution,
                    index: rule.index,
                    description: rule.description.clone(),
                    priority: Some(rule.priority),
                    before: current,
                    after: next.clone(),
                });
            }
            current = next;
        }
        let substituted = current.clone();

        for rule in self.catalog.removals() {
            let next = match apply_removal(rule, &current) {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => continue,
            };
            if next != current {
                hits.push(RuleHit {
                    stage: Stage::Removal,
                    index: rule.index,
                    description: rule.description.clone(),
                    priority: None,
                    before: current,
                    after: next.clone(),
                });
            }
            current = next;
        }
        let removed = current;
        let canonical = finalize(&removed);

        NormalizationTrace {
            input: text.to_string(),
            prepared,
            substituted,
            removed,
            canonical,
            hits,
        }
    }

    fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}
