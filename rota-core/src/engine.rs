// rota-core/src/engine.rs
//! Defines the core `OffenseNormalizer` trait.
//!
//! The trait is the boundary consumed by batch callers and the CLI: a pure
//! function from an optional raw description to canonical text. `RuleEngine`
//! is the production implementation; tests substitute their own.
//!
//! License: MIT OR APACHE 2.0

use crate::catalog::RuleCatalog;
use crate::trace::{Drift, NormalizationTrace};

/// A deterministic offense-description normalizer.
///
/// Implementations must be pure: no I/O and no shared mutable state, so one
/// instance can serve any number of threads.
pub trait OffenseNormalizer: Send + Sync {
    /// Returns the canonical form of `text`. Missing input maps to `""`.
    fn normalize(&self, text: Option<&str>) -> String;

    /// Normalizes `text` while recording every stage and rule hit.
    fn trace(&self, text: &str) -> NormalizationTrace;

    /// The catalog driving this normalizer.
    fn catalog(&self) -> &RuleCatalog;

    /// Runs `text` through twice and reports a difference between passes.
    fn drift(&self, text: &str) -> Option<Drift> {
        let first_pass = self.normalize(Some(text));
        let second_pass = self.normalize(Some(&first_pass));
        if first_pass == second_pass {
            None
        } else {
            Some(Drift {
                input: text.to_string(),
                first_pass,
                second_pass,
            })
        }
    }
}
