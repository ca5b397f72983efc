// rota-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use without managing an engine.
//!
//! Each call compiles the full catalog, which dominates its cost. Long-running
//! callers should build a `RuleEngine` once and reuse it.

use anyhow::{Context, Result};

use crate::engine::OffenseNormalizer;
use crate::engines::rule_engine::RuleEngine;

/// Normalizes a single description with the built-in catalog.
pub fn headless_normalize(text: Option<&str>) -> Result<String> {
    let engine = RuleEngine::builtin().context("Failed to build the built-in rule catalog")?;
    Ok(engine.normalize(text))
}

/// Normalizes many descriptions with one freshly built engine.
pub fn headless_normalize_all<'a, I>(texts: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let engine = RuleEngine::builtin().context("Failed to build the built-in rule catalog")?;
    Ok(texts.into_iter().map(|t| engine.normalize(t)).collect())
}
