//! compiler.rs - Turns a `CatalogConfig` into a compiled, immutable `RuleCatalog`.
//!
//! Compilation is all-or-nothing: every rule is checked, every error is
//! collected, and a single fatal error is returned if anything is wrong. There
//! is no partially built catalog.
//!
//! License: MIT OR APACHE 2.0

use fancy_regex::{Regex, RegexBuilder};
use lazy_static::lazy_static;
use log::{debug, trace};

use super::template::Replacement;
use super::{SEPARATOR, SEPARATOR_PLACEHOLDER};
use crate::config::{CatalogConfig, RemovalDef, SubstitutionDef, MAX_PATTERN_LENGTH};
use crate::errors::RotaError;
use crate::fingerprint::catalog_fingerprint;

/// Backtracking budget for a single match attempt.
pub const BACKTRACK_LIMIT: usize = 1_000_000;

lazy_static! {
    // An unescaped `{name}`. `\{sep\}` never matches, so literal braces survive.
    static ref PLACEHOLDER: regex::Regex =
        regex::Regex::new(r"\\?\{([A-Za-z_]+)\}").expect("placeholder regex is valid");
}

/// A compiled substitution rule.
#[derive(Debug)]
pub struct SubstitutionRule {
    /// Position in the catalog (authored order).
    pub index: usize,
    pub description: String,
    /// Pattern source after placeholder expansion, without the case flag.
    pub pattern: String,
    pub regex: Regex,
    pub replacement: Replacement,
    /// Raw replacement template as authored.
    pub replacement_source: String,
    pub priority: i32,
    pub note: Option<String>,
}

/// A compiled removal rule.
#[derive(Debug)]
pub struct RemovalRule {
    pub index: usize,
    pub description: String,
    pub pattern: String,
    pub regex: Regex,
    pub note: Option<String>,
}

/// The immutable rule catalog.
///
/// Rules are stored in authored order. `execution_order` holds the stable
/// priority sort of the substitutions, computed once at build time.
#[derive(Debug)]
pub struct RuleCatalog {
    substitutions: Vec<SubstitutionRule>,
    removals: Vec<RemovalRule>,
    execution_order: Vec<usize>,
    fingerprint: String,
}

impl RuleCatalog {
    /// Compiles the catalog embedded in the crate. Same as [`build_catalog`].
    pub fn builtin() -> Result<Self, RotaError> {
        build_catalog()
    }

    /// Substitution rules in authored order.
    pub fn substitutions(&self) -> &[SubstitutionRule] {
        &self.substitutions
    }

    /// Removal rules in authored order (which is also their run order).
    pub fn removals(&self) -> &[RemovalRule] {
        &self.removals
    }

    /// Substitution rules in the order they run: ascending priority, ties in
    /// authored order.
    pub fn by_priority(&self) -> impl Iterator<Item = &SubstitutionRule> + '_ {
        self.execution_order.iter().map(move |&i| &self.substitutions[i])
    }

    /// SHA-256 hex digest of the catalog definition.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.substitutions.len() + self.removals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the catalog embedded in the crate at compile time.
pub fn build_catalog() -> Result<RuleCatalog, RotaError> {
    let config = CatalogConfig::load_default()?;
    compile_catalog(&config)
}

/// Compiles every rule in `config` into a `RuleCatalog`.
pub fn compile_catalog(config: &CatalogConfig) -> Result<RuleCatalog, RotaError> {
    debug!(
        "Starting compilation of {} substitutions and {} removals.",
        config.substitutions.len(),
        config.removals.len()
    );

    let mut errors = Vec::new();
    let mut substitutions = Vec::with_capacity(config.substitutions.len());
    let mut removals = Vec::with_capacity(config.removals.len());

    for (index, def) in config.substitutions.iter().enumerate() {
        match compile_substitution(index, def) {
            Ok(rule) => substitutions.push(rule),
            Err(e) => errors.push(e),
        }
    }

    for (index, def) in config.removals.iter().enumerate() {
        match compile_removal(index, def) {
            Ok(rule) => removals.push(rule),
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(RotaError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            errors.len(),
            message
        )));
    }

    // `sort_by_key` is stable, so equal priorities keep authored order.
    let mut execution_order: Vec<usize> = (0..substitutions.len()).collect();
    execution_order.sort_by_key(|&i| substitutions[i].priority);

    let fingerprint = catalog_fingerprint(config);
    debug!(
        "Finished compiling catalog. {} substitutions, {} removals, fingerprint {}.",
        substitutions.len(),
        removals.len(),
        &fingerprint[..12]
    );

    Ok(RuleCatalog {
        substitutions,
        removals,
        execution_order,
        fingerprint,
    })
}

fn compile_substitution(index: usize, def: &SubstitutionDef) -> Result<SubstitutionRule, RotaError> {
    let pattern = prepare_pattern(index, &def.description, &def.pattern)?;
    let regex = build_regex(index, &def.description, &pattern)?;

    let replacement = Replacement::parse(&def.replacement)
        .map_err(|e| RotaError::InvalidReplacement(index, def.description.clone(), e))?;

    // captures_len counts group 0.
    if let Some(group) = replacement.max_group() {
        if group >= regex.captures_len() {
            return Err(RotaError::InvalidReplacement(
                index,
                def.description.clone(),
                format!("references non-existent capture group ${}", group),
            ));
        }
    }

    trace!(target: "rota_core::catalog", "Substitution #{} '{}' compiled.", index, def.description);
    Ok(SubstitutionRule {
        index,
        description: def.description.clone(),
        pattern,
        regex,
        replacement,
        replacement_source: def.replacement.clone(),
        priority: def.priority,
        note: def.note.clone(),
    })
}

fn compile_removal(index: usize, def: &RemovalDef) -> Result<RemovalRule, RotaError> {
    let pattern = prepare_pattern(index, &def.description, &def.pattern)?;
    let regex = build_regex(index, &def.description, &pattern)?;

    trace!(target: "rota_core::catalog", "Removal #{} '{}' compiled.", index, def.description);
    Ok(RemovalRule {
        index,
        description: def.description.clone(),
        pattern,
        regex,
        note: def.note.clone(),
    })
}

/// Validates a pattern source and expands its placeholders.
fn prepare_pattern(index: usize, description: &str, source: &str) -> Result<String, RotaError> {
    if description.trim().is_empty() {
        return Err(RotaError::InvalidRule(index, "empty `description`".to_string()));
    }
    if source.is_empty() {
        return Err(RotaError::InvalidRule(
            index,
            format!("'{}' has an empty `pattern`", description),
        ));
    }

    let pattern = expand_placeholders(source)
        .map_err(|name| RotaError::InvalidRule(index, format!("'{}' uses unknown placeholder {{{}}}", description, name)))?;

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(RotaError::PatternLengthExceeded(
            index,
            description.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }
    Ok(pattern)
}

/// Replaces every unescaped `{sep}` with [`SEPARATOR`]. Returns the name of
/// the first unknown placeholder as the error.
pub fn expand_placeholders(source: &str) -> Result<String, String> {
    let mut out = String::with_capacity(source.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.as_str().starts_with('\\') {
            continue;
        }
        let name = &caps[1];
        if name != SEPARATOR_PLACEHOLDER {
            return Err(name.to_string());
        }
        out.push_str(&source[last..whole.start()]);
        out.push_str(SEPARATOR);
        last = whole.end();
    }
    out.push_str(&source[last..]);
    Ok(out)
}

fn build_regex(index: usize, description: &str, pattern: &str) -> Result<Regex, RotaError> {
    RegexBuilder::new(&format!("(?i){}", pattern))
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .map_err(|e| RotaError::RuleCompilationError {
            index,
            description: description.to_string(),
            source: Box::new(e),
        })
}
