//! Configuration management for `rota-core`.
//!
//! This module defines the serialized form of the rewrite catalog: ordered
//! substitution and removal definitions as they appear in YAML. The built-in
//! catalog is embedded at compile time, so there is no runtime configuration
//! surface; `from_yaml_str` exists for building small, isolated catalogs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::RotaError;

/// Priority given to substitutions that do not declare one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Maximum allowed length for a pattern string, after placeholder expansion.
pub const MAX_PATTERN_LENGTH: usize = 1024;

/// The embedded rule catalog definition.
const DEFAULT_CATALOG_YAML: &str = include_str!("../config/default_catalog.yaml");

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// A single substitution rule as written in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SubstitutionDef {
    /// Human-readable label. Not unique: several rules share a description.
    pub description: String,
    /// Regex source. `{sep}` expands to the separator sub-pattern.
    pub pattern: String,
    /// Replacement template. `$N` / `${N}` insert capture groups, `$$` is a literal `$`.
    pub replacement: String,
    /// Lower values run first; ties keep file order.
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Authoring remark, e.g. an unresolved abbreviation ambiguity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A removal rule: every match is replaced with a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RemovalDef {
    pub description: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The full, ordered catalog definition.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub substitutions: Vec<SubstitutionDef>,
    pub removals: Vec<RemovalDef>,
}

impl CatalogConfig {
    /// Parses a catalog definition from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RotaError> {
        let config: CatalogConfig = serde_yml::from_str(yaml)?;
        debug!(
            "Parsed catalog with {} substitutions and {} removals.",
            config.substitutions.len(),
            config.removals.len()
        );
        Ok(config)
    }

    /// Loads the catalog definition embedded in the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default catalog from embedded string...");
        let config = Self::from_yaml_str(DEFAULT_CATALOG_YAML)
            .context("Failed to parse default catalog")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_ten() {
        let yaml = r#"
substitutions:
  - description: "weapon"
    pattern: '\bwpn\b'
    replacement: "weapon"
  - description: "first"
    pattern: '\b1st\b'
    replacement: "first"
    priority: 20
"#;
        let config = CatalogConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.substitutions[0].priority, DEFAULT_PRIORITY);
        assert_eq!(config.substitutions[1].priority, 20);
        assert!(config.removals.is_empty());
    }

    #[test]
    fn replacement_whitespace_is_preserved() {
        let yaml = r#"
substitutions:
  - description: "Less Than"
    pattern: '<'
    replacement: " less than "
"#;
        let config = CatalogConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.substitutions[0].replacement, " less than ");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = CatalogConfig::from_yaml_str("substitutions: [").unwrap_err();
        assert!(matches!(err, RotaError::CatalogParse(_)));
    }

    #[test]
    fn embedded_catalog_parses() {
        let config = CatalogConfig::load_default().unwrap();
        assert_eq!(config.substitutions.len(), 529);
        assert_eq!(config.removals.len(), 3);
    }
}
