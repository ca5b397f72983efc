//! errors.rs - Custom error types for the rota-core library.
//!
//! Every failure this crate can report happens while the rule catalog is being
//! built. Normalizing text never fails once a catalog exists.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `rota-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RotaError {
    #[error("Failed to compile rule #{index} '{description}': {source}")]
    RuleCompilationError {
        index: usize,
        description: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Rule #{0} '{1}': pattern length ({2}) exceeds maximum allowed ({3})")]
    PatternLengthExceeded(usize, String, usize, usize),

    #[error("Rule #{0} is invalid: {1}")]
    InvalidRule(usize, String),

    #[error("Rule #{0} '{1}': invalid replacement template: {2}")]
    InvalidReplacement(usize, String, String),

    #[error("Failed to parse rule catalog: {0}")]
    CatalogParse(#[from] serde_yml::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
