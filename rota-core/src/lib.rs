// rota-core/src/lib.rs
//! # ROTA Core Library
//!
//! `rota-core` turns raw criminal-offense descriptions, as found in court and
//! law-enforcement records, into canonical text for a downstream classifier:
//!
//! ```text
//! "POSS W INT DIST CDS SCH II"
//!   -> "possession with intent distribute controlled dangerous substances schedule two"
//! ```
//!
//! The rewrite is a deterministic, rule-driven pipeline. Several hundred
//! case-insensitive substitution rules run in priority order over the text,
//! each one seeing the output of those before it. Removal rules and a
//! punctuation/whitespace/case finalizer follow.
//!
//! ## Modules
//!
//! * `config`: Serialized catalog definitions and the embedded default catalog.
//! * `catalog`: Compilation of definitions into an immutable `RuleCatalog`.
//! * `pipeline`: The four stages: `prep`, `substitute`, `remove`, `finalize`.
//! * `engine`: The `OffenseNormalizer` trait.
//! * `engines`: `RuleEngine`, the catalog-driven implementation.
//! * `trace`: Per-stage snapshots and rule hits for debugging.
//! * `batch`: Exact-input caching for bulk datasets.
//! * `fingerprint`: Content digest identifying a catalog version.
//! * `headless`: One-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use rota_core::{OffenseNormalizer, RuleCatalog, RuleEngine};
//!
//! fn main() -> Result<(), rota_core::RotaError> {
//!     // Build the catalog once; share it for the life of the process.
//!     let catalog = Arc::new(RuleCatalog::builtin()?);
//!     let engine = RuleEngine::new(catalog);
//!
//!     assert_eq!(engine.normalize(Some("ILL POSSESSION")), "illegal possession");
//!     assert_eq!(engine.normalize(None), "");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only catalog construction can fail, with a `RotaError`. A catalog is either
//! fully compiled or not built at all. Normalization itself never fails.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod batch;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod fingerprint;
pub mod headless;
pub mod pipeline;
pub mod trace;

/// Re-exports the catalog definition types.
pub use config::{CatalogConfig, RemovalDef, SubstitutionDef, DEFAULT_PRIORITY, MAX_PATTERN_LENGTH};

/// Re-exports the compiled catalog and its rules.
pub use catalog::{build_catalog, compile_catalog, RemovalRule, Replacement, RuleCatalog, SubstitutionRule, SEPARATOR};

/// Re-exports the error type.
pub use errors::RotaError;

/// Re-exports the normalizer trait and its production implementation.
pub use engine::OffenseNormalizer;
pub use engines::rule_engine::RuleEngine;

/// Re-exports the individual pipeline stages.
pub use pipeline::{finalize, prep, remove, substitute};

/// Re-exports tracing and batch types.
pub use batch::{BatchNormalizer, BatchStats};
pub use trace::{Drift, NormalizationTrace, RuleHit, Stage};

pub use fingerprint::catalog_fingerprint;
pub use headless::{headless_normalize, headless_normalize_all};
