//! The rewrite rule catalog.
//!
//! A catalog is compiled once from a [`CatalogConfig`](crate::config::CatalogConfig)
//! and is read-only afterwards. It owns every compiled pattern, keeps rules in
//! their authored order, and caches the priority order substitutions run in.
//!
//! * `compiler`: placeholder expansion, validation and regex compilation.
//! * `template`: parsing of replacement templates.

pub mod compiler;
pub mod template;

pub use compiler::{build_catalog, compile_catalog, RemovalRule, RuleCatalog, SubstitutionRule};
pub use template::Replacement;

/// Separator sub-pattern shared by composite rules: one or more spaces, one or
/// more non-word characters, or a bare word boundary. Lets "w/", "w " and "w-"
/// all read as the same abbreviation.
pub const SEPARATOR: &str = r"(?: +|\W+|\b)";

/// Placeholder in pattern sources replaced by [`SEPARATOR`].
pub const SEPARATOR_PLACEHOLDER: &str = "sep";
