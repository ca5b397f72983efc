//! Content fingerprint of a rule catalog.
//!
//! Canonical text is only comparable between runs that used the same
//! catalog, so caches and exported results are keyed by this digest.

use sha2::{Digest, Sha256};

use crate::config::CatalogConfig;

/// SHA-256 hex digest over every rule field, in authored order.
///
/// Notes are excluded: they never influence output.
pub fn catalog_fingerprint(config: &CatalogConfig) -> String {
    let mut hasher = Sha256::new();
    for rule in &config.substitutions {
        hasher.update(b"S\0");
        hasher.update(rule.description.as_bytes());
        hasher.update(b"\0");
        hasher.update(rule.pattern.as_bytes());
        hasher.update(b"\0");
        hasher.update(rule.replacement.as_bytes());
        hasher.update(b"\0");
        hasher.update(rule.priority.to_le_bytes());
    }
    for rule in &config.removals {
        hasher.update(b"R\0");
        hasher.update(rule.description.as_bytes());
        hasher.update(b"\0");
        hasher.update(rule.pattern.as_bytes());
    }
    hex::encode(hasher.finalize())
}
