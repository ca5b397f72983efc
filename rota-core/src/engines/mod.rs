// rota-core/src/engines/mod.rs
//! Concrete implementations of the `OffenseNormalizer` trait.
//!
//! `rule_engine` is the catalog-driven pipeline used in production.

pub mod rule_engine;
