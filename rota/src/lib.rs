// rota/src/lib.rs
//! # ROTA Command-Line Application
//!
//! Terminal front end for `rota-core`: normalize offense descriptions from
//! arguments, files or stdin, inspect how the rule catalog rewrote a single
//! description, list the catalog, and find inputs whose output drifts when
//! normalized a second time.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
