// rota/src/main.rs
//! Rota entry point.
//!
//! Parses the command line, sets up logging and the colour theme, compiles
//! the rule catalog once, and dispatches to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::process::ExitCode;

use rota::cli::{Cli, Commands};
use rota::commands::{self, drift, explain, normalize, rules};
use rota::logger;
use rota::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use rota_core::{OffenseNormalizer, RuleEngine};

fn main() -> ExitCode {
    // A missing .env file is normal.
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let theme_map = match build_theme_map(args.theme.as_deref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            commands::warn_msg(format!("{:#}. Using the default theme.", e), &fallback);
            fallback
        }
    };

    match run(args, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli, theme_map: &ThemeMap) -> Result<()> {
    let engine = RuleEngine::builtin().context("Failed to load the rule catalog")?;
    debug!(
        "Loaded {} rules, fingerprint {}.",
        engine.catalog().len(),
        engine.catalog().fingerprint()
    );

    match args.command {
        Commands::Normalize(cmd) => normalize::run_normalize(
            &engine,
            normalize::NormalizeOptions {
                texts: cmd.texts,
                input_file: cmd.input_file,
                output_path: cmd.output,
                json: cmd.json,
                quiet: args.quiet,
            },
            theme_map,
        ),
        Commands::Explain(cmd) => explain::run_explain(&engine, &cmd.text, cmd.json, theme_map),
        Commands::Rules(cmd) => rules::run_rules(engine.catalog(), cmd.priority, cmd.json, theme_map),
        Commands::Drift(cmd) => drift::run_drift(&engine, cmd.input_file, theme_map),
    }
}
