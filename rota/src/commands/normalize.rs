//! `rota normalize`: bulk normalization of descriptions.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use rota_core::{BatchNormalizer, OffenseNormalizer};

use super::{info_msg, read_input_lines};
use crate::ui::theme::ThemeMap;

/// Options for `run_normalize`.
pub struct NormalizeOptions {
    pub texts: Vec<String>,
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
pub struct NormalizedRecord<'a> {
    pub input: &'a str,
    pub normalized: &'a str,
}

pub fn run_normalize(
    normalizer: &dyn OffenseNormalizer,
    opts: NormalizeOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting normalize operation.");

    let inputs = if opts.texts.is_empty() {
        read_input_lines(opts.input_file.as_deref())?
    } else {
        opts.texts
    };

    let mut batch = BatchNormalizer::new(normalizer);
    let outputs = batch.normalize_batch(inputs.iter().map(|s| Some(s.as_str())));
    let stats = batch.stats();
    debug!("Batch stats: {:?}", stats);

    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing normalized output to file: {}", path.display()), theme_map);
            }
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_normalized(&mut writer, &inputs, &outputs, opts.json)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_normalized(&mut writer, &inputs, &outputs, opts.json)?;
        }
    }

    if !opts.quiet {
        info_msg(
            format!(
                "Normalized {} description(s), {} unique.",
                stats.total, stats.unique
            ),
            theme_map,
        );
    }
    info!("Normalize operation completed.");
    Ok(())
}

/// Writes one output line per input, plain or as JSON records.
pub fn write_normalized<W: Write>(
    writer: &mut W,
    inputs: &[String],
    outputs: &[String],
    json: bool,
) -> Result<()> {
    for (input, normalized) in inputs.iter().zip(outputs) {
        if json {
            let record = NormalizedRecord { input, normalized };
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "{}", normalized)?;
        }
    }
    Ok(())
}
