//! `rota drift`: find descriptions whose output is not stable under a second pass.
//!
//! Drift is informational. Some expansions contain abbreviations that a later
//! rule rewrites again, so `normalize(normalize(s))` can differ from
//! `normalize(s)`. The command reports such inputs and always succeeds.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

use rota_core::{Drift, OffenseNormalizer};

use super::read_input_lines;
use crate::ui::output_format::{new_table, paint, print_success_message, styled_cell};
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Checks each distinct, non-blank input once, in first-seen order.
pub fn find_drift(normalizer: &dyn OffenseNormalizer, inputs: &[String]) -> (usize, Vec<Drift>) {
    let mut seen = HashSet::new();
    let mut drifts = Vec::new();
    for input in inputs {
        if input.trim().is_empty() || !seen.insert(input.as_str()) {
            continue;
        }
        if let Some(drift) = normalizer.drift(input) {
            drifts.push(drift);
        }
    }
    (seen.len(), drifts)
}

pub fn run_drift(
    normalizer: &dyn OffenseNormalizer,
    input_file: Option<PathBuf>,
    theme_map: &ThemeMap,
) -> Result<()> {
    let inputs = read_input_lines(input_file.as_deref())?;
    let (checked, drifts) = find_drift(normalizer, &inputs);
    log::debug!("Checked {} distinct descriptions, {} drift.", checked, drifts.len());

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    render_drift(&mut writer, checked, &drifts, theme_map, supports_color)?;
    Ok(())
}

pub fn render_drift<W: Write>(
    writer: &mut W,
    checked: usize,
    drifts: &[Drift],
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if drifts.is_empty() {
        let msg = format!("No drift found in {} distinct description(s).", checked);
        return print_success_message(writer, &msg, theme_map, enable_colors);
    }

    let mut table = new_table(vec!["Input", "First pass", "Second pass"], enable_colors);
    for drift in drifts {
        table.add_row(vec![
            styled_cell(&drift.input, ThemeEntry::Info, theme_map),
            styled_cell(&drift.first_pass, ThemeEntry::Info, theme_map),
            styled_cell(&drift.second_pass, ThemeEntry::Changed, theme_map),
        ]);
    }
    writeln!(writer, "{}", table)?;
    let msg = format!(
        "{} of {} distinct description(s) change on a second pass.",
        drifts.len(),
        checked
    );
    writeln!(writer, "{}", paint(&msg, ThemeEntry::Warn, theme_map, enable_colors))
}
