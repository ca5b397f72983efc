//! `rota explain`: trace one description through the pipeline.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use rota_core::{NormalizationTrace, OffenseNormalizer, Stage};

use crate::ui::output_format::{new_table, paint, styled_cell};
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn run_explain(
    normalizer: &dyn OffenseNormalizer,
    text: &str,
    json: bool,
    theme_map: &ThemeMap,
) -> Result<()> {
    let trace = normalizer.trace(text);
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut writer, &trace)?;
        writeln!(writer)?;
    } else {
        render_trace(&mut writer, &trace, theme_map, supports_color)?;
    }
    Ok(())
}

/// Renders the stage snapshots, then every rule hit in firing order.
pub fn render_trace<W: Write>(
    writer: &mut W,
    trace: &NormalizationTrace,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint("Pipeline stages", ThemeEntry::Header, theme_map, enable_colors))?;
    let mut stages = new_table(vec!["Stage", "Text"], enable_colors);
    for (name, text) in [
        ("input", &trace.input),
        ("prepared", &trace.prepared),
        ("substituted", &trace.substituted),
        ("removed", &trace.removed),
        ("canonical", &trace.canonical),
    ] {
        stages.add_row(vec![
            styled_cell(name, ThemeEntry::Stage, theme_map),
            styled_cell(format!("{:?}", text), ThemeEntry::Changed, theme_map),
        ]);
    }
    writeln!(writer, "{}", stages)?;

    if trace.hits.is_empty() {
        writeln!(writer, "No rules changed this description.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{}",
        paint(
            &format!("Rules applied ({})", trace.hits.len()),
            ThemeEntry::Header,
            theme_map,
            enable_colors
        )
    )?;
    let mut hits = new_table(vec!["Step", "Stage", "Rule", "Priority", "Before", "After"], enable_colors);
    for (step, hit) in trace.hits.iter().enumerate() {
        let stage = match hit.stage {
            Stage::Substitution => "substitution",
            Stage::Removal => "removal",
        };
        let priority = hit.priority.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string());
        hits.add_row(vec![
            styled_cell(step + 1, ThemeEntry::Info, theme_map),
            styled_cell(stage, ThemeEntry::Stage, theme_map),
            styled_cell(format!("#{} {}", hit.index, hit.description), ThemeEntry::RuleName, theme_map),
            styled_cell(priority, ThemeEntry::Info, theme_map),
            styled_cell(format!("{:?}", hit.before), ThemeEntry::Info, theme_map),
            styled_cell(format!("{:?}", hit.after), ThemeEntry::Changed, theme_map),
        ]);
    }
    writeln!(writer, "{}", hits)?;
    Ok(())
}
