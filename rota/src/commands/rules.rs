//! `rota rules`: list the catalog in the order it runs.

use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};

use rota_core::RuleCatalog;

use crate::ui::output_format::{new_table, paint, styled_cell};
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// One catalog rule as listed by `rota rules`.
#[derive(Debug, Serialize)]
pub struct RuleRow<'a> {
    /// Position in execution order, starting at 1.
    pub order: usize,
    /// Position in the catalog as authored.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub description: &'a str,
    pub pattern: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CatalogListing<'a> {
    pub fingerprint: &'a str,
    pub substitutions: Vec<RuleRow<'a>>,
    pub removals: Vec<RuleRow<'a>>,
}

/// Builds the listing. With a priority filter, only substitutions at that
/// priority are included.
pub fn catalog_listing(catalog: &RuleCatalog, priority: Option<i32>) -> CatalogListing<'_> {
    let substitutions = catalog
        .by_priority()
        .enumerate()
        .filter(|(_, rule)| priority.map_or(true, |p| rule.priority == p))
        .map(|(order, rule)| RuleRow {
            order: order + 1,
            index: rule.index,
            priority: Some(rule.priority),
            description: &rule.description,
            pattern: &rule.pattern,
            replacement: Some(rule.replacement_source.as_str()),
            note: rule.note.as_deref(),
        })
        .collect();

    let removals = if priority.is_some() {
        Vec::new()
    } else {
        catalog
            .removals()
            .iter()
            .enumerate()
            .map(|(order, rule)| RuleRow {
                order: order + 1,
                index: rule.index,
                priority: None,
                description: &rule.description,
                pattern: &rule.pattern,
                replacement: None,
                note: rule.note.as_deref(),
            })
            .collect()
    };

    CatalogListing {
        fingerprint: catalog.fingerprint(),
        substitutions,
        removals,
    }
}

pub fn run_rules(
    catalog: &RuleCatalog,
    priority: Option<i32>,
    json: bool,
    theme_map: &ThemeMap,
) -> Result<()> {
    let listing = catalog_listing(catalog, priority);
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut writer, &listing)?;
        writeln!(writer)?;
    } else {
        render_listing(&mut writer, &listing, theme_map, supports_color)?;
    }
    Ok(())
}

pub fn render_listing<W: Write>(
    writer: &mut W,
    listing: &CatalogListing<'_>,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "Catalog fingerprint: {}", listing.fingerprint)?;

    let title = format!("Substitutions ({})", listing.substitutions.len());
    writeln!(writer, "{}", paint(&title, ThemeEntry::Header, theme_map, enable_colors))?;
    let mut table = new_table(
        vec!["Order", "#", "Priority", "Description", "Pattern", "Replacement"],
        enable_colors,
    );
    for row in &listing.substitutions {
        table.add_row(vec![
            styled_cell(row.order, ThemeEntry::Info, theme_map),
            styled_cell(row.index, ThemeEntry::Info, theme_map),
            styled_cell(row.priority.unwrap_or_default(), ThemeEntry::Stage, theme_map),
            styled_cell(row.description, ThemeEntry::RuleName, theme_map),
            styled_cell(row.pattern, ThemeEntry::Info, theme_map),
            styled_cell(format!("{:?}", row.replacement.unwrap_or_default()), ThemeEntry::Changed, theme_map),
        ]);
    }
    writeln!(writer, "{}", table)?;

    if !listing.removals.is_empty() {
        let title = format!("Removals ({})", listing.removals.len());
        writeln!(writer, "{}", paint(&title, ThemeEntry::Header, theme_map, enable_colors))?;
        let mut table = new_table(vec!["Order", "#", "Description", "Pattern"], enable_colors);
        for row in &listing.removals {
            table.add_row(vec![
                styled_cell(row.order, ThemeEntry::Info, theme_map),
                styled_cell(row.index, ThemeEntry::Info, theme_map),
                styled_cell(row.description, ThemeEntry::RuleName, theme_map),
                styled_cell(row.pattern, ThemeEntry::Info, theme_map),
            ]);
        }
        writeln!(writer, "{}", table)?;
    }
    Ok(())
}
