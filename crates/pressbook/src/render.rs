//! Rendering of tables for terminal output.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::Record;

/// Placeholder printed beneath the header of a table with no rows.
pub const EMPTY_MARKER: &str = "(no rows)";

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per row, fields separated by ` | `
    Plain,
    /// Aligned columns under the header
    #[default]
    Table,
    /// JSON array of row objects
    Json,
}

/// Renders rows of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    format: OutputFormat,
    max_column_width: usize,
}

impl Renderer {
    /// Create a renderer. A `max_column_width` of 0 disables truncation.
    #[must_use]
    pub fn new(format: OutputFormat, max_column_width: usize) -> Self {
        Self {
            format,
            max_column_width,
        }
    }

    /// Render `rows` under the header of `R`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render<R: Record>(&self, rows: &[&R]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Plain => Ok(render_plain::<R>(rows)),
            OutputFormat::Table => Ok(self.render_table::<R>(rows)),
        }
    }

    fn render_table<R: Record>(&self, rows: &[&R]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                row.fields()
                    .iter()
                    .map(|field| self.fit(&single_line(field)))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = R::COLUMNS.iter().map(|c| c.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = R::COLUMNS.iter().map(ToString::to_string).collect();
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut out = String::new();
        push_aligned(&mut out, &header, &widths);
        push_aligned(&mut out, &rule, &widths);
        if cells.is_empty() {
            out.push_str(EMPTY_MARKER);
            out.push('\n');
        }
        for row in &cells {
            push_aligned(&mut out, row, &widths);
        }
        out
    }

    /// Truncate a cell to the configured width, marking the cut with `…`.
    fn fit(&self, cell: &str) -> String {
        if self.max_column_width == 0 || cell.chars().count() <= self.max_column_width {
            return cell.to_string();
        }
        let kept: String = cell
            .chars()
            .take(self.max_column_width.saturating_sub(1))
            .collect();
        format!("{kept}…")
    }
}

/// Builds what a view prints to stdout.
///
/// A quiet screen prints nothing: no confirmation and no table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    renderer: Renderer,
    quiet: bool,
}

impl Screen {
    /// Create a screen around `renderer`.
    #[must_use]
    pub fn new(renderer: Renderer, quiet: bool) -> Self {
        Self { renderer, quiet }
    }

    /// Output of a successful add: the confirmation for `added`, then `rows`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn added<R: Record>(&self, added: &R, rows: &[R]) -> Result<String> {
        if self.quiet {
            return Ok(String::new());
        }
        let mut out = added.confirmation();
        out.push('\n');
        out.push_str(&self.listed(&rows.iter().collect::<Vec<_>>())?);
        Ok(out)
    }

    /// Output of a list: `rows` rendered, ending with a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn listed<R: Record>(&self, rows: &[&R]) -> Result<String> {
        if self.quiet {
            return Ok(String::new());
        }
        let mut out = self.renderer.render(rows)?;
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}

fn render_plain<R: Record>(rows: &[&R]) -> String {
    let mut out = R::COLUMNS.join(" | ");
    out.push('\n');
    if rows.is_empty() {
        out.push_str(EMPTY_MARKER);
        out.push('\n');
    }
    for row in rows {
        let fields: Vec<String> = row.fields().iter().map(|f| single_line(f)).collect();
        out.push_str(&fields.join(" | "));
        out.push('\n');
    }
    out
}

/// Multi-line notes are flattened so each row stays on one line.
fn single_line(field: &str) -> String {
    field.replace(['\r', '\n'], " ")
}

fn push_aligned(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
