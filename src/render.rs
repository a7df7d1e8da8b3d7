use std::io::Write;

use anyhow::Result;
use crossterm::style::{style, Color, Stylize};
use serde::Serialize;

use crate::diff::{
    build_side_by_side_rows, collapse_context, ChangeType, DiffLine, DiffStats, DisplayItem,
    SideBySideRow,
};
use crate::theme::Theme;

const TAB_WIDTH: usize = 4;
/// Column separator in the split view.
const SEPARATOR: &str = " │ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffViewMode {
    Split,
    Unified,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: DiffViewMode,
    /// Unchanged lines kept around each hunk; `None` shows everything.
    pub context: Option<usize>,
    pub color: bool,
    /// Total terminal width, used by the split view.
    pub width: usize,
}

pub struct Renderer<'a> {
    theme: &'a Theme,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(theme: &'a Theme, options: RenderOptions) -> Self {
        Self { theme, options }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.options.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn line_color(&self, change_type: ChangeType) -> Color {
        match change_type {
            ChangeType::Unchanged => self.theme.unchanged_fg,
            ChangeType::Added => self.theme.added_fg,
            ChangeType::Removed => self.theme.removed_fg,
        }
    }

    pub fn render_header(
        &self,
        out: &mut impl Write,
        label: &str,
        language: &str,
        stats: DiffStats,
    ) -> Result<()> {
        writeln!(
            out,
            "{}  {} {}",
            self.paint(&format!("{label} ({language})"), self.theme.header_fg),
            self.paint(&format!("+{}", stats.added), self.theme.added_fg),
            self.paint(&format!("-{}", stats.removed), self.theme.removed_fg),
        )?;
        Ok(())
    }

    pub fn render(&self, out: &mut impl Write, lines: &[DiffLine]) -> Result<()> {
        match self.options.mode {
            DiffViewMode::Unified => self.render_unified(out, lines),
            DiffViewMode::Split => self.render_split(out, lines),
        }
    }

    fn render_collapsed(&self, out: &mut impl Write, hidden: usize) -> Result<()> {
        let noun = if hidden == 1 { "line" } else { "lines" };
        writeln!(
            out,
            "{}",
            self.paint(&format!("⋯ {hidden} unchanged {noun}"), self.theme.collapsed_fg)
        )?;
        Ok(())
    }

    pub fn render_unified(&self, out: &mut impl Write, lines: &[DiffLine]) -> Result<()> {
        let width = number_width(lines);

        for item in collapse_context(lines, self.options.context) {
            match item {
                DisplayItem::Collapsed { hidden } => self.render_collapsed(out, hidden)?,
                DisplayItem::Line { line, .. } => {
                    let gutter = format!(
                        "{} {}",
                        format_number(line.old_line_number, width),
                        format_number(line.new_line_number, width),
                    );
                    let body = format!(
                        "{} {}",
                        line.change_type.marker(),
                        expand_tabs(&line.content)
                    );
                    writeln!(
                        out,
                        "{} {}",
                        self.paint(&gutter, self.theme.line_number_fg),
                        self.paint(&body, self.line_color(line.change_type)),
                    )?;
                }
            }
        }

        Ok(())
    }

    pub fn render_split(&self, out: &mut impl Write, lines: &[DiffLine]) -> Result<()> {
        let number_width = number_width(lines);
        let column = self.options.width.saturating_sub(SEPARATOR.chars().count()) / 2;
        // lineno, space, marker
        let content_width = column.saturating_sub(number_width + 2);

        // Collapsing only removes unchanged runs, so each kept segment still
        // holds whole hunks and pairs the same way it would unfiltered.
        let mut segment: Vec<DiffLine> = Vec::new();
        for item in collapse_context(lines, self.options.context) {
            match item {
                DisplayItem::Line { line, .. } => segment.push(line.clone()),
                DisplayItem::Collapsed { hidden } => {
                    for row in build_side_by_side_rows(&segment) {
                        self.render_row(out, &row, number_width, content_width)?;
                    }
                    segment.clear();
                    self.render_collapsed(out, hidden)?;
                }
            }
        }
        for row in build_side_by_side_rows(&segment) {
            self.render_row(out, &row, number_width, content_width)?;
        }

        Ok(())
    }

    fn render_row(
        &self,
        out: &mut impl Write,
        row: &SideBySideRow,
        number_width: usize,
        content_width: usize,
    ) -> Result<()> {
        let left = self.render_cell(
            row.left.as_ref(),
            row.left.as_ref().and_then(|l| l.old_line_number),
            number_width,
            content_width,
        );
        let right = self.render_cell(
            row.right.as_ref(),
            row.right.as_ref().and_then(|l| l.new_line_number),
            number_width,
            content_width,
        );
        let line = format!(
            "{left}{}{right}",
            self.paint(SEPARATOR, self.theme.line_number_fg)
        );
        writeln!(out, "{}", line.trim_end())?;
        Ok(())
    }

    fn render_cell(
        &self,
        line: Option<&DiffLine>,
        number: Option<usize>,
        number_width: usize,
        content_width: usize,
    ) -> String {
        let Some(line) = line else {
            return " ".repeat(number_width + 2 + content_width);
        };
        let content = fit_to_width(&expand_tabs(&line.content), content_width);
        format!(
            "{} {}",
            self.paint(&format_number(number, number_width), self.theme.line_number_fg),
            self.paint(
                &format!("{}{content}", line.change_type.marker()),
                self.line_color(line.change_type)
            ),
        )
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    language: &'a str,
    stats: DiffStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<&'a [DiffLine]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<SideBySideRow>>,
}

/// Machine-readable output: the full line sequence, or the paired rows in
/// split mode. Context collapsing does not apply.
pub fn render_json(
    out: &mut impl Write,
    path: &str,
    language: &str,
    stats: DiffStats,
    lines: &[DiffLine],
    mode: DiffViewMode,
) -> Result<()> {
    let report = match mode {
        DiffViewMode::Unified => JsonReport {
            path,
            language,
            stats,
            lines: Some(lines),
            rows: None,
        },
        DiffViewMode::Split => JsonReport {
            path,
            language,
            stats,
            lines: None,
            rows: Some(build_side_by_side_rows(lines)),
        },
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn number_width(lines: &[DiffLine]) -> usize {
    let max = lines
        .iter()
        .filter_map(|l| l.old_line_number.max(l.new_line_number))
        .max()
        .unwrap_or(0);
    max.to_string().len()
}

fn format_number(number: Option<usize>, width: usize) -> String {
    match number {
        Some(n) => format!("{n:>width$}"),
        None => " ".repeat(width),
    }
}

fn expand_tabs(content: &str) -> String {
    content.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Truncate on char boundaries and pad with spaces to exactly `width` chars.
fn fit_to_width(content: &str, width: usize) -> String {
    let mut fitted: String = content.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}
