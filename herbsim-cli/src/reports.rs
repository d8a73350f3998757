//! Report rendering for the experiment matrix.
//!
//! One herb per row, one configured patch per column, plus a Total column.
//! Yield and XP totals sum across patches (a patch set is farmed as one
//! run); the survival total averages instead, since dying at one patch says
//! nothing about the others.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use herbsim_core::{AggregateResult, SimError};

/// Fully reduced statistics for one (herb, patch) cell.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CellStats {
    pub survival_rate: f64,
    pub mean_herbs: f64,
    pub mean_xp: f64,
    pub resurrection_rate: f64,
}

impl CellStats {
    /// Reduce an aggregate into plain rates.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DivisionByZero` if the aggregate is empty.
    pub fn from_aggregate(aggregate: &AggregateResult) -> Result<Self, SimError> {
        Ok(Self {
            survival_rate: aggregate.survival_rate()?,
            mean_herbs: aggregate.mean_herbs()?,
            mean_xp: aggregate.mean_xp()?,
            resurrection_rate: aggregate.resurrection_rate()?,
        })
    }
}

/// Row totals across every configured patch.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TotalStats {
    pub survival_rate: f64,
    pub mean_herbs: f64,
    pub mean_xp: f64,
}

/// One herb's results across the patch columns.
#[derive(Debug, Clone, Serialize)]
pub struct HerbRow {
    pub herb: String,
    pub cells: Vec<CellStats>,
    pub total: TotalStats,
}

impl HerbRow {
    #[must_use]
    pub fn new(herb: String, cells: Vec<CellStats>) -> Self {
        let count = u32::try_from(cells.len().max(1)).unwrap_or(u32::MAX);
        let total = TotalStats {
            survival_rate: cells.iter().map(|c| c.survival_rate).sum::<f64>()
                / f64::from(count),
            mean_herbs: cells.iter().map(|c| c.mean_herbs).sum(),
            mean_xp: cells.iter().map(|c| c.mean_xp).sum(),
        };
        Self { herb, cells, total }
    }
}

/// A report column: stable key plus the modifier-annotated description.
#[derive(Debug, Clone, Serialize)]
pub struct PatchColumn {
    pub key: String,
    pub name: String,
    pub description: String,
}

/// The full experiment matrix, ready for rendering or serialization.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixReport {
    pub farming_level: u32,
    pub trials: u32,
    pub seed: u64,
    pub patches: Vec<PatchColumn>,
    pub rows: Vec<HerbRow>,
}

pub fn generate_console_report(report: &MatrixReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!(
            "Herb patch simulation - level {}, {} trials per cell, seed {}",
            report.farming_level, report.trials, report.seed
        )
        .bright_cyan()
        .bold()
    ));
    for patch in &report.patches {
        out.push_str(&format!("  {} {}\n", "*".cyan(), patch.description));
    }
    out.push('\n');

    out.push_str(&render_table(
        &format!("{}", "Survival Rate".bright_yellow().bold()),
        report,
        |cell| format!("{:.1}%", cell.survival_rate * 100.0),
        |total| format!("{:.1}%", total.survival_rate * 100.0),
    ));
    out.push_str(&render_table(
        &format!("{}", "Yield".bright_yellow().bold()),
        report,
        |cell| format!("{:.2}", cell.mean_herbs),
        |total| format!("{:.2}", total.mean_herbs),
    ));
    out.push_str(&render_table(
        &format!("{}", "XP".bright_yellow().bold()),
        report,
        |cell| format!("{:.1}", cell.mean_xp),
        |total| format!("{:.1}", total.mean_xp),
    ));
    out
}

fn render_table(
    title: &str,
    report: &MatrixReport,
    cell_fmt: impl Fn(&CellStats) -> String,
    total_fmt: impl Fn(&TotalStats) -> String,
) -> String {
    let mut headers = vec!["Herb".to_string()];
    headers.extend(report.patches.iter().map(|p| p.name.clone()));
    headers.push("Total".to_string());

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let mut line = vec![row.herb.clone()];
            line.extend(row.cells.iter().map(&cell_fmt));
            line.push(total_fmt(&row.total));
            line
        })
        .collect();

    let widths = column_widths(&headers, &rows);
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format_row(&headers, &widths));
    out.push_str(&separator_row(&widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out.push('\n');
    out
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            if value.len() > widths[idx] {
                widths[idx] = value.len();
            }
        }
    }
    widths
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = values
        .iter()
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(idx, (value, width))| {
            if idx == 0 {
                // Herb names left-aligned, numbers right-aligned
                format!("{value:<width$}")
            } else {
                format!("{value:>width$}")
            }
        })
        .collect();
    format!("| {} |\n", cells.join(" | "))
}

fn separator_row(widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    format!("|-{}-|\n", cells.join("-+-"))
}

/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn generate_json_report(report: &MatrixReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn generate_markdown_report(report: &MatrixReport) -> String {
    let mut out = String::new();
    out.push_str("# Herb Patch Simulation\n\n");
    out.push_str(&format!(
        "- **Farming level**: {}\n- **Trials per cell**: {}\n- **Seed**: {}\n",
        report.farming_level, report.trials, report.seed
    ));
    for patch in &report.patches {
        out.push_str(&format!("- **Patch**: {}\n", patch.description));
    }
    out.push('\n');

    markdown_table(&mut out, "Survival Rate", report, |cell| {
        format!("{:.1}%", cell.survival_rate * 100.0)
    });
    markdown_table(&mut out, "Yield", report, |cell| {
        format!("{:.2}", cell.mean_herbs)
    });
    markdown_table(&mut out, "XP", report, |cell| format!("{:.1}", cell.mean_xp));
    out
}

fn markdown_table(
    out: &mut String,
    title: &str,
    report: &MatrixReport,
    cell_fmt: impl Fn(&CellStats) -> String,
) {
    out.push_str(&format!("## {title}\n\n"));
    out.push_str("| Herb |");
    for patch in &report.patches {
        out.push_str(&format!(" {} |", patch.name));
    }
    out.push_str(" Total |\n");
    out.push_str(&format!("|---|{}---|\n", "---|".repeat(report.patches.len())));
    for row in &report.rows {
        out.push_str(&format!("| {} |", row.herb));
        for cell in &row.cells {
            out.push_str(&format!(" {} |", cell_fmt(cell)));
        }
        // The total column reuses the survival average / sum split baked
        // into the row.
        let total = match title {
            "Survival Rate" => format!("{:.1}%", row.total.survival_rate * 100.0),
            "Yield" => format!("{:.2}", row.total.mean_herbs),
            _ => format!("{:.1}", row.total.mean_xp),
        };
        out.push_str(&format!(" {total} |\n"));
    }
    out.push('\n');
}
