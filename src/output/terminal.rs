//! Terminal output formatting with colors.

use colored::Colorize;

use crate::analysis::ComparisonMatrix;
use crate::constants::KS_THRESHOLDS;
use crate::output::Render;
use crate::report::Report;

/// Renderer printing a compact summary table to stdout on every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRender;

impl TerminalRender {
    /// Create a terminal renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Render for TerminalRender {
    fn update(&mut self, report: &Report) {
        print!("{}", format_report(report));
    }
}

/// Format a report for human-readable terminal output.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.headline().bold()));

    // Descriptive statistics, one row per function.
    out.push_str(&format!(
        "{:<16} {:>7} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}\n",
        "function", "count", "mean", "std", "min", "p25", "median", "p75", "max"
    ));
    for (name, summary) in report.names.iter().zip(&report.summaries) {
        out.push_str(&format!(
            "{:<16} {:>7} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}\n",
            name,
            summary.count,
            summary.mean,
            summary.std,
            summary.min,
            summary.p25,
            summary.median,
            summary.p75,
            summary.max
        ));
    }

    if report.names.len() > 1 {
        out.push_str(&format_matrix("K-S test Z", &report.ks));
        out.push_str(&format_matrix("Bucketed K-S test Z", &report.ks_bucketed));
    }

    out
}

fn format_matrix(title: &str, matrix: &ComparisonMatrix) -> String {
    let names = matrix.names();
    let mut out = format!("{}\n", title.bold());

    out.push_str(&format!("{:<16}", ""));
    for name in &names[1..] {
        out.push_str(&format!(" {:>9}", name));
    }
    out.push('\n');

    // Rows are the earlier slot of each pair, matching the triangle layout.
    for (j, row_name) in names[..names.len() - 1].iter().enumerate() {
        out.push_str(&format!("{:<16}", row_name));
        for i in 1..names.len() {
            match matrix.get(i, j) {
                Some(z) => out.push_str(&format!(" {:>9}", ks_cell(z))),
                None => out.push_str(&format!(" {:>9}", "-".dimmed())),
            }
        }
        out.push('\n');
    }

    out
}

/// Color a Z value by the confidence-threshold band it falls in: green for
/// indistinguishable, red for clearly separated.
fn ks_cell(z: f64) -> String {
    let text = format!("{:.3}", z);
    if z < KS_THRESHOLDS[1] {
        text.green().to_string()
    } else if z < KS_THRESHOLDS[3] {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
