// Fri Oct 16 2026 - Alex

use crate::structure::{Candidate, LayoutCalculator, OptimizationReport, SerializableReport};
use colored::*;
use itertools::Itertools;

pub struct ReportFormatter {
    calculator: LayoutCalculator,
    use_color: bool,
    show_offsets: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            calculator: LayoutCalculator::new(),
            use_color: true,
            show_offsets: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_offsets(mut self, show_offsets: bool) -> Self {
        self.show_offsets = show_offsets;
        self
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn bytes(&self, size: usize) -> String {
        if self.use_color {
            size.to_string().green().bold().to_string()
        } else {
            size.to_string()
        }
    }

    /// One field per tab-indented line followed by the size summary.
    pub fn render_candidate(&self, candidate: &Candidate) -> String {
        let body = if self.show_offsets {
            let layout = self.calculator.place(candidate.ordering());
            let width = layout
                .fields()
                .iter()
                .map(|p| p.field().line().len())
                .max()
                .unwrap_or(0);
            layout
                .fields()
                .iter()
                .map(|p| {
                    format!(
                        "\t{:<width$}  // offset {}, size {}\n",
                        p.field().line(),
                        p.offset(),
                        p.field().size(),
                        width = width
                    )
                })
                .join("")
        } else {
            candidate
                .ordering()
                .iter()
                .map(|f| format!("\t{}\n", f))
                .join("")
        };

        format!("{}Memory used = {} bytes\n\n", body, self.bytes(candidate.size().as_usize()))
    }

    pub fn render(&self, report: &OptimizationReport) -> String {
        let mut out = String::new();
        out.push_str(&self.heading("TETRIS:"));
        out.push('\n');

        out.push_str(&self.heading("Initial struct:"));
        out.push('\n');
        out.push_str(&self.render_candidate(&report.baseline));

        out.push_str(&self.heading("Best solution by greedy algorithm:"));
        out.push('\n');
        out.push_str(&self.render_candidate(&report.greedy));

        let title = format!("Top {} solutions by brute force:", report.brute_force.len());
        out.push_str(&self.heading(&title));
        out.push('\n');
        for candidate in &report.brute_force {
            out.push_str(&self.render_candidate(candidate));
        }
        out
    }

    pub fn render_json(&self, name: Option<&str>, report: &OptimizationReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SerializableReport::new(name, report))
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
