// file: src/exporter/console.rs
// description: terminal rendering of analysis reports

use crate::models::AnalysisReport;
use crate::utils::logging::format_heading;
use colored::*;
use std::fmt::Write;

/// Renders the summary, entity and keyword sections shown after an analysis.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    max_keywords: usize,
}

impl ConsoleRenderer {
    pub fn new(max_keywords: usize) -> Self {
        Self { max_keywords }
    }

    pub fn render(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", format_heading("Extracted Summary"));
        let _ = writeln!(out, "{}", report.summary.trim());
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", format_heading("Named Entities"));
        if report.entities.is_empty() {
            let _ = writeln!(out, "{}", "No named entities found".dimmed());
        }
        for (text, label) in report.entities.iter() {
            let _ = writeln!(out, "{}: {}", text.bold(), label);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", format_heading("Keywords"));
        let keywords = report.top_keywords(self.max_keywords);
        if keywords.is_empty() {
            let _ = writeln!(out, "{}", "No keywords found".dimmed());
        } else {
            let _ = writeln!(out, "{}", keywords.join(", "));
        }
        if report.keywords.len() > keywords.len() {
            let _ = writeln!(
                out,
                "{}",
                format!("({} more not shown)", report.keywords.len() - keywords.len()).dimmed()
            );
        }

        out
    }
}
