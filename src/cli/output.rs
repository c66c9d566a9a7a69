//! Human and JSON rendering of command results.

use colored::Colorize;
use serde::Serialize;

use crate::cleanup::CleanupReport;
use crate::error::{ImportError, Result};
use crate::importer::ImportReport;
use crate::rewrite::RewriteStats;

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| ImportError::Config(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines
            .push(format!("{} {}", "✓".green().bold(), text.bold()));
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(text.bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines.push(format!("{} {value}", padded.dimmed()));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

pub fn cleanup_section(layout: &mut HumanLayout, report: &CleanupReport) {
    layout.section("Cleanup");
    layout.kv("Bodies removed", &report.bodies_removed.to_string());
    layout.kv(
        "Old simulation",
        if report.output_removed {
            "removed"
        } else {
            "not present"
        },
    );
    layout.blank();
}

pub fn import_section(layout: &mut HumanLayout, report: &ImportReport) {
    layout.section("Import");
    layout.kv("Simulation", &report.simulation_output.display().to_string());
    layout.kv("Bodies copied", &report.bodies_copied.len().to_string());
    for body in &report.bodies_copied {
        if let Some(name) = body.file_name() {
            layout.bullet(&name.to_string_lossy());
        }
    }
    rewrite_stats(layout, &report.rewrite);
}

pub fn rewrite_stats(layout: &mut HumanLayout, stats: &RewriteStats) {
    layout.kv(
        "Lines",
        &format!("{} read, {} written", stats.lines_read, stats.lines_written),
    );
    layout.kv("Tokens scrubbed", &stats.tokens_scrubbed.to_string());
    layout.kv("Pauses zeroed", &stats.pauses_zeroed.to_string());
    layout.kv("POSTs augmented", &stats.posts_augmented.to_string());
    layout.kv("Requests named", &stats.requests_named.to_string());
    layout.kv("Lines dropped", &stats.lines_dropped.to_string());
    let anchor = stats
        .anchor_index
        .map_or_else(|| "not found".yellow().to_string(), |index| format!("line {}", index + 1));
    layout.kv("Anchor", &anchor);
    layout.kv("Snippets inserted", &stats.snippets_inserted.to_string());
}
