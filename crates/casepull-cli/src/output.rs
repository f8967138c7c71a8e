//! Output formatting for the CLI.

use crate::runner::BatchOutcome;
use casepull_domain::{CaseId, CaseRecord, FetchError};
use casepull_extractor::ColumnWarning;
use colored::*;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Width of the `=` rule framing banners and summaries.
const RULE_WIDTH: usize = 70;

/// Longest value shown in the inspect field table.
const PREVIEW_CHARS: usize = 50;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Banner printed before a batch starts.
    pub fn banner(&self, title: &str, details: &[(&str, String)]) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![rule.clone(), self.colorize(title, "cyan"), rule];
        lines.extend(
            details
                .iter()
                .map(|(label, value)| format!("{:<12} {}", format!("{}:", label), value)),
        );
        lines.join("\n")
    }

    /// Progress prefix for one case, printed without a newline.
    pub fn progress(&self, index: usize, total: usize, id: &CaseId) -> String {
        format!("[{}/{}] Fetching case {}...", index, total, id)
    }

    /// Glyph closing a progress line after a successful fetch.
    pub fn fetch_ok(&self) -> String {
        self.colorize("✓", "green")
    }

    /// Glyph closing a progress line after a failed fetch.
    pub fn fetch_failed(&self) -> String {
        self.colorize("✗", "red")
    }

    /// Classified diagnostic for a failed case.
    pub fn fetch_failure(&self, id: &CaseId, error: &FetchError) -> String {
        match error {
            FetchError::AuthExpired => format!(
                "{}\n  {}",
                self.error(&format!("Authentication failed for case {}", id)),
                self.auth_hint()
            ),
            FetchError::NotFoundOrForbidden => {
                self.warning(&format!("Case {} not found or no access", id))
            }
            FetchError::Unexpected(status) => {
                self.error(&format!("Error fetching case {}: HTTP {}", id, status))
            }
            FetchError::Network(detail) => {
                self.error(&format!("Network error fetching case {}: {}", id, detail))
            }
            FetchError::MalformedBody(detail) => {
                self.error(&format!("Unreadable response for case {}: {}", id, detail))
            }
        }
    }

    /// Hint shown whenever the API rejected the credential.
    pub fn auth_hint(&self) -> String {
        self.info(
            "Your token may have expired. Get a fresh one and update the config or pass --token.",
        )
    }

    /// A column downgraded to a placeholder.
    pub fn column_warning(&self, warning: &ColumnWarning) -> String {
        self.warning(&warning.to_string())
    }

    /// End-of-run summary block.
    pub fn summary(&self, outcome: &BatchOutcome) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            format!("Successfully fetched: {} cases", outcome.rows.len()),
        ];

        if !outcome.failures.is_empty() {
            let failed: Vec<&str> = outcome.failed_ids().iter().map(|id| id.as_str()).collect();
            lines.push(self.colorize(
                &format!("Failed to fetch:      {} cases", outcome.failures.len()),
                "red",
            ));
            lines.push(format!("Failed cases:         {}", failed.join(", ")));
        }
        if !outcome.warnings.is_empty() {
            lines.push(self.colorize(
                &format!("Column warnings:      {}", outcome.warnings.len()),
                "yellow",
            ));
        }
        lines.push(rule);

        if outcome.has_auth_failures() {
            lines.push(self.auth_hint());
        }
        lines.join("\n")
    }

    /// Numbered table of catalog columns and the fields they read.
    pub fn columns_table(&self, columns: &[(&str, &str)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Column", "Source"]);

        for (i, (name, source)) in columns.iter().enumerate() {
            builder.push_record([(i + 1).to_string(), name.to_string(), source.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Table of the non-empty top-level fields of a raw record.
    pub fn fields_table(&self, record: &CaseRecord) -> String {
        let mut fields: Vec<(&String, &Value)> =
            record.fields().filter(|(_, value)| !is_blank(value)).collect();
        if fields.is_empty() {
            return self.colorize("No populated fields.", "yellow");
        }
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let mut builder = Builder::default();
        builder.push_record(["Field", "Type", "Value"]);

        for (key, value) in fields {
            builder.push_record([key.clone(), json_type(value).to_string(), preview(value)]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Cut `text` to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

fn preview(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    // Keep table rows on one line
    truncate(&rendered.replace(['\r', '\n'], " "), PREVIEW_CHARS)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
