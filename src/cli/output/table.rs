//! Table output formatting for CLI commands
//!
//! Renders the collection plan with comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::services::CollectionPlan;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format planned collections as a table
    pub fn format_collections(&self, collections: &[CollectionPlan]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Target").add_attribute(Attribute::Bold),
            Cell::new("Mapping").add_attribute(Attribute::Bold),
            Cell::new("Partitions").add_attribute(Attribute::Bold),
            Cell::new("Max Records").add_attribute(Attribute::Bold),
            Cell::new("Max Bytes").add_attribute(Attribute::Bold),
            Cell::new("Flush").add_attribute(Attribute::Bold),
        ]);

        for collection in collections {
            let mapping = if collection.mapped_fields > 0 {
                format!("{} ({} fields)", collection.mode, collection.mapped_fields)
            } else {
                collection.mode.clone()
            };
            let mapping_cell = if self.use_colors {
                Cell::new(&mapping).fg(mode_color(&collection.mode))
            } else {
                Cell::new(&mapping)
            };

            let partitions = if collection.partitions.is_empty() {
                "-".to_string()
            } else {
                collection.partitions.join(", ")
            };

            table.add_row(vec![
                Cell::new(truncate_text(&collection.source, 30)),
                Cell::new(truncate_text(&collection.target, 40)),
                mapping_cell,
                Cell::new(truncate_text(&partitions, 40)),
                Cell::new(collection.max_records.to_string()),
                Cell::new(collection.max_bytes.to_string()),
                Cell::new(format!("{}s", collection.flush_interval.as_secs())),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}

fn mode_color(mode: &str) -> Color {
    match mode {
        "explicit" => Color::Cyan,
        _ => Color::Green,
    }
}

/// Truncate text to max length with ellipsis
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
