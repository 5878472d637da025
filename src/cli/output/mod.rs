//! CLI output formatting module
//!
//! Commands produce a serializable result that is printed either for humans or
//! as JSON.

pub mod table;

use serde::Serialize;

pub use table::TableFormatter;

/// Result of a command that can be rendered in both output modes.
pub trait CommandOutput: Serialize {
    /// Text for a terminal.
    fn to_human(&self) -> String;
    /// JSON value printed with `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}
