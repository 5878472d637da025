//! Command-line interface
//!
//! Argument parsing, subcommands and output formatting for the daemon binary.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ConfigArgs};

/// Report a command failure.
///
/// The full context chain is logged at error level so the configuration
/// message (field path and violated constraint) is always visible. In JSON
/// mode a machine-readable report is also written to stderr.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    tracing::error!("{err:#}");
    if let Some(report) = json_error_report(err, json_mode) {
        eprintln!("{report}");
    }
}

fn json_error_report(err: &anyhow::Error, json_mode: bool) -> Option<serde_json::Value> {
    json_mode.then(|| {
        serde_json::json!({
            "valid": false,
            "error": format!("{err:#}"),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_failure() -> anyhow::Error {
        anyhow::anyhow!("mongodb.uri is required").context("failed to load configuration")
    }

    #[test]
    fn test_human_mode_has_no_extra_report() {
        assert!(json_error_report(&load_failure(), false).is_none());
    }

    #[test]
    fn test_json_mode_reports_full_chain() {
        let report = json_error_report(&load_failure(), true).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(
            report["error"],
            "failed to load configuration: mongodb.uri is required"
        );
    }
}
