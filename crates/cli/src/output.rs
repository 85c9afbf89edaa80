//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde_json::json;

use crate::run::MappingRecord;
use tabletmap_xrandr_protocol::Monitor;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    // Print error chain if available
    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the end-of-run report: a success line, or the whole run as one
/// JSON document
pub fn print_mapping_report(monitor: &Monitor, mappings: &[MappingRecord], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "monitor": monitor,
            "mappings": mappings
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format mapping report as JSON: {}", e),
        }
    } else {
        print_success(
            &format!("Mapped {} device(s) to `{}`", mappings.len(), monitor.output),
            false,
        );
    }
}

/// Print success message
pub fn print_success(message: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "message": message
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format success message as JSON: {}", e),
        }
    } else {
        println!("{} {}", "✓".green(), message);
    }
}

/// Print warning message
pub fn print_warning(message: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "warning": message
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format warning message as JSON: {}", e),
        }
    } else {
        println!("{} {}", "⚠".yellow(), message);
    }
}

/// Get error type name for JSON output
fn error_type_name(error: &Error) -> String {
    format!("{:?}", error)
        .split('(')
        .next()
        .unwrap_or("Unknown")
        .to_string()
}
