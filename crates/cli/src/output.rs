//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;
use xrinput_conformance::ConformanceReport;

use crate::error::CliError;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(CliError::from)?;
    println!("{text}");
    Ok(())
}

pub fn print_error_json(error: &Error) {
    let mut error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "causes": error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        }
    });
    if let Some((category, severity)) = error.downcast_ref::<CliError>().and_then(CliError::classify)
    {
        error_json["error"]["category"] = json!(category.to_string());
        error_json["error"]["severity"] = json!(severity.to_string());
    }
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".yellow(), cause);
    }
}

pub fn print_report(report: &ConformanceReport, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&json!({
            "success": report.is_pass(),
            "report": report,
        }));
    }

    for line in report.to_string().lines() {
        println!("{}", colorize(line));
    }
    Ok(())
}

/// Highlight the status labels of one report line.
fn colorize(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("FAIL ") {
        return format!("{} {rest}", "FAIL".red().bold());
    }
    if let Some(rest) = line.strip_prefix("INFO ") {
        return format!("{} {rest}", "INFO".cyan());
    }
    if let Some(head) = line.strip_suffix(": PASS") {
        return format!("{head}: {}", "PASS".green().bold());
    }
    if let Some(head) = line.strip_suffix(": FAIL") {
        return format!("{head}: {}", "FAIL".red().bold());
    }
    line.to_string()
}
