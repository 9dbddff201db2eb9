use anyhow::{Context, Result};
use crashlens_types::ErrorLog;
use std::fs;
use std::io::Read;

/// Read an error-log export from a file path or stdin (`-`).
///
/// Accepts either a single JSON array or JSON-lines (one record per line);
/// log pipelines emit both shapes.
pub fn load_logs(input: &str) -> Result<Vec<ErrorLog>> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read logs from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read logs from {input}"))?
    };

    parse_logs(&content).with_context(|| format!("Failed to parse log export from {input}"))
}

fn parse_logs(content: &str) -> Result<Vec<ErrorLog>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(content).context("invalid JSON array");
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(n, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid record on line {}", n + 1))
        })
        .collect()
}
