use anyhow::Result;
use crashlens_types::ErrorLog;

use crate::args::OutputFormat;

pub fn handle(filtered: &[ErrorLog], format: OutputFormat, limit: Option<usize>) -> Result<()> {
    let shown = match limit {
        Some(n) => &filtered[..n.min(filtered.len())],
        None => filtered,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shown)?),
        OutputFormat::Plain => {
            if shown.is_empty() {
                println!("No matching error logs");
                return Ok(());
            }
            for log in shown {
                println!("{}", format_row(log));
            }
            if shown.len() < filtered.len() {
                println!("... {} more", filtered.len() - shown.len());
            }
        }
    }
    Ok(())
}

fn format_row(log: &ErrorLog) -> String {
    let browser = log
        .main_brand()
        .map(|b| format!("{} {}", b.brand, b.version))
        .unwrap_or_else(|| "-".to_string());
    let message = log
        .payload
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("-");
    format!(
        "{}  {:<12} {:<16} {:<10} {}",
        log.timestamp.format("%Y-%m-%d %H:%M:%S"),
        log.game.as_deref().unwrap_or("-"),
        browser,
        log.platform().unwrap_or("-"),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crashlens_testing::fixtures::{bare_log, log};

    #[test]
    fn row_fills_missing_fields_with_dashes() {
        let row = format_row(&bare_log(1));
        assert!(row.starts_with("2024-03-01 12:00:00"));
        assert!(row.contains('-'));
    }

    #[test]
    fn row_shows_browser_and_message() {
        let entry = log(2)
            .game("solitaire")
            .brand("Chrome", "120")
            .platform("Windows")
            .message("boom")
            .build();
        let row = format_row(&entry);
        assert!(row.contains("Chrome 120"));
        assert!(row.contains("solitaire"));
        assert!(row.ends_with("boom"));
    }
}
