use anyhow::Result;
use crashlens_engine::{
    AggregateNode, aggregate_by, browser_version_tree, game_key, hour_bucket_key, platform_key,
};
use crashlens_types::ErrorLog;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::{print_section, stdout_is_tty};

/// Every standard dashboard breakdown over one filtered collection.
#[derive(Serialize)]
struct Report {
    total: usize,
    browsers: Vec<AggregateNode>,
    platforms: Vec<AggregateNode>,
    games: Vec<AggregateNode>,
    hourly: Vec<AggregateNode>,
}

pub fn handle(filtered: &[ErrorLog], format: OutputFormat) -> Result<()> {
    let report = Report {
        total: filtered.len(),
        browsers: browser_version_tree(filtered),
        platforms: aggregate_by(filtered, platform_key),
        games: aggregate_by(filtered, game_key),
        hourly: aggregate_by(filtered, hour_bucket_key),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print_plain(&report),
    }
    Ok(())
}

fn print_plain(report: &Report) {
    if report.total == 0 {
        println!("No matching error logs");
        return;
    }

    let color = stdout_is_tty();
    println!("{} matching error logs", report.total);
    print_section("Errors by browser & version", &report.browsers, color);
    print_section("Errors by platform", &report.platforms, color);
    print_section("Errors by game", &report.games, color);
    print_section("Errors per hour", &report.hourly, color);
}
