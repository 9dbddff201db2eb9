use anyhow::Result;
use crashlens_engine::{date_bounds, filter_logs};
use crashlens_types::{DateRange, ErrorLog, FacetSelection};

use crate::args::{Cli, Commands, FacetArgs};
use crate::handlers;
use crate::input::load_logs;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Report { facets, format } => {
            let filtered = load_and_filter(&facets)?;
            handlers::report::handle(&filtered, format)
        }
        Commands::List {
            facets,
            format,
            limit,
        } => {
            let filtered = load_and_filter(&facets)?;
            handlers::list::handle(&filtered, format, limit)
        }
    }
}

fn load_and_filter(facets: &FacetArgs) -> Result<Vec<ErrorLog>> {
    let logs = load_logs(&facets.input)?;
    let selection = build_selection(facets, &logs);
    Ok(filter_logs(&logs, &selection))
}

/// Turn CLI flags into a facet selection. Missing window ends default to
/// the export's own date bounds (the dashboard initializes its pickers the
/// same way); an empty export falls back to the all-time sentinel.
fn build_selection(facets: &FacetArgs, logs: &[ErrorLog]) -> FacetSelection {
    let bounds = date_bounds(logs).unwrap_or_else(DateRange::all_time);
    let range = DateRange::new(
        facets.from.unwrap_or(bounds.start),
        facets.to.unwrap_or(bounds.end),
    );
    FacetSelection::within(range)
        .with_games(facets.games.iter().cloned())
        .with_browsers(facets.browsers.iter().cloned())
        .with_platforms(facets.platforms.iter().cloned())
}
