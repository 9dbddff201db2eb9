use crashlens_types::{DateRange, ErrorLog};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The distinct facet values present in a collection, in first-seen order.
/// This is what a filter panel offers in its multi-select lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub games: Vec<String>,
    pub browsers: Vec<String>,
    pub platforms: Vec<String>,
}

pub fn facet_options(logs: &[ErrorLog]) -> FacetOptions {
    let mut options = FacetOptions::default();
    let mut seen_games = HashSet::new();
    let mut seen_browsers = HashSet::new();
    let mut seen_platforms = HashSet::new();

    for log in logs {
        if let Some(game) = &log.game
            && seen_games.insert(game.clone())
        {
            options.games.push(game.clone());
        }
        if let Some(main) = log.main_brand()
            && seen_browsers.insert(main.brand.clone())
        {
            options.browsers.push(main.brand.clone());
        }
        if let Some(platform) = log.platform()
            && seen_platforms.insert(platform.to_owned())
        {
            options.platforms.push(platform.to_owned());
        }
    }

    options
}

/// Tightest date window covering every record, `None` for an empty
/// collection. Callers pick their own sentinel for the empty case
/// (the CLI falls back to `DateRange::all_time()`) instead of this
/// function inventing non-finite bounds.
pub fn date_bounds(logs: &[ErrorLog]) -> Option<DateRange> {
    let start = logs.iter().map(|log| log.timestamp).min()?;
    let end = logs.iter().map(|log| log.timestamp).max()?;
    Some(DateRange::new(start, end))
}
