use crashlens_types::{ErrorLog, FacetSelection};

/// Reduce `logs` to the records matching `selection`.
///
/// A record is retained iff every facet agrees (AND across facets, OR within
/// a facet's allowed set). Relative input order is preserved; nothing is
/// sorted. Records missing a field an active facet needs are excluded from
/// that facet's match rather than raising - under-selecting beats crashing
/// an interactive dashboard.
pub fn evaluate(logs: &[ErrorLog], selection: &FacetSelection) -> Vec<ErrorLog> {
    logs.iter()
        .filter(|log| matches(log, selection))
        .cloned()
        .collect()
}

fn matches(log: &ErrorLog, selection: &FacetSelection) -> bool {
    selection.date_range.contains(log.timestamp)
        && matches_game(log, selection)
        && matches_browser(log, selection)
        && matches_platform(log, selection)
}

fn matches_game(log: &ErrorLog, selection: &FacetSelection) -> bool {
    if selection.games.is_empty() {
        return true;
    }
    // A record with no game never matches an active game facet
    log.game
        .as_ref()
        .is_some_and(|game| selection.games.contains(game))
}

fn matches_browser(log: &ErrorLog, selection: &FacetSelection) -> bool {
    if selection.browsers.is_empty() {
        return true;
    }
    // Any reported brand may satisfy the facet, not just the main one
    log.brand_names()
        .any(|brand| selection.browsers.contains(brand))
}

fn matches_platform(log: &ErrorLog, selection: &FacetSelection) -> bool {
    if selection.platforms.is_empty() {
        return true;
    }
    log.platform()
        .is_some_and(|platform| selection.platforms.contains(platform))
}
