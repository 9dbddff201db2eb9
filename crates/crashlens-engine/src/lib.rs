// Engine module - Core processing logic (filtering, grouping, palette)
// This layer sits between raw error logs (types) and CLI/dashboard presentation

pub mod aggregate;
pub mod filter;
pub mod palette;
pub mod summary;

pub use aggregate::{
    AggregateNode, aggregate_browser_versions, aggregate_by, game_key, hour_bucket_key,
    main_browser_key, platform_key,
};
pub use filter::evaluate;
pub use palette::{ColorToken, PALETTE_FAMILIES, SHADES_PER_FAMILY, child_token, outer_token};
pub use summary::{FacetOptions, date_bounds, facet_options};

// Façade API - Stable public interface for callers
// The UI/CLI layer should use these instead of reaching into internal modules

use crashlens_types::{ErrorLog, FacetSelection};

/// Filter a collection down to the records matching a facet selection.
pub fn filter_logs(logs: &[ErrorLog], selection: &FacetSelection) -> Vec<ErrorLog> {
    filter::evaluate(logs, selection)
}

/// Build the two-level browser -> version hierarchy from a (filtered) collection.
pub fn browser_version_tree(logs: &[ErrorLog]) -> Vec<AggregateNode> {
    aggregate::aggregate_browser_versions(logs)
}
