use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Inclusive time window, `[start, end]` on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Widest representable window; the sentinel for "no date constraint".
    pub fn all_time() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Inclusive containment. An inverted range (`start > end`) contains
    /// nothing, which is the contract for malformed selections: an empty
    /// result, never an error.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// The user-selected filter criteria, one field per facet.
///
/// An empty set means the facet is unconstrained. Selections are plain
/// values: the evaluator takes them by reference and never stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub date_range: DateRange,
    #[serde(default)]
    pub games: HashSet<String>,
    #[serde(default)]
    pub browsers: HashSet<String>,
    #[serde(default)]
    pub platforms: HashSet<String>,
}

impl FacetSelection {
    /// No constraints at all: every record matches.
    pub fn unconstrained() -> Self {
        Self::within(DateRange::all_time())
    }

    /// Date window only; set facets start unconstrained.
    pub fn within(date_range: DateRange) -> Self {
        Self {
            date_range,
            games: HashSet::new(),
            browsers: HashSet::new(),
            platforms: HashSet::new(),
        }
    }

    pub fn with_games<I, S>(mut self, games: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.games = games.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_browsers<I, S>(mut self, browsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.browsers = browsers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }
}
