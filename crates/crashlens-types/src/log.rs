use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// NOTE: Schema Design Goals
//
// 1. Wire fidelity: Field names follow the upstream log export
//    (`@timestamp`, `ua.brands`, `ua.platform`) so exports parse as-is
// 2. Permissive-fail: Every field a facet or grouping depends on is optional;
//    a record missing one is excluded from that match, never rejected at parse
// 3. Opaque payload: Error message, stack, URL etc. ride along in `payload`
//    untouched - the engine never interprets them, the detail view does

/// A single crash/error report as emitted by a game client.
/// Immutable input record; the engine never mutates or re-orders these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLog {
    /// Time the error occurred (UTC)
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,

    /// Identifier of the originating game
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,

    /// Client user-agent identity, when the client reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ua: Option<UserAgent>,

    /// Remaining report fields (message, stack, url, ...), passed through verbatim
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Structured user-agent data (client hints shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAgent {
    /// Ordered browser identities; the first entry is the main browser
    #[serde(default)]
    pub brands: Vec<BrandVersion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandVersion {
    pub brand: String,
    pub version: String,
}

impl ErrorLog {
    /// Main browser identity: the first entry of `ua.brands`.
    ///
    /// `None` when the record has no user-agent data or an empty brand list.
    /// Callers decide what absence means (drop from group, fail the facet).
    pub fn main_brand(&self) -> Option<&BrandVersion> {
        self.ua.as_ref().and_then(|ua| ua.brands.first())
    }

    /// Platform name, when reported.
    pub fn platform(&self) -> Option<&str> {
        self.ua.as_ref().and_then(|ua| ua.platform.as_deref())
    }

    /// All brand names on the record, in reported order.
    pub fn brand_names(&self) -> impl Iterator<Item = &str> {
        self.ua
            .iter()
            .flat_map(|ua| ua.brands.iter())
            .map(|b| b.brand.as_str())
    }
}
