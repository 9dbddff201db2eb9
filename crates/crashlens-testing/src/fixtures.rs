//! Fixture builders for `ErrorLog` records.
//!
//! All fixtures live in March 2024; `log(day)` pins the day and defaults
//! the time to noon so date-range tests can reason in whole days.

use chrono::{TimeZone, Utc};
use crashlens_types::{BrandVersion, ErrorLog, UserAgent};
use serde_json::Map;

/// Start a record on `2024-03-<day>` at 12:00 UTC.
pub fn log(day: u32) -> LogBuilder {
    LogBuilder {
        day,
        hour: 12,
        minute: 0,
        game: None,
        ua: None,
        payload: Map::new(),
    }
}

/// A record carrying nothing but a timestamp.
pub fn bare_log(day: u32) -> ErrorLog {
    log(day).build()
}

/// The canonical three-record set: two Chrome versions and one Safari,
/// on days 1-3.
pub fn browser_mix() -> Vec<ErrorLog> {
    vec![
        log(1).brand("Chrome", "120").build(),
        log(2).brand("Chrome", "121").build(),
        log(3).brand("Safari", "17").build(),
    ]
}

/// A richer mixed set covering every facet dimension, for CLI-level tests.
pub fn dashboard_sample() -> Vec<ErrorLog> {
    vec![
        log(1)
            .game("solitaire")
            .brand("Chrome", "120")
            .platform("Windows")
            .message("TypeError: x is undefined")
            .build(),
        log(1)
            .game("solitaire")
            .brand("Chrome", "121")
            .platform("Windows")
            .message("RangeError: invalid array length")
            .build(),
        log(2)
            .game("mahjong")
            .brand("Safari", "17")
            .platform("macOS")
            .message("TypeError: null is not an object")
            .build(),
        log(3).game("mahjong").build(),
    ]
}

pub struct LogBuilder {
    day: u32,
    hour: u32,
    minute: u32,
    game: Option<String>,
    ua: Option<UserAgent>,
    payload: Map<String, serde_json::Value>,
}

impl LogBuilder {
    /// Override the time of day (still on the builder's fixed day).
    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    /// Append a brand entry; the first call defines the main browser.
    pub fn brand(mut self, brand: &str, version: &str) -> Self {
        self.ua
            .get_or_insert_with(|| UserAgent {
                brands: Vec::new(),
                platform: None,
            })
            .brands
            .push(BrandVersion {
                brand: brand.to_owned(),
                version: version.to_owned(),
            });
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.ua
            .get_or_insert_with(|| UserAgent {
                brands: Vec::new(),
                platform: None,
            })
            .platform = Some(platform.to_owned());
        self
    }

    /// Attach an opaque error message to the payload.
    pub fn message(mut self, message: &str) -> Self {
        self.payload
            .insert("message".to_owned(), serde_json::Value::from(message));
        self
    }

    pub fn build(self) -> ErrorLog {
        ErrorLog {
            timestamp: Utc
                .with_ymd_and_hms(2024, 3, self.day, self.hour, self.minute, 0)
                .unwrap(),
            game: self.game,
            ua: self.ua,
            payload: self.payload,
        }
    }
}
