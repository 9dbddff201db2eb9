//! Testing infrastructure for crashlens tests.
//!
//! Provides `fixtures`: builders and canned record sets shared by the
//! engine unit tests and the CLI integration tests, so scenarios are
//! written once and read the same everywhere.

pub mod fixtures;

pub use fixtures::LogBuilder;
