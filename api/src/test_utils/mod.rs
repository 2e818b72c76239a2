//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of a mocking crate?
//! - They are explicit and easy to debug
//! - The in-memory post store can model the two failure shapes the feed
//!   cares about (no composite filter support, store outage) directly

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
