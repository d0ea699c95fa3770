//! Countdown toward a persisted future instant.

mod controller;
mod models;

pub use controller::{CountdownController, TARGET_KEY};
pub use models::{time_left, TimeLeftBreakdown};
