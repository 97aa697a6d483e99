//! Review session facade over the card store, tag index, and scheduler

pub mod engine;
pub mod models;

pub use engine::{ReviewEngine, ReviewError};
pub use models::{NextCard, ReviewStats};
