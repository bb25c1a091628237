//! Test helpers shared across the armtree workspace.
//!
//! [`figment`] wraps `figment::Jail` for settings tests and [`fixtures`]
//! builds the templates most behavioural tests start from.

pub mod figment;
pub mod fixtures;
