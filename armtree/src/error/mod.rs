//! Error types produced while building and dumping templates.

mod constructors;
mod types;

pub use types::{ArmError, ResolveOperation};

#[cfg(test)]
mod tests;
