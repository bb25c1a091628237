//! Extensions for mapping errors to `ArmResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| ArmError::…(e))` patterns
//! when converting external error types into the crate's `ArmResult<T>`
//! alias.
//!
//! # Examples
//!
//! ```
//! use armtree::{ArmResult, ArmResultExt};
//!
//! fn encode() -> ArmResult<String> {
//!     // serde_json::Error implements Into<ArmError>
//!     serde_json::to_string(&42).into_arm()
//! }
//! # assert_eq!(encode().ok().as_deref(), Some("42"));
//! ```

use crate::{ArmError, ArmResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<ArmError>`
/// into an `ArmResult<T>`.
pub trait ArmResultExt<T, E> {
    /// Convert `Result<T, E>` into `ArmResult<T>` using `Into<ArmError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`ArmError`].
    fn into_arm(self) -> ArmResult<T>;
}

impl<T, E> ArmResultExt<T, E> for Result<T, E>
where
    E: Into<ArmError>,
{
    fn into_arm(self) -> ArmResult<T> {
        self.map_err(Into::into)
    }
}
