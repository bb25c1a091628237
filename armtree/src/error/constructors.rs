//! Convenience constructors for `ArmError`.

use figment::Error as FigmentError;

use super::{ArmError, ResolveOperation};

impl ArmError {
    /// Construct a lookup failure for `name` raised by `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::{ArmError, ResolveOperation};
    /// let e = ArmError::resource_not_found("web", ResolveOperation::DependsOn);
    /// assert!(matches!(e, ArmError::ResourceNotFound { .. }));
    /// ```
    #[must_use]
    pub fn resource_not_found(name: impl Into<String>, operation: ResolveOperation) -> Self {
        Self::ResourceNotFound {
            name: name.into(),
            operation,
        }
    }

    /// Construct a malformed argument error for `function`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::ArmError;
    /// let e = ArmError::malformed_argument("concat", "mappings are not arguments");
    /// assert_eq!(
    ///     e.to_string(),
    ///     "malformed argument for concat(): mappings are not arguments"
    /// );
    /// ```
    #[must_use]
    pub fn malformed_argument(function: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedArgument {
            function: function.into(),
            reason: reason.into(),
        }
    }

    /// Construct a settings error from a [`figment::Error`].
    #[must_use]
    pub fn settings(source: FigmentError) -> Self {
        Self::Settings(Box::new(source))
    }

    /// Returns the unresolved declaration name for lookup failures.
    #[must_use]
    pub fn unresolved_name(&self) -> Option<&str> {
        match self {
            Self::ResourceNotFound { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<FigmentError> for ArmError {
    fn from(source: FigmentError) -> Self {
        Self::settings(source)
    }
}
