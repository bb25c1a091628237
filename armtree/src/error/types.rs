//! Primary error enum for template construction and dump flows.

use std::fmt;

use figment::Error as FigmentError;
use thiserror::Error;

/// Operation that requested a symbolic resource lookup.
///
/// The operation is fixed when the reference is built, not when it is
/// resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveOperation {
    /// A `dependsOn` entry naming a declared resource.
    DependsOn,
    /// A `resourceId(...)` argument naming a declared resource.
    ResourceId,
    /// A declared resource assigned directly as a value.
    Reference,
    /// A declared resource passed to any other function or method.
    Argument {
        /// Canonical name of the receiving function or method.
        function: String,
    },
}

impl ResolveOperation {
    /// The operation for a declared resource passed as an argument to
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::ResolveOperation;
    /// assert_eq!(ResolveOperation::argument_of("resourceId"), ResolveOperation::ResourceId);
    /// assert_eq!(ResolveOperation::argument_of("concat").to_string(), "argument of concat()");
    /// ```
    #[must_use]
    pub fn argument_of(function: &str) -> Self {
        if function == "resourceId" {
            Self::ResourceId
        } else {
            Self::Argument {
                function: function.to_owned(),
            }
        }
    }
}

impl fmt::Display for ResolveOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DependsOn => f.write_str("depends_on"),
            Self::ResourceId => f.write_str("resource_id"),
            Self::Reference => f.write_str("reference"),
            Self::Argument { function } => write!(f, "argument of {function}()"),
        }
    }
}

/// Errors that can occur while building or dumping a template.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArmError {
    /// A symbolic resource reference did not match any declared resource.
    #[error("resource '{name}' not found (referenced by {operation})")]
    ResourceNotFound {
        /// Declaration name that failed to resolve.
        name: String,
        /// Builder that recorded the reference.
        operation: ResolveOperation,
    },

    /// An intrinsic function received an argument it cannot render.
    #[error("malformed argument for {function}(): {reason}")]
    MalformedArgument {
        /// Canonical name of the function being built.
        function: String,
        /// Human-readable explanation of the rejected argument.
        reason: String,
    },

    /// A resource was declared twice under the same name.
    #[error("resource '{name}' is already declared")]
    DuplicateResource {
        /// Declaration name used twice.
        name: String,
    },

    /// A dynamic resource kind has no catalog entry.
    #[error("unknown resource kind '{kind}'")]
    UnknownResourceKind {
        /// Kind requested from the catalog.
        kind: String,
    },

    /// An entry of the `resources` collection is not an attribute branch.
    #[error("resource '{name}' must be a nested structure")]
    InvalidResource {
        /// Key of the offending entry.
        name: String,
    },

    /// Key style settings could not be extracted.
    #[error("failed to load key style settings: {0}")]
    Settings(Box<FigmentError>),

    /// The dumped document could not be rendered as JSON text.
    #[error("failed to serialise template: {0}")]
    Serialize(#[from] serde_json::Error),
}
