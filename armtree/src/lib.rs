//! Attribute tree and intrinsic-function expression engine for Azure
//! Resource Manager style templates.
//!
//! A [`Template`] owns an [`AttributeNode`] tree built through
//! get-or-create field access, a registry of declared resources and the
//! [`KeyStyle`] used for key conversion. Intrinsic functions from
//! [`functions`] build immutable [`Expression`]s that are rendered to
//! `[...]` strings only when the template is dumped. Symbolic resource
//! references are resolved during the same pass, so resources may be
//! referenced before they are declared.
//!
//! ```
//! use armtree::{Template, functions::{add, deployment, parameters}};
//!
//! let mut template = Template::new("example");
//! template
//!     .root_mut()
//!     .set("value", add(parameters("first_value"), 2))
//!     .set("chained", deployment().property("first").property("second"));
//! template.resources().child("my_resource").set("type", "testing");
//!
//! let document = template.dump()?;
//! assert_eq!(document["value"], "[add(parameters('firstValue'), 2)]");
//! assert_eq!(document["chained"], "[deployment().first.second]");
//! assert_eq!(document["resources"][0]["name"], "myResource");
//! # Ok::<(), armtree::ArmError>(())
//! ```

mod dump;
mod error;
mod expression;
pub mod functions;
mod naming;
mod registry;
mod result_ext;
pub mod settings;
mod template;
mod tree;
mod value;

pub use dump::{Dumper, RESOURCES_KEY};
pub use error::{ArmError, ResolveOperation};
pub use expression::{Arg, Call, Chain, Expression, Index, Segment};
pub use naming::{CamelStyle, Key, KeyStyle, NoHump, NoHumpExt, convert};
pub use registry::{
    CatalogEntry, ResourceCatalog, ResourceEntry, ResourceRef, ResourceRegistry, Symbol,
};
pub use result_ext::ArmResultExt;
pub use template::Template;
pub use tree::AttributeNode;
pub use value::Value;

/// Result alias used throughout the crate.
pub type ArmResult<T> = Result<T, ArmError>;
