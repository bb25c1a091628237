//! Leaf values stored in the attribute tree.

use indexmap::IndexMap;

use crate::{expression::Expression, registry::ResourceRef};

/// A value assigned to a leaf of the attribute tree.
///
/// Sequences and mappings may embed [`Expression`]s and pending resource
/// references at any depth; both are rendered in place when the template is
/// dumped. Mapping keys are user data and are emitted verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A plain string.
    String(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// An insertion-ordered mapping.
    Map(IndexMap<String, Value>),
    /// An intrinsic function expression, emitted as `[...]`.
    Expression(Expression),
    /// A `type/name` reference resolved at dump time.
    Resource(ResourceRef),
}

impl Value {
    /// Build a sequence from `items`.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping from `entries`, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::{Value, functions::deployment};
    /// let value = Value::map([("thing", deployment().property("first"))]);
    /// assert!(matches!(value, Value::Map(ref entries) if entries.contains_key("thing")));
    /// ```
    #[must_use]
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Expression> for Value {
    fn from(value: Expression) -> Self {
        Self::Expression(value)
    }
}

impl From<ResourceRef> for Value {
    fn from(value: ResourceRef) -> Self {
        Self::Resource(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(entries: IndexMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}
