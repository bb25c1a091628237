//! Immutable intrinsic function expressions.
//!
//! An [`Expression`] is either a function [`Call`] or a [`Chain`] of
//! property, index and method links hanging off a call. Every chaining
//! method consumes the receiver and returns a new expression, so the value
//! finally assigned to a leaf is the complete chain. Text is produced only
//! at dump time, where the outermost expression of a leaf is wrapped in a
//! single pair of brackets.

mod arg;
pub(crate) mod render;

use crate::{ArmResult, KeyStyle, naming::Key, registry::ResourceRegistry, value::Value};

pub use arg::Arg;

use render::Renderer;

/// A function call such as `concat('a', 'b')`.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    name: String,
    args: Vec<Arg>,
}

impl Call {
    /// Canonical function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments in call order.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

/// An index used in a `[...]` chain link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Index {
    /// Numeric position, rendered bare.
    Position(i64),
    /// Property name, rendered single-quoted.
    Name(String),
}

impl From<i32> for Index {
    fn from(value: i32) -> Self {
        Self::Position(i64::from(value))
    }
}

impl From<i64> for Index {
    fn from(value: i64) -> Self {
        Self::Position(value)
    }
}

impl From<&str> for Index {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

/// One link of a chain.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// `.name`
    Property(Key),
    /// `[index]`
    Index(Index),
    /// `.name(args)`
    Method {
        /// Method name, emitted verbatim.
        name: String,
        /// Method arguments.
        args: Vec<Arg>,
    },
}

/// Accesses appended to a base call, for example
/// `providers('namespace', 'type').apiVersion[0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    base: Box<Expression>,
    segments: Vec<Segment>,
}

impl Chain {
    /// The expression the links are appended to.
    #[must_use]
    pub fn base(&self) -> &Expression {
        &self.base
    }

    /// Links in the order they were appended.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// An intrinsic function expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// A function call.
    Call(Call),
    /// Links appended to a prior expression.
    Chain(Chain),
}

impl Expression {
    /// Build a call of `name` with `args`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::{Expression, KeyStyle};
    /// let expr = Expression::call("concat", ["string1", "string2"]);
    /// assert_eq!(
    ///     expr.render(&KeyStyle::default()).ok().as_deref(),
    ///     Some("[concat('string1', 'string2')]")
    /// );
    /// ```
    #[must_use]
    pub fn call<I>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::Call(Call {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// Build a call from untyped values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArmError::MalformedArgument`] when any value is a
    /// sequence, a mapping or `null`.
    pub fn try_call<I>(name: impl Into<String>, values: I) -> ArmResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let name = name.into();
        let args = values
            .into_iter()
            .map(|value| Arg::from_value(&name, value))
            .collect::<ArmResult<Vec<_>>>()?;
        Ok(Self::Call(Call { name, args }))
    }

    /// Append `segment`, returning the extended expression.
    #[must_use]
    pub fn chain(self, segment: Segment) -> Self {
        match self {
            Self::Chain(mut chain) => {
                chain.segments.push(segment);
                Self::Chain(chain)
            }
            call @ Self::Call(_) => Self::Chain(Chain {
                base: Box::new(call),
                segments: vec![segment],
            }),
        }
    }

    /// Append `.name`, emitted exactly as written.
    #[must_use]
    pub fn property(self, name: impl Into<String>) -> Self {
        self.chain(Segment::Property(Key::Verbatim(name.into())))
    }

    /// Append `.name` where `name` is converted with the template's key style.
    #[must_use]
    pub fn property_key(self, name: impl Into<Key>) -> Self {
        self.chain(Segment::Property(name.into()))
    }

    /// Append `[index]`.
    #[must_use]
    pub fn at(self, index: impl Into<Index>) -> Self {
        self.chain(Segment::Index(index.into()))
    }

    /// Append `.name(args)`.
    #[must_use]
    pub fn method<I>(self, name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain(Segment::Method {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// Render as a bracketed template string without a resource registry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArmError::ResourceNotFound`] if the expression refers
    /// to a declared resource, since none can be resolved here.
    pub fn render(&self, style: &KeyStyle) -> ArmResult<String> {
        let registry = ResourceRegistry::new();
        Renderer::new(style, &registry).template_string(self)
    }
}

#[cfg(test)]
mod tests;
