//! Arguments accepted by intrinsic function calls.

use super::Expression;
use crate::{
    ArmError, ArmResult,
    naming::{Key, NoHump},
    registry::{ResourceRef, Symbol},
    value::Value,
};

/// A single argument of an intrinsic function call.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// A string literal, rendered single-quoted.
    String(String),
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal.
    Float(f64),
    /// A boolean literal.
    Bool(bool),
    /// A name converted with the template's key style, rendered as a string.
    Name(Key),
    /// A declared resource, rendered as its provider type and name.
    ///
    /// A failed lookup reports [`crate::ResolveOperation::argument_of`] the
    /// receiving function.
    Resource(Symbol),
    /// A nested expression, rendered without brackets.
    Expression(Expression),
}

impl Arg {
    /// Convert an untyped value into an argument of `function`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::MalformedArgument`] for `null`, sequences and
    /// mappings, none of which can appear inside an expression.
    pub fn from_value(function: &str, value: Value) -> ArmResult<Self> {
        match value {
            Value::Bool(flag) => Ok(Self::Bool(flag)),
            Value::Integer(number) => Ok(Self::Integer(number)),
            Value::Float(number) => Ok(Self::Float(number)),
            Value::String(text) => Ok(Self::String(text)),
            Value::Expression(expression) => Ok(Self::Expression(expression)),
            Value::Resource(ResourceRef::Literal(text)) => Ok(Self::String(text)),
            Value::Resource(ResourceRef::Declared { symbol, .. }) => Ok(Self::Resource(symbol)),
            Value::Null => Err(ArmError::malformed_argument(
                function,
                "null is not a valid argument",
            )),
            Value::List(_) => Err(ArmError::malformed_argument(
                function,
                "sequences are not valid arguments",
            )),
            Value::Map(_) => Err(ArmError::malformed_argument(
                function,
                "mappings are not valid arguments",
            )),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Key> for Arg {
    fn from(value: Key) -> Self {
        Self::Name(value)
    }
}

impl From<NoHump> for Arg {
    fn from(value: NoHump) -> Self {
        Self::Name(value.into())
    }
}

impl From<Symbol> for Arg {
    fn from(value: Symbol) -> Self {
        Self::Resource(value)
    }
}

impl From<Expression> for Arg {
    fn from(value: Expression) -> Self {
        Self::Expression(value)
    }
}
