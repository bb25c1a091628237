//! Builders for Azure Resource Manager intrinsic functions.
//!
//! Every builder is a pure constructor returning an [`Expression`] named
//! with the provider's canonical casing, so `to_lower` builds `toLower(...)`.
//! Builders taking a variable number of arguments accept anything iterable;
//! mix argument types with [`Arg::from`].
//!
//! ```
//! use armtree::{KeyStyle, functions::{add, int, parameters, providers}};
//!
//! let expr = add(
//!     int(parameters("first_value")),
//!     int(providers(["namespace", "type"]).property("apiVersion").at(0)),
//! );
//! let expected = concat!(
//!     "[add(int(parameters('firstValue')), ",
//!     "int(providers('namespace', 'type').apiVersion[0]))]",
//! );
//! assert_eq!(expr.render(&KeyStyle::default()).ok().as_deref(), Some(expected));
//! ```

use crate::{
    ResolveOperation,
    expression::{Arg, Expression},
    naming::Key,
    registry::ResourceRef,
    value::Value,
};

fn unary(name: &str, arg: impl Into<Arg>) -> Expression {
    Expression::call(name, [arg.into()])
}

fn binary(name: &str, left: impl Into<Arg>, right: impl Into<Arg>) -> Expression {
    Expression::call(name, [left.into(), right.into()])
}

fn nullary(name: &str) -> Expression {
    Expression::call(name, Vec::<Arg>::new())
}

/// `add(left, right)`
#[must_use]
pub fn add(left: impl Into<Arg>, right: impl Into<Arg>) -> Expression {
    binary("add", left, right)
}

/// `sub(left, right)`
#[must_use]
pub fn sub(left: impl Into<Arg>, right: impl Into<Arg>) -> Expression {
    binary("sub", left, right)
}

/// `mul(left, right)`
#[must_use]
pub fn mul(left: impl Into<Arg>, right: impl Into<Arg>) -> Expression {
    binary("mul", left, right)
}

/// `div(left, right)`
#[must_use]
pub fn div(left: impl Into<Arg>, right: impl Into<Arg>) -> Expression {
    binary("div", left, right)
}

/// `mod(left, right)`
#[must_use]
pub fn modulo(left: impl Into<Arg>, right: impl Into<Arg>) -> Expression {
    binary("mod", left, right)
}

/// `concat(args...)`
#[must_use]
pub fn concat<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("concat", args)
}

/// `base64(value)`
#[must_use]
pub fn base64(value: impl Into<Arg>) -> Expression {
    unary("base64", value)
}

/// `string(value)`
#[must_use]
pub fn string(value: impl Into<Arg>) -> Expression {
    unary("string", value)
}

/// `int(value)`
#[must_use]
pub fn int(value: impl Into<Arg>) -> Expression {
    unary("int", value)
}

/// `length(value)`
#[must_use]
pub fn length(value: impl Into<Arg>) -> Expression {
    unary("length", value)
}

/// `replace(args...)`
#[must_use]
pub fn replace<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("replace", args)
}

/// `split(value, delimiter)`
#[must_use]
pub fn split(value: impl Into<Arg>, delimiter: impl Into<Arg>) -> Expression {
    binary("split", value, delimiter)
}

/// `substring(value, start, length)`; trailing arguments are optional.
#[must_use]
pub fn substring<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("substring", args)
}

/// `toLower(value)`
#[must_use]
pub fn to_lower(value: impl Into<Arg>) -> Expression {
    unary("toLower", value)
}

/// `toUpper(value)`
#[must_use]
pub fn to_upper(value: impl Into<Arg>) -> Expression {
    unary("toUpper", value)
}

/// `trim(value)`
#[must_use]
pub fn trim(value: impl Into<Arg>) -> Expression {
    unary("trim", value)
}

/// `uniqueString(args...)`
#[must_use]
pub fn unique_string<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("uniqueString", args)
}

/// `uri(base, relative)`
#[must_use]
pub fn uri(base: impl Into<Arg>, relative: impl Into<Arg>) -> Expression {
    binary("uri", base, relative)
}

/// `padLeft(value, width, padding)`; the padding character is optional.
#[must_use]
pub fn pad_left<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("padLeft", args)
}

/// `copyIndex(offset)`; pass an empty iterator for `copyIndex()`.
#[must_use]
pub fn copy_index<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("copyIndex", args)
}

/// `deployment()`
#[must_use]
pub fn deployment() -> Expression {
    nullary("deployment")
}

/// `parameters('name')`, converting `name` with the template's key style.
#[must_use]
pub fn parameters(name: impl Into<Key>) -> Expression {
    unary("parameters", Arg::Name(name.into()))
}

/// `variables('name')`, converting `name` with the template's key style.
#[must_use]
pub fn variables(name: impl Into<Key>) -> Expression {
    unary("variables", Arg::Name(name.into()))
}

/// `listKeys(resource, apiVersion)`
#[must_use]
pub fn list_keys<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("listKeys", args)
}

/// `providers(namespace, type)`
#[must_use]
pub fn providers<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("providers", args)
}

/// `reference(resource, apiVersion)`
#[must_use]
pub fn reference<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("reference", args)
}

/// `resourceGroup()`
#[must_use]
pub fn resource_group() -> Expression {
    nullary("resourceGroup")
}

/// `resourceId(args...)`.
///
/// A [`crate::Symbol`] argument names a declared resource and expands to its
/// provider type and rendered name when the template is dumped.
///
/// ```
/// use armtree::{KeyStyle, functions::resource_id};
/// let expr = resource_id(["group", "type", "name"]);
/// assert_eq!(
///     expr.render(&KeyStyle::default()).ok().as_deref(),
///     Some("[resourceId('group', 'type', 'name')]")
/// );
/// ```
#[must_use]
pub fn resource_id<I>(args: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Expression::call("resourceId", args)
}

/// `resourceId('type/name')` built from separate type and name parts.
#[must_use]
pub fn direct_resource_id(provider_type: &str, name: &str) -> Expression {
    unary("resourceId", format!("{provider_type}/{name}"))
}

/// `subscription()`
#[must_use]
pub fn subscription() -> Expression {
    nullary("subscription")
}

/// `reference('stack').outputs.output.value`.
///
/// Both names are converted with the template's key style unless wrapped in
/// [`crate::NoHump`].
#[must_use]
pub fn stack_output(stack: impl Into<Key>, output: impl Into<Key>) -> Expression {
    unary("reference", Arg::Name(stack.into()))
        .property("outputs")
        .property_key(output)
        .property("value")
}

/// A `dependsOn` list.
///
/// String entries are literal `type/name` pairs; [`crate::Symbol`] entries
/// are resolved against the template's declared resources at dump time and
/// report [`ResolveOperation::DependsOn`] when the name is never declared.
#[must_use]
pub fn depends_on<I>(refs: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<ResourceRef>,
{
    Value::list(refs.into_iter().map(|reference| {
        Into::<ResourceRef>::into(reference).recorded_by(ResolveOperation::DependsOn)
    }))
}
