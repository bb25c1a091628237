//! Unit tests for expression chaining and rendering.

use rstest::rstest;

use super::{Arg, Expression, Segment};
use crate::{ArmError, CamelStyle, KeyStyle, Value, registry::Symbol};

fn render(expression: &Expression) -> String {
    expression
        .render(&KeyStyle::default())
        .expect("expression renders")
}

#[test]
fn calls_without_arguments_render_empty_parens() {
    let expr = Expression::call("deployment", Vec::<Arg>::new());
    assert_eq!(render(&expr), "[deployment()]");
}

#[test]
fn incremental_and_single_chain_render_identically() {
    let incremental = Expression::call("deployment", Vec::<Arg>::new())
        .property("first")
        .property("second");
    let base = Expression::call("deployment", Vec::<Arg>::new());
    let at_once = base
        .chain(Segment::Property("first".to_owned().into()))
        .chain(Segment::Property("second".to_owned().into()));
    assert_eq!(render(&incremental), "[deployment().first.second]");
    assert_eq!(render(&incremental), render(&at_once));
}

#[test]
fn chaining_extends_a_single_chain() {
    let expr = Expression::call("deployment", Vec::<Arg>::new())
        .property("first")
        .property("second")
        .property("third");
    let Expression::Chain(chain) = &expr else {
        panic!("expected a chain, got {expr:?}");
    };
    assert_eq!(chain.segments().len(), 3);
    assert!(matches!(chain.base(), Expression::Call(call) if call.name() == "deployment"));
}

#[test]
fn nested_expressions_are_bracketed_once() {
    let inner = Expression::call("providers", ["namespace", "type"])
        .property("apiVersion")
        .at(0);
    let expr = Expression::call("int", [inner]);
    assert_eq!(
        render(&expr),
        "[int(providers('namespace', 'type').apiVersion[0])]"
    );
}

#[rstest]
#[case(Arg::from(1), "1")]
#[case(Arg::from(1.5), "1.5")]
#[case(Arg::from(true), "true")]
#[case(Arg::from("it's"), "'it''s'")]
fn scalar_arguments_render_as_literals(#[case] arg: Arg, #[case] expected: &str) {
    let expr = Expression::call("string", [arg]);
    assert_eq!(render(&expr), format!("[string({expected})]"));
}

#[test]
fn method_links_render_with_arguments() {
    let expr = Expression::call("deployment", Vec::<Arg>::new())
        .property("properties")
        .method("index", [1]);
    assert_eq!(render(&expr), "[deployment().properties.index(1)]");
}

#[test]
fn named_index_links_are_quoted() {
    let expr = Expression::call("reference", ["thing"]).at("key");
    assert_eq!(render(&expr), "[reference('thing')['key']]");
}

#[test]
fn property_keys_follow_key_style() {
    let expr = Expression::call("reference", ["stack"]).property_key("output_name");
    let leading = KeyStyle::new(true, CamelStyle::Leading);
    assert_eq!(
        expr.render(&leading).expect("renders"),
        "[reference('stack').OutputName]"
    );
}

#[rstest]
#[case(Value::list([1, 2]), "sequences")]
#[case(Value::map([("a", 1)]), "mappings")]
#[case(Value::Null, "null")]
fn try_call_rejects_structured_values(#[case] value: Value, #[case] fragment: &str) {
    let err = Expression::try_call("concat", [Value::from("a"), value])
        .expect_err("structured values are not arguments");
    match err {
        ArmError::MalformedArgument { function, reason } => {
            assert_eq!(function, "concat");
            assert!(reason.contains(fragment), "unexpected reason: {reason}");
        }
        other => panic!("expected MalformedArgument, got {other:?}"),
    }
}

#[test]
fn try_call_accepts_scalars_and_expressions() {
    let nested = Expression::call("parameters", ["one"]);
    let expr = Expression::try_call("add", [Value::from(nested), Value::from(2)])
        .expect("scalars are arguments");
    assert_eq!(render(&expr), "[add(parameters('one'), 2)]");
}

#[test]
fn standalone_render_cannot_resolve_resources() {
    let expr = Expression::call("resourceId", [Symbol::new("web_servers")]);
    let err = expr
        .render(&KeyStyle::default())
        .expect_err("no registry to resolve against");
    assert_eq!(err.unresolved_name(), Some("web_servers"));
}
