//! Text rendering of expressions and resource references.

use crate::{
    ArmResult, KeyStyle, ResolveOperation,
    registry::{ResourceRef, ResourceRegistry},
};

use super::{Arg, Call, Chain, Expression, Index, Segment};

pub(crate) struct Renderer<'a> {
    style: &'a KeyStyle,
    registry: &'a ResourceRegistry,
}

impl<'a> Renderer<'a> {
    pub(crate) const fn new(style: &'a KeyStyle, registry: &'a ResourceRegistry) -> Self {
        Self { style, registry }
    }

    pub(crate) const fn style(&self) -> &'a KeyStyle {
        self.style
    }

    /// Outermost form: exactly one pair of brackets.
    pub(crate) fn template_string(&self, expression: &Expression) -> ArmResult<String> {
        Ok(format!("[{}]", self.expression(expression)?))
    }

    pub(crate) fn resource_ref(&self, reference: &ResourceRef) -> ArmResult<String> {
        match reference {
            ResourceRef::Literal(text) => Ok(text.clone()),
            ResourceRef::Declared { symbol, operation } => Ok(self
                .registry
                .resolve(symbol, operation.clone())?
                .qualified_name(self.style)),
        }
    }

    fn expression(&self, expression: &Expression) -> ArmResult<String> {
        match expression {
            Expression::Call(call) => self.call(call),
            Expression::Chain(chain) => self.chain(chain),
        }
    }

    fn call(&self, call: &Call) -> ArmResult<String> {
        Ok(format!("{}({})", call.name, self.args(&call.name, &call.args)?))
    }

    fn chain(&self, chain: &Chain) -> ArmResult<String> {
        let mut out = self.expression(&chain.base)?;
        for segment in &chain.segments {
            match segment {
                Segment::Property(key) => {
                    out.push('.');
                    out.push_str(&self.style.render(key));
                }
                Segment::Index(Index::Position(position)) => {
                    out.push_str(&format!("[{position}]"));
                }
                Segment::Index(Index::Name(name)) => {
                    out.push_str(&format!("[{}]", quote(name)));
                }
                Segment::Method { name, args } => {
                    out.push_str(&format!(".{name}({})", self.args(name, args)?));
                }
            }
        }
        Ok(out)
    }

    fn args(&self, function: &str, args: &[Arg]) -> ArmResult<String> {
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                Arg::String(text) => rendered.push(quote(text)),
                Arg::Integer(number) => rendered.push(number.to_string()),
                Arg::Float(number) => rendered.push(number.to_string()),
                Arg::Bool(flag) => rendered.push(flag.to_string()),
                Arg::Name(key) => rendered.push(quote(&self.style.render(key))),
                Arg::Resource(symbol) => {
                    let entry = self
                        .registry
                        .resolve(symbol, ResolveOperation::argument_of(function))?;
                    rendered.push(quote(entry.provider_type()));
                    rendered.push(quote(&entry.rendered_name(self.style)));
                }
                Arg::Expression(nested) => rendered.push(self.expression(nested)?),
            }
        }
        Ok(rendered.join(", "))
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
