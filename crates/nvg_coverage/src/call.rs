//! Call expressions against the harness API.

use crate::literal::LiteralStyle;
use crate::registry::{ParamValue, ParameterSet};

/// Name of the rendering context variable in the program skeleton.
pub const CONTEXT_ARG: &str = "vg";

/// One argument at a call site.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// The implicit rendering context.
    Context,
    Value(ParamValue),
    /// A nested call used as a value, e.g. `nvgRGBA(...)`.
    Call(CallExpr),
    Str(String),
    Null,
}

impl Arg {
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::Value(ParamValue::Int(value))
    }

    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Value(ParamValue::Float(value))
    }

    #[must_use]
    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    fn render(&self, style: &dyn LiteralStyle) -> String {
        match self {
            Self::Context => CONTEXT_ARG.to_string(),
            Self::Value(value) => style.format(value),
            Self::Call(call) => call.render_expr(style),
            Self::Str(text) => style.string_literal(text),
            Self::Null => style.null_literal().to_string(),
        }
    }
}

/// A function invocation with positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function: String,
    pub args: Vec<Arg>,
}

impl CallExpr {
    #[must_use]
    pub fn new(function: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }

    /// Call on the rendering context: `function(vg, args...)`.
    #[must_use]
    pub fn on_context(function: impl Into<String>, args: Vec<Arg>) -> Self {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Arg::Context);
        all.extend(args);
        Self::new(function, all)
    }

    /// Expression form, without terminator.
    #[must_use]
    pub fn render_expr(&self, style: &dyn LiteralStyle) -> String {
        let args = self
            .args
            .iter()
            .map(|arg| arg.render(style))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({args})", self.function)
    }

    /// Statement form, terminated for a statement list.
    #[must_use]
    pub fn render(&self, style: &dyn LiteralStyle) -> String {
        format!("{}{}", self.render_expr(style), style.statement_terminator())
    }
}

/// Invocation of a registry function: the context followed by every value in
/// parameter-set order.
#[must_use]
pub fn synthesize(function: &str, params: &ParameterSet) -> CallExpr {
    CallExpr::on_context(
        function,
        params.iter().cloned().map(Arg::Value).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::{Arg, CallExpr, synthesize};
    use crate::literal::{CStyle, RustStyle};
    use crate::registry::{ParamValue, ParameterSet};

    #[test]
    fn empty_parameter_set_has_only_context() {
        let call = synthesize("nvgSave", &ParameterSet::empty());
        assert_eq!(call.render(&CStyle), "nvgSave(vg);");
        assert_eq!(call.args, vec![Arg::Context]);
    }

    #[test]
    fn values_follow_context_in_order() {
        let params = ParameterSet::new(vec![
            ParamValue::Int(100),
            ParamValue::Int(100),
            ParamValue::Int(50),
            ParamValue::Int(0),
            ParamValue::Float(2.5),
            ParamValue::symbol("NVG_CW"),
        ]);
        let call = synthesize("nvgArc", &params);
        assert_eq!(
            call.render(&CStyle),
            "nvgArc(vg, 100, 100, 50, 0, 2.5f, NVG_CW);"
        );
    }

    #[test]
    fn float_argument_gets_style_suffix() {
        let params = ParameterSet::new(vec![ParamValue::Float(0.0)]);
        let call = synthesize("nvgGlobalAlpha", &params);
        assert_eq!(call.render(&CStyle), "nvgGlobalAlpha(vg, 0.0f);");
        assert_eq!(call.render(&RustStyle), "nvgGlobalAlpha(vg, 0.0_f32);");
    }

    #[test]
    fn nested_calls_strings_and_null_render() {
        let color = CallExpr::new(
            "nvgRGBA",
            vec![Arg::int(255), Arg::int(192), Arg::int(0), Arg::int(255)],
        );
        let fill = CallExpr::on_context("nvgFillColor", vec![Arg::Call(color)]);
        assert_eq!(
            fill.render(&CStyle),
            "nvgFillColor(vg, nvgRGBA(255, 192, 0, 255));"
        );

        let text = CallExpr::on_context(
            "nvgText",
            vec![Arg::int(100), Arg::int(300), Arg::str("Test Text"), Arg::Null],
        );
        assert_eq!(
            text.render(&CStyle),
            "nvgText(vg, 100, 300, \"Test Text\", NULL);"
        );
    }
}
