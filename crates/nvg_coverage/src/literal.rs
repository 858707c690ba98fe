//! Literal formatting for generated call sites.
//!
//! Every literal that lands in a generated program goes through a
//! [`LiteralStyle`], including the fixed coordinates and colors used by the
//! snippet templates. [`CStyle`] is what the NanoVG harness consumes;
//! [`RustStyle`] targets bindings that take `f32` arguments.

use crate::registry::ParamValue;

/// Target-language rules for rendering literals and statements.
pub trait LiteralStyle {
    /// Marker appended to floating-point literals.
    fn float_suffix(&self) -> &str;

    /// Literal for an absent pointer/optional argument.
    fn null_literal(&self) -> &str;

    fn statement_terminator(&self) -> &str {
        ";"
    }

    fn int_literal(&self, value: i64) -> String {
        value.to_string()
    }

    fn float_literal(&self, value: f64) -> String {
        format!("{}{}", decimal_text(value), self.float_suffix())
    }

    /// Symbolic tokens are emitted exactly as authored.
    fn symbol(&self, token: &str) -> String {
        token.to_string()
    }

    fn string_literal(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('"');
        for ch in text.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                other => out.push(other),
            }
        }
        out.push('"');
        out
    }

    fn format(&self, value: &ParamValue) -> String {
        match value {
            ParamValue::Int(value) => self.int_literal(*value),
            ParamValue::Float(value) => self.float_literal(*value),
            ParamValue::Symbol(token) => self.symbol(token),
        }
    }
}

/// C99 literals: `0.25f`, `NULL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CStyle;

impl LiteralStyle for CStyle {
    fn float_suffix(&self) -> &str {
        "f"
    }

    fn null_literal(&self) -> &str {
        "NULL"
    }
}

/// Rust literals: `0.25_f32`, `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RustStyle;

impl LiteralStyle for RustStyle {
    fn float_suffix(&self) -> &str {
        "_f32"
    }

    fn null_literal(&self) -> &str {
        "None"
    }
}

/// Formats a value for the C harness.
#[must_use]
pub fn format_value(value: &ParamValue) -> String {
    CStyle.format(value)
}

/// Shortest round-trip decimal text; integral values keep a trailing `.0`.
fn decimal_text(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::{CStyle, LiteralStyle, RustStyle, format_value};
    use crate::registry::ParamValue;

    #[test]
    fn integers_render_without_suffix() {
        assert_eq!(format_value(&ParamValue::Int(100)), "100");
        assert_eq!(format_value(&ParamValue::Int(-50)), "-50");
        assert_eq!(format_value(&ParamValue::Int(0)), "0");
    }

    #[test]
    fn floats_render_with_suffix_and_decimal_point() {
        assert_eq!(format_value(&ParamValue::Float(0.0)), "0.0f");
        assert_eq!(format_value(&ParamValue::Float(0.25)), "0.25f");
        assert_eq!(format_value(&ParamValue::Float(1.0)), "1.0f");
        assert_eq!(format_value(&ParamValue::Float(-0.5)), "-0.5f");
        assert_eq!(format_value(&ParamValue::Float(0.785)), "0.785f");
        assert_eq!(format_value(&ParamValue::Float(100.0)), "100.0f");
    }

    #[test]
    fn symbols_pass_through_unchanged() {
        let token = "NVG_ALIGN_LEFT | NVG_ALIGN_TOP";
        assert_eq!(format_value(&ParamValue::Symbol(token.to_string())), token);
        assert_eq!(format_value(&ParamValue::symbol("NVG_CW")), "NVG_CW");
    }

    #[test]
    fn rust_style_swaps_suffix_and_null() {
        assert_eq!(RustStyle.format(&ParamValue::Float(2.0)), "2.0_f32");
        assert_eq!(RustStyle.format(&ParamValue::Int(3)), "3");
        assert_eq!(RustStyle.null_literal(), "None");
        assert_eq!(CStyle.null_literal(), "NULL");
    }

    #[test]
    fn string_literals_are_escaped() {
        assert_eq!(CStyle.string_literal("sans"), "\"sans\"");
        assert_eq!(CStyle.string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
