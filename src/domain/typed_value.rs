// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed interpretation of raw configuration strings.
//!
//! Providers hand over loosely-typed strings. This module turns them into a
//! [`TypedValue`] using a fixed, permissive chain of parse attempts and renders
//! the result as a `key = literal` line for the application configuration.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitudes outside `[SCI_LOWER, SCI_UPPER)` render in exponent form.
const SCI_LOWER: f64 = 1e-7;
const SCI_UPPER: f64 = 1e16;

/// The typed form of a raw configuration value.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::TypedValue;
///
/// assert_eq!(TypedValue::infer(" 42 "), TypedValue::Integer(42));
/// assert_eq!(TypedValue::infer("TRUE"), TypedValue::Bool(true));
/// assert_eq!(
///     TypedValue::infer("hello"),
///     TypedValue::QuotedString("\"hello\"".to_string())
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    /// The `null` literal.
    Null,
    /// A boolean literal.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// Plain text wrapped in double quotes, quotes included.
    QuotedString(String),
    /// An array, object or quoted literal passed through verbatim.
    RawLiteral(String),
}

impl TypedValue {
    /// Infers the typed form of a raw value.
    ///
    /// The value is trimmed, then classified by the first rule that matches:
    ///
    /// 1. starts with `"`, `[` or `{`: [`TypedValue::RawLiteral`]
    /// 2. `null` (any case): [`TypedValue::Null`]
    /// 3. `true` / `false` (any case): [`TypedValue::Bool`]
    /// 4. parses as `i64`: [`TypedValue::Integer`]
    /// 5. parses as a finite `f64`: [`TypedValue::Float`]
    /// 6. anything else: [`TypedValue::QuotedString`]
    ///
    /// Inference never fails; unparseable text ends up quoted.
    pub fn infer(raw: &str) -> Self {
        let value = raw.trim();

        if value.starts_with(['"', '[', '{']) {
            return TypedValue::RawLiteral(value.to_string());
        }
        if value.eq_ignore_ascii_case("null") {
            return TypedValue::Null;
        }
        if value.eq_ignore_ascii_case("true") {
            return TypedValue::Bool(true);
        }
        if value.eq_ignore_ascii_case("false") {
            return TypedValue::Bool(false);
        }
        if let Ok(n) = value.parse::<i64>() {
            return TypedValue::Integer(n);
        }
        // "inf", "nan" and overflowing exponents read better as text
        if let Ok(f) = value.parse::<f64>() {
            if f.is_finite() {
                return TypedValue::Float(f);
            }
        }

        TypedValue::QuotedString(format!("\"{}\"", value))
    }

    /// Infers the typed form of an optional raw value.
    ///
    /// Returns [`ConfigError::MalformedValue`] when no value is supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use remoteconf::domain::TypedValue;
    ///
    /// assert_eq!(TypedValue::try_infer(Some("null")).unwrap(), TypedValue::Null);
    /// assert!(TypedValue::try_infer(None).is_err());
    /// ```
    pub fn try_infer(raw: Option<&str>) -> Result<Self> {
        raw.map(Self::infer).ok_or_else(|| ConfigError::MalformedValue {
            message: "no value supplied".to_string(),
        })
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Null => write!(f, "null"),
            TypedValue::Bool(b) => write!(f, "{}", b),
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Float(x) => write!(f, "{}", float_literal(*x)),
            TypedValue::QuotedString(s) | TypedValue::RawLiteral(s) => write!(f, "{}", s),
        }
    }
}

/// Formats a float so that it reads back as a float, never as an integer.
fn float_literal(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(SCI_LOWER..SCI_UPPER).contains(&magnitude) {
        let text = format!("{:e}", x);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{}.0e{}", mantissa, exponent)
            }
            _ => text,
        };
    }

    let text = x.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Renders one configuration assignment line: `<key> = <literal>\n`.
///
/// The key is written as given, without escaping.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::{render, TypedValue};
///
/// assert_eq!(render("app.port", &TypedValue::Integer(8080)), "app.port = 8080\n");
/// assert_eq!(render("app.debug", &TypedValue::infer("False")), "app.debug = false\n");
/// ```
pub fn render(key: &str, value: &TypedValue) -> String {
    format!("{} = {}\n", key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_raw_literals() {
        for raw in ["\"quoted\"", "[1, 2, 3]", "{ a = 1 }", "\"unterminated"] {
            assert_eq!(TypedValue::infer(raw), TypedValue::RawLiteral(raw.to_string()));
        }
    }

    #[test]
    fn test_infer_raw_literal_is_trimmed() {
        assert_eq!(
            TypedValue::infer("  [1,2]  "),
            TypedValue::RawLiteral("[1,2]".to_string())
        );
    }

    #[test]
    fn test_infer_null_any_case() {
        for raw in ["null", "NULL", "Null", " nUlL "] {
            assert_eq!(TypedValue::infer(raw), TypedValue::Null, "Failed for value: {}", raw);
        }
    }

    #[test]
    fn test_infer_bool_any_case() {
        assert_eq!(TypedValue::infer("true"), TypedValue::Bool(true));
        assert_eq!(TypedValue::infer("TRUE"), TypedValue::Bool(true));
        assert_eq!(TypedValue::infer("False"), TypedValue::Bool(false));
    }

    #[test]
    fn test_infer_keywords_match_ascii_case_only() {
        // U+017F LATIN SMALL LETTER LONG S folds to 's' under Unicode rules
        assert_eq!(
            TypedValue::infer("fal\u{17f}e"),
            TypedValue::QuotedString("\"fal\u{17f}e\"".to_string())
        );
    }

    #[test]
    fn test_infer_bool_rejects_aliases() {
        assert_eq!(
            TypedValue::infer("yes"),
            TypedValue::QuotedString("\"yes\"".to_string())
        );
        assert_eq!(TypedValue::infer("1"), TypedValue::Integer(1));
    }

    #[test]
    fn test_infer_integer() {
        assert_eq!(TypedValue::infer("42"), TypedValue::Integer(42));
        assert_eq!(TypedValue::infer("-42"), TypedValue::Integer(-42));
        assert_eq!(TypedValue::infer("+7"), TypedValue::Integer(7));
        assert_eq!(
            TypedValue::infer("9223372036854775807"),
            TypedValue::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_infer_integer_overflow_falls_back_to_float() {
        assert_eq!(
            TypedValue::infer("9223372036854775808"),
            TypedValue::Float(9223372036854775808.0)
        );
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(TypedValue::infer("3.14"), TypedValue::Float(3.14));
        assert_eq!(TypedValue::infer("-0.5"), TypedValue::Float(-0.5));
        assert_eq!(TypedValue::infer("1e3"), TypedValue::Float(1000.0));
    }

    #[test]
    fn test_infer_non_finite_is_quoted() {
        assert_eq!(
            TypedValue::infer("inf"),
            TypedValue::QuotedString("\"inf\"".to_string())
        );
        assert_eq!(
            TypedValue::infer("NaN"),
            TypedValue::QuotedString("\"NaN\"".to_string())
        );
        assert_eq!(
            TypedValue::infer("1e400"),
            TypedValue::QuotedString("\"1e400\"".to_string())
        );
    }

    #[test]
    fn test_infer_fallback_quotes_without_escaping() {
        assert_eq!(
            TypedValue::infer("  hello world "),
            TypedValue::QuotedString("\"hello world\"".to_string())
        );
        assert_eq!(
            TypedValue::infer("say \"hi\""),
            TypedValue::QuotedString("\"say \"hi\"\"".to_string())
        );
        assert_eq!(
            TypedValue::infer("12abc"),
            TypedValue::QuotedString("\"12abc\"".to_string())
        );
    }

    #[test]
    fn test_infer_empty_string() {
        assert_eq!(
            TypedValue::infer("   "),
            TypedValue::QuotedString("\"\"".to_string())
        );
    }

    #[test]
    fn test_try_infer() {
        assert_eq!(TypedValue::try_infer(Some("5")).unwrap(), TypedValue::Integer(5));
        let err = TypedValue::try_infer(None).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedValue { .. }));
    }

    #[test]
    fn test_display_literals() {
        assert_eq!(TypedValue::Null.to_string(), "null");
        assert_eq!(TypedValue::Bool(false).to_string(), "false");
        assert_eq!(TypedValue::Integer(-3).to_string(), "-3");
        assert_eq!(TypedValue::Float(2.5).to_string(), "2.5");
        assert_eq!(TypedValue::Float(1000.0).to_string(), "1000.0");
        assert_eq!(TypedValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(TypedValue::RawLiteral("[1]".to_string()).to_string(), "[1]");
    }

    #[test]
    fn test_display_extreme_floats_use_exponent() {
        assert_eq!(TypedValue::Float(1.5e300).to_string(), "1.5e300");
        assert_eq!(TypedValue::Float(-2.5e-10).to_string(), "-2.5e-10");
        assert_eq!(TypedValue::Float(1e16).to_string(), "1.0e16");
        assert_eq!(TypedValue::Float(1e-8).to_string(), "1.0e-8");
        assert_eq!(TypedValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(TypedValue::Float(1e-7).to_string(), "0.0000001");
        assert_eq!(TypedValue::Float(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_exponent_form_is_reinferred_as_float() {
        for x in [1.5e300, -2.5e-10, 1e16, 1e-8, f64::MAX, f64::MIN_POSITIVE] {
            let literal = TypedValue::Float(x).to_string();
            assert_eq!(TypedValue::infer(&literal), TypedValue::Float(x), "literal: {}", literal);
        }
    }

    #[test]
    fn test_render_line() {
        assert_eq!(render("a.b", &TypedValue::Null), "a.b = null\n");
        assert_eq!(
            render("name", &TypedValue::infer("demo")),
            "name = \"demo\"\n"
        );
        assert_eq!(
            render("list", &TypedValue::infer("[1, 2]")),
            "list = [1, 2]\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let value = TypedValue::infer("3.5");
        assert_eq!(render("k", &value), render("k", &value));
    }

    #[test]
    fn test_rendered_float_is_reinferred_as_float() {
        let value = TypedValue::infer("1e3");
        let literal = value.to_string();
        assert_eq!(TypedValue::infer(&literal), value);
    }
}
