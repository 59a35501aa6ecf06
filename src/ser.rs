//! Literal rendering.
//!
//! This module writes a [`Value`] back out in the literal syntax the parser
//! reads. Parsing the output with
//! [`ParseOptions::with_unescape`](crate::ParseOptions::with_unescape) gives
//! back the value for every container the syntax can express:
//!
//! - text is single-quoted, or double-quoted when it contains a `'` but no `"`
//! - inside text, the chosen quote character and `\` are escaped with a
//!   backslash
//! - timestamps and durations are written as quoted text
//! - floats always carry a decimal point (`1.0`, `1.0e20`)
//! - complex numbers are written without parentheses (`1.0+2.0j`)
//! - one-element tuples keep their trailing comma (`(5,)`)
//!
//! Negative integers, non-finite floats and text that itself reads as a
//! number, boolean, date or container are rendered faithfully but come back
//! as different values, since the literal syntax has no way to mark them.
//! With the default options the escapes are kept as written, so text holding
//! a backslash, or both quote characters, comes back with its backslashes.
//!
//! ## Examples
//!
//! ```rust
//! use reprlit::{parse, parse_with_options, to_string, ParseOptions, Value};
//!
//! let value = parse("[1, (2,), {'a': 'b c'}]");
//! assert_eq!(to_string(&value), "[1, (2,), {'a': 'b c'}]");
//!
//! let tricky = Value::Sequence(vec![Value::from("it's \"x\""), Value::from("a\\")]);
//! let rendered = to_string(&tricky);
//! assert_eq!(rendered, r#"['it\'s "x"', 'a\\']"#);
//! let options = ParseOptions::new().with_unescape(true);
//! assert_eq!(parse_with_options(&rendered, &options), tricky);
//! ```

use crate::{Key, Value};
use std::fmt::{self, Write};

/// Render a value as literal text.
///
/// # Examples
///
/// ```rust
/// use reprlit::{to_string, Duration, Value};
///
/// let value = Value::Sequence(vec![Value::from(2.5), Duration::new(0, 1, 2, 3).into()]);
/// assert_eq!(to_string(&value), "[2.5, '1:02:03']");
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_value(&mut out, value);
    out
}

pub(crate) fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Text(s) => write_text(out, s),
        Value::Integer(i) => write!(out, "{}", i),
        Value::Float(f) => write_float(out, *f),
        Value::Complex(c) => {
            write_float(out, c.re)?;
            out.write_char(if c.im.is_sign_negative() { '-' } else { '+' })?;
            write_float(out, c.im.abs())?;
            out.write_char('j')
        }
        Value::Boolean(true) => out.write_str("True"),
        Value::Boolean(false) => out.write_str("False"),
        Value::Timestamp(ts) => write_text(out, &ts.to_string()),
        Value::Duration(d) => write_text(out, &d.to_string()),
        Value::Sequence(items) => write_items(out, '[', ']', items, false),
        Value::FixedTuple(items) => write_items(out, '(', ')', items, items.len() == 1),
        Value::Mapping(map) => {
            out.write_char('{')?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_key(out, key)?;
                out.write_str(": ")?;
                write_value(out, value)?;
            }
            out.write_char('}')
        }
    }
}

pub(crate) fn write_key<W: Write>(out: &mut W, key: &Key) -> fmt::Result {
    match key {
        Key::Text(s) => write_text(out, s),
        Key::Tuple(items) => {
            out.write_char('(')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_key(out, item)?;
            }
            if items.len() == 1 {
                out.write_char(',')?;
            }
            out.write_char(')')
        }
        scalar => write_value(out, &Value::from(scalar.clone())),
    }
}

fn write_items<W: Write>(
    out: &mut W,
    open: char,
    close: char,
    items: &[Value],
    trailing_comma: bool,
) -> fmt::Result {
    out.write_char(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_value(out, item)?;
    }
    if trailing_comma {
        out.write_char(',')?;
    }
    out.write_char(close)
}

fn write_text<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for ch in s.chars() {
        if ch == quote || ch == '\\' {
            out.write_char('\\')?;
        }
        out.write_char(ch)?;
    }
    out.write_char(quote)
}

fn write_float<W: Write>(out: &mut W, f: f64) -> fmt::Result {
    if !f.is_finite() {
        return write!(out, "{}", f);
    }
    let repr = format!("{:?}", f);
    match repr.find('e') {
        Some(exp) if !repr[..exp].contains('.') => {
            write!(out, "{}.0{}", &repr[..exp], &repr[exp..])
        }
        _ => out.write_str(&repr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complex, LiteralMap};

    #[test]
    fn test_floats_keep_decimal_point() {
        assert_eq!(to_string(&Value::Float(1.0)), "1.0");
        assert_eq!(to_string(&Value::Float(0.25)), "0.25");
        assert_eq!(to_string(&Value::Float(1e20)), "1.0e20");
        assert_eq!(to_string(&Value::Float(1.5e-7)), "1.5e-7");
        assert_eq!(to_string(&Value::Float(f64::INFINITY)), "inf");
    }

    #[test]
    fn test_complex_has_no_parentheses() {
        assert_eq!(to_string(&Value::Complex(Complex::new(1.0, 2.0))), "1.0+2.0j");
        assert_eq!(to_string(&Value::Complex(Complex::new(0.5, -3.0))), "0.5-3.0j");
    }

    #[test]
    fn test_text_quote_selection() {
        assert_eq!(to_string(&Value::from("soap")), "'soap'");
        assert_eq!(to_string(&Value::from("day's")), "\"day's\"");
        assert_eq!(to_string(&Value::from("day\"s")), "'day\"s'");
        assert_eq!(to_string(&Value::from("it's \"x\"")), "'it\\'s \"x\"'");
        assert_eq!(to_string(&Value::from(r"a\b")), r"'a\\b'");
        assert_eq!(to_string(&Value::from("a\\")), r"'a\\'");
    }

    #[test]
    fn test_tuples() {
        let empty = Value::FixedTuple(Vec::new().into_boxed_slice());
        assert_eq!(to_string(&empty), "()");

        let single = Value::FixedTuple(vec![Value::from(5)].into_boxed_slice());
        assert_eq!(to_string(&single), "(5,)");

        let pair = Value::FixedTuple(vec![Value::from("NBC"), Value::from(45)].into_boxed_slice());
        assert_eq!(to_string(&pair), "('NBC', 45)");
    }

    #[test]
    fn test_mapping_with_tuple_key() {
        let mut map = LiteralMap::new();
        map.insert(
            Key::Tuple(vec![Key::from(1)].into_boxed_slice()),
            Value::Boolean(false),
        );
        map.insert("x", Value::Sequence(vec![]));
        assert_eq!(to_string(&Value::Mapping(map)), "{(1,): False, 'x': []}");
    }
}
