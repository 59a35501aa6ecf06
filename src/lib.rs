//! # reprlit
//!
//! A best-effort parser that turns repr-style container literals back into
//! typed values.
//!
//! ## What does it read?
//!
//! Text such as
//!
//! ```text
//! ['28 days, 17:34:00', [], ('NBC', 45), {'channels': [13, 15, 28]}, (5,), '2018-09-28 22:22:43.467435']
//! ```
//!
//! comes back as a [`Value::Sequence`] holding a duration, an empty sequence, a
//! tuple, a mapping, a one-element tuple and a timestamp. Quoted items are
//! unquoted and then resolved like any other item, so `'45'` is the integer 45.
//!
//! ## Key Features
//!
//! - **Never fails**: malformed input (`[1, 2`) comes back as the original text
//! - **Typed scalars**: timestamps, durations, complex numbers, floats,
//!   arbitrary-precision integers and booleans
//! - **Ordered mappings**: entries keep their literal order
//! - **Deep nesting**: parsed and dropped with an explicit stack, not recursion
//! - **Round trip**: [`to_string`] writes a value back in the same syntax
//!
//! ## Quick Start
//!
//! ```rust
//! use reprlit::{parse, Value};
//!
//! let value = parse("{'running time': '45 minutes', 'channels': [13, 15, 28], 'format': 'soap'}");
//! let map = value.as_mapping().unwrap();
//!
//! let keys: Vec<String> = map.keys().map(|k| k.as_str().unwrap().to_string()).collect();
//! assert_eq!(keys, ["running time", "channels", "format"]);
//!
//! assert_eq!(map.get("running time"), Some(&Value::from("45 minutes")));
//! assert_eq!(map.get("channels").unwrap().to_string(), "[13, 15, 28]");
//! ```
//!
//! ### Inspecting resolved types
//!
//! ```rust
//! use reprlit::parse;
//!
//! let value = parse("['2018-09-28 22:22:43.467435', 1+2j, 2.5, True, 'soap']");
//! let kinds: Vec<&str> = value.as_slice().unwrap().iter().map(|v| v.type_name()).collect();
//! assert_eq!(kinds, ["timestamp", "complex", "float", "boolean", "text"]);
//! ```
//!
//! See [`syntax`] for the exact forms that are recognized.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod scalar;
pub mod scan;
pub mod ser;
pub mod syntax;
pub mod value;

pub use de::parse_with_options;
pub use error::{Error, Result};
pub use map::{Key, LiteralMap};
pub use options::{ParseOptions, Spacing};
pub use ser::to_string;
pub use value::{Complex, Duration, Timestamp, Value};

/// Parse literal text into a [`Value`] with default options.
///
/// Never fails. Text that is not a well-formed container literal is resolved
/// as a single scalar if it spells one (quotes stripped first), and otherwise
/// returned unchanged as [`Value::Text`].
///
/// # Examples
///
/// ```rust
/// use reprlit::{parse, Duration, Value};
///
/// assert_eq!(parse("[]"), Value::Sequence(vec![]));
/// assert_eq!(parse("'28 days, 17:34:00'"), Value::Duration(Duration::new(28, 17, 34, 0)));
/// assert_eq!(parse("[1, 2"), Value::from("[1, 2"));
/// assert_eq!(parse("soap opera"), Value::from("soap opera"));
/// ```
#[must_use]
pub fn parse(text: &str) -> Value {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse a value that may still be unparsed text.
///
/// [`Value::Text`] is parsed with default options; every other value is
/// already resolved and is returned as is.
///
/// # Examples
///
/// ```rust
/// use reprlit::{resolve, Value};
///
/// assert_eq!(resolve(Value::from("[1]")), Value::Sequence(vec![Value::from(1)]));
/// assert_eq!(resolve(Value::from(7)), Value::from(7));
/// ```
#[must_use]
pub fn resolve(value: Value) -> Value {
    if let Value::Text(text) = &value {
        return parse(text);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_forms() {
        assert_eq!(parse("[]"), Value::Sequence(vec![]));
        assert_eq!(parse("{}"), Value::Mapping(LiteralMap::new()));
        assert_eq!(parse("()"), Value::FixedTuple(Vec::new().into_boxed_slice()));
    }

    #[test]
    fn test_singleton_tuple() {
        assert_eq!(parse("(5,)"), crate::literal!((5,)));
    }

    #[test]
    fn test_resolve_is_idempotent_on_text() {
        for text in ["soap", "'soap'", "45 minutes", "[1, 2", "''x''", "True", "3.5"] {
            let once = resolve(Value::from(text));
            assert_eq!(resolve(once.clone()), once, "{text}");
        }
    }

    #[test]
    fn test_round_trip_through_to_string() {
        let value = crate::literal!(["a b", [], (1, 2.5), {"k": [True, False]}, (5,)]);
        assert_eq!(parse(&to_string(&value)), value);
    }
}
