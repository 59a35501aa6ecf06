//! Typed value representation for parsed literals.
//!
//! This module provides the [`Value`] enum, the result of every parse, together
//! with the scalar types that have no direct std equivalent:
//!
//! - [`Complex`]: a complex number with `f64` parts
//! - [`Duration`]: a `[<days> days, ]H:MM:SS` duration, kept as parsed
//! - [`Timestamp`]: an ISO-8601 date/time, naive or with a fixed UTC offset
//!
//! ## Usage Patterns
//!
//! ### Inspecting a parse result
//!
//! ```rust
//! use reprlit::{parse, Value};
//!
//! let value = parse("[13, 15, 28]");
//! assert!(value.is_sequence());
//!
//! let channels: Vec<i64> = value
//!     .as_slice()
//!     .unwrap()
//!     .iter()
//!     .filter_map(Value::as_i64)
//!     .collect();
//! assert_eq!(channels, vec![13, 15, 28]);
//! ```
//!
//! ### Extracting values
//!
//! ```rust
//! use reprlit::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::{Key, LiteralMap};
use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, NaiveDateTime, Timelike};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;
use std::mem;

/// The result of parsing a literal.
///
/// Containers hold further values; everything else is a resolved scalar or,
/// when nothing matched, the text itself.
///
/// # Examples
///
/// ```rust
/// use reprlit::{parse, Value};
///
/// assert_eq!(parse("(5,)"), Value::FixedTuple(vec![Value::from(5)].into_boxed_slice()));
/// assert_eq!(parse("[1, 2"), Value::Text("[1, 2".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Integer(BigInt),
    Float(f64),
    Complex(Complex),
    Boolean(bool),
    Timestamp(Timestamp),
    Duration(Duration),
    Sequence(Vec<Value>),
    FixedTuple(Box<[Value]>),
    Mapping(LiteralMap),
}

/// A complex number written as `<real>[+-]<imag>j`.
///
/// ```rust
/// use reprlit::{parse, Complex, Value};
///
/// assert_eq!(parse("[1.5-2j]"), Value::Sequence(vec![Value::Complex(Complex::new(1.5, -2.0))]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }
}

/// A duration in the `[<days> days, ]H:MM:SS[.ffffff]` text form.
///
/// Fields are kept exactly as written; no carrying between units is done, so
/// `0:90:00` stays 90 minutes. Use [`Duration::to_chrono`] for arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub microseconds: u32,
}

impl Duration {
    /// Creates a duration without a fractional second part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::{parse, Duration, Value};
    ///
    /// let parsed = parse("'28 days, 17:34:00'");
    /// assert_eq!(parsed, Value::Duration(Duration::new(28, 17, 34, 0)));
    /// ```
    #[must_use]
    pub const fn new(days: u64, hours: u32, minutes: u32, seconds: u32) -> Self {
        Duration {
            days,
            hours,
            minutes,
            seconds,
            microseconds: 0,
        }
    }

    #[must_use]
    pub const fn with_microseconds(mut self, microseconds: u32) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Total length in whole seconds, or `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn total_seconds(&self) -> Option<u64> {
        self.days
            .checked_mul(86_400)?
            .checked_add(u64::from(self.hours) * 3_600)?
            .checked_add(u64::from(self.minutes) * 60)?
            .checked_add(u64::from(self.seconds))
    }

    /// Converts to a [`chrono::Duration`], or `None` if it is out of chrono's range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::Duration;
    ///
    /// let d = Duration::new(1, 2, 0, 30).to_chrono().unwrap();
    /// assert_eq!(d.num_seconds(), 86_400 + 7_200 + 30);
    /// ```
    #[must_use]
    pub fn to_chrono(&self) -> Option<ChronoDuration> {
        let secs = i64::try_from(self.total_seconds()?).ok()?;
        if secs > i64::MAX / 1_000 {
            return None;
        }
        Some(
            ChronoDuration::seconds(secs)
                + ChronoDuration::microseconds(i64::from(self.microseconds)),
        )
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days {
            0 => {}
            1 => write!(f, "1 day, ")?,
            days => write!(f, "{} days, ", days)?,
        }
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)?;
        if self.microseconds != 0 {
            write!(f, ".{:06}", self.microseconds)?;
        }
        Ok(())
    }
}

/// An ISO-8601 date/time, with or without a UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// The wall-clock date/time, ignoring any offset.
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Timestamp::Naive(dt) => *dt,
            Timestamp::Offset(dt) => dt.naive_local(),
        }
    }

    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Naive(_) => None,
            Timestamp::Offset(dt) => Some(*dt.offset()),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.naive_local();
        write!(f, "{}", local.format("%Y-%m-%d %H:%M:%S"))?;
        let micros = local.nanosecond() / 1_000;
        if micros != 0 {
            write!(f, ".{:06}", micros)?;
        }
        if let Timestamp::Offset(dt) = self {
            let spec = if dt.offset().local_minus_utc() % 60 == 0 {
                "%:z"
            } else {
                "%::z"
            };
            write!(f, "{}", dt.format(spec))?;
        }
        Ok(())
    }
}

impl Value {
    /// Short lowercase name of the variant, useful for diagnostics and listings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::parse;
    ///
    /// assert_eq!(parse("(1, 2)").type_name(), "tuple");
    /// assert_eq!(parse("{}").type_name(), "mapping");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Complex(_) => "complex",
            Value::Boolean(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
            Value::Duration(_) => "duration",
            Value::Sequence(_) => "sequence",
            Value::FixedTuple(_) => "tuple",
            Value::Mapping(_) => "mapping",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Value::FixedTuple(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Returns `true` for sequences, tuples and mappings.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Sequence(_) | Value::FixedTuple(_) | Value::Mapping(_)
        )
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer that fits in an `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::parse;
    ///
    /// assert_eq!(parse("42").as_i64(), Some(42));
    /// assert_eq!(parse("99999999999999999999").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => i64::try_from(i).ok(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Integers are not widened.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Value::Complex(c) => Some(*c),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Value::Duration(d) => Some(d),
            _ => None,
        }
    }

    /// Elements of a sequence or a tuple. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            Value::FixedTuple(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&LiteralMap> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl Drop for Value {
    /// Containers are taken apart on a local stack, so dropping a deeply
    /// nested value does not recurse.
    fn drop(&mut self) {
        let mut pending = match self {
            Value::Sequence(items) if !items.is_empty() => mem::take(items),
            Value::FixedTuple(items) if !items.is_empty() => mem::take(items).into_vec(),
            Value::Mapping(map) if !map.is_empty() => {
                mem::take(map).into_iter().map(|(_, value)| value).collect()
            }
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            match &mut value {
                Value::Sequence(items) => pending.append(items),
                Value::FixedTuple(items) => pending.extend(mem::take(items).into_vec()),
                Value::Mapping(map) => {
                    pending.extend(mem::take(map).into_iter().map(|(_, value)| value));
                }
                _ => {}
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_value(f, self)
    }
}

impl Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.re, self.im).serialize(serializer)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Timestamp::Naive(dt) => dt.serialize(serializer),
            Timestamp::Offset(dt) => dt.serialize(serializer),
        }
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Integer(i) => match i64::try_from(i) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => i.serialize(serializer),
            },
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Complex(c) => c.serialize(serializer),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Timestamp(ts) => ts.serialize(serializer),
            Value::Duration(d) => d.serialize(serializer),
            Value::Sequence(items) => items.serialize(serializer),
            Value::FixedTuple(items) => {
                use serde::ser::SerializeTuple;
                let mut tuple = serializer.serialize_tuple(items.len())?;
                for element in items.iter() {
                    tuple.serialize_element(element)?;
                }
                tuple.end()
            }
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

// TryFrom implementations for extracting values from Value.
// `Value` has its own `Drop`, so owned payloads are taken out with `mem::take`.
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match &value {
            Value::Integer(i) => i64::try_from(i)
                .map_err(|_| crate::Error::custom(format!("integer {} does not fit in i64", i))),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<Value> for BigInt {
    type Error = crate::Error;

    fn try_from(mut value: Value) -> crate::Result<Self> {
        match &mut value {
            Value::Integer(i) => Ok(mem::take(i)),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(crate::Error::type_mismatch("float", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(mut value: Value) -> crate::Result<Self> {
        match &mut value {
            Value::Text(s) => Ok(mem::take(s)),
            other => Err(crate::Error::type_mismatch("text", other.type_name())),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = crate::Error;

    fn try_from(mut value: Value) -> crate::Result<Self> {
        match &mut value {
            Value::Sequence(items) => Ok(mem::take(items)),
            Value::FixedTuple(items) => Ok(mem::take(items).into_vec()),
            other => Err(crate::Error::type_mismatch("sequence", other.type_name())),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(BigInt::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(BigInt::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(BigInt::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Value::Complex(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Timestamp(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(Timestamp::Naive(value))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(Timestamp::Offset(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<LiteralMap> for Value {
    fn from(value: LiteralMap) -> Self {
        Value::Mapping(value)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Text(s) => Value::Text(s),
            Key::Integer(i) => Value::Integer(i),
            Key::Float(f) => Value::Float(f),
            Key::Complex(c) => Value::Complex(c),
            Key::Boolean(b) => Value::Boolean(b),
            Key::Timestamp(ts) => Value::Timestamp(ts),
            Key::Duration(d) => Value::Duration(d),
            Key::Tuple(items) => Value::FixedTuple(
                items
                    .into_vec()
                    .into_iter()
                    .map(Value::from)
                    .collect::<Vec<_>>()
                    .into_boxed_slice(),
            ),
        }
    }
}
