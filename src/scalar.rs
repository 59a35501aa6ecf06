//! Scalar resolution.
//!
//! A non-container item is tried against each typed form in a fixed order,
//! and the first match wins:
//!
//! 1. timestamp (`2018-09-28 22:22:43.467435`)
//! 2. duration (`28 days, 17:34:00`)
//! 3. number: complex (`1+2j`), float (`3.25`, `1.0e-3`), integer (`42`)
//! 4. boolean (`True`, `False`)
//!
//! Anything else stays text. [`resolve_scalar`] runs the whole chain and
//! never fails; the `parse_*` functions run a single stage and report why the
//! text did not match.
//!
//! ```rust
//! use reprlit::scalar::{parse_number, resolve_scalar};
//! use reprlit::Value;
//!
//! assert_eq!(resolve_scalar("42"), Value::from(42));
//! assert_eq!(resolve_scalar("45 minutes"), Value::from("45 minutes"));
//! assert!(parse_number("-7").is_err());
//! ```

use crate::value::{Complex, Duration, Timestamp};
use crate::{Error, Result, Value};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use num_bigint::BigInt;

/// Resolves `text` to the most specific value it spells, or to text.
#[must_use]
pub fn resolve_scalar(text: &str) -> Value {
    resolve_typed(text).unwrap_or_else(|| Value::Text(text.to_string()))
}

/// Runs the typed stages of the chain; `None` if none of them matched.
pub(crate) fn resolve_typed(text: &str) -> Option<Value> {
    parse_timestamp(text)
        .map(Value::Timestamp)
        .or_else(|_| parse_duration(text).map(Value::Duration))
        .or_else(|_| parse_number(text))
        .or_else(|_| parse_bool(text).map(Value::Boolean))
        .ok()
}

/// Byte cursor over ASCII-structured text.
struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            bytes: text.as_bytes(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.bytes[self.position..].starts_with(s.as_bytes()) {
            self.position += s.len();
            true
        } else {
            false
        }
    }

    /// Consumes a run of ASCII digits and returns it; empty if none.
    fn digit_run(&mut self) -> &'a [u8] {
        let start = self.position;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.position += 1;
        }
        &self.bytes[start..self.position]
    }

    /// Consumes exactly `count` digits.
    fn fixed_digits(&mut self, count: usize) -> Option<u32> {
        let end = self.position + count;
        let digits = self.bytes.get(self.position..end)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.position = end;
        Some(digits_value(digits))
    }
}

fn digits_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'))
}

/// Scales a 1-6 digit fraction to microseconds.
fn fraction_micros(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }
    Some(digits_value(digits) * 10u32.pow(6 - digits.len() as u32))
}

/// Parses an ISO-8601 date or date/time.
///
/// Accepted: `YYYY-MM-DD`, optionally followed by `T` or a space and a time of
/// `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS.ffffff` (1 to 6 fraction digits),
/// optionally followed by `Z` or an offset `±HH:MM[:SS]`. A bare date is
/// midnight.
///
/// # Examples
///
/// ```rust
/// use reprlit::scalar::parse_timestamp;
///
/// let ts = parse_timestamp("2018-09-28 22:22:43.467435").unwrap();
/// assert_eq!(ts.to_string(), "2018-09-28 22:22:43.467435");
/// assert!(ts.offset().is_none());
///
/// let aware = parse_timestamp("2018-09-28T22:22:43+02:00").unwrap();
/// assert_eq!(aware.offset().unwrap().local_minus_utc(), 7_200);
///
/// assert!(parse_timestamp("2018-02-30").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if the text does not have this shape or
/// names a date or time that does not exist.
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    let invalid = |msg: &str| Error::invalid_timestamp(text, msg);
    let mut cursor = Cursor::new(text);

    let date = parse_date(&mut cursor).ok_or_else(|| invalid("expected YYYY-MM-DD"))?;
    let date = date.ok_or_else(|| invalid("date out of range"))?;

    if cursor.at_end() {
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).ok_or_else(|| invalid("bad time"))?;
        return Ok(Timestamp::Naive(NaiveDateTime::new(date, midnight)));
    }
    if !(cursor.eat(b'T') || cursor.eat(b' ')) {
        return Err(invalid("expected 'T' or ' ' between date and time"));
    }

    let time = parse_time(&mut cursor).ok_or_else(|| invalid("expected HH[:MM[:SS[.ffffff]]]"))?;
    let time = time.ok_or_else(|| invalid("time out of range"))?;
    let naive = NaiveDateTime::new(date, time);

    if cursor.at_end() {
        return Ok(Timestamp::Naive(naive));
    }
    let offset = parse_offset(&mut cursor).ok_or_else(|| invalid("expected Z or ±HH:MM offset"))?;
    if !cursor.at_end() {
        return Err(invalid("trailing characters"));
    }
    let offset = offset.ok_or_else(|| invalid("offset out of range"))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(Timestamp::Offset)
        .ok_or_else(|| invalid("time does not exist at this offset"))
}

/// Outer `None`: wrong shape; inner `None`: right shape, impossible date.
fn parse_date(cursor: &mut Cursor<'_>) -> Option<Option<NaiveDate>> {
    let year = cursor.fixed_digits(4)?;
    cursor.eat(b'-').then_some(())?;
    let month = cursor.fixed_digits(2)?;
    cursor.eat(b'-').then_some(())?;
    let day = cursor.fixed_digits(2)?;
    Some(NaiveDate::from_ymd_opt(year as i32, month, day))
}

fn parse_time(cursor: &mut Cursor<'_>) -> Option<Option<NaiveTime>> {
    let hour = cursor.fixed_digits(2)?;
    let mut minute = 0;
    let mut second = 0;
    let mut micro = 0;
    if cursor.eat(b':') {
        minute = cursor.fixed_digits(2)?;
        if cursor.eat(b':') {
            second = cursor.fixed_digits(2)?;
            if cursor.eat(b'.') {
                micro = fraction_micros(cursor.digit_run())?;
            }
        }
    }
    Some(NaiveTime::from_hms_micro_opt(hour, minute, second, micro))
}

fn parse_offset(cursor: &mut Cursor<'_>) -> Option<Option<FixedOffset>> {
    if cursor.eat(b'Z') {
        return Some(FixedOffset::east_opt(0));
    }
    let sign = match cursor.peek()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    cursor.position += 1;
    let hours = cursor.fixed_digits(2)?;
    cursor.eat(b':').then_some(())?;
    let minutes = cursor.fixed_digits(2)?;
    let seconds = if cursor.eat(b':') {
        cursor.fixed_digits(2)?
    } else {
        0
    };
    if minutes > 59 || seconds > 59 {
        return Some(None);
    }
    let total = (hours * 3_600 + minutes * 60 + seconds) as i32;
    Some(FixedOffset::east_opt(sign * total))
}

/// Parses the `[<days> day[s], ]H:MM:SS[.ffffff]` duration form.
///
/// Hours take one or two digits, minutes and seconds exactly two. The fields
/// are stored as written.
///
/// # Examples
///
/// ```rust
/// use reprlit::scalar::parse_duration;
/// use reprlit::Duration;
///
/// assert_eq!(parse_duration("28 days, 17:34:00").unwrap(), Duration::new(28, 17, 34, 0));
/// assert_eq!(parse_duration("1 day, 0:00:01").unwrap(), Duration::new(1, 0, 0, 1));
/// assert_eq!(parse_duration("9:05:00").unwrap(), Duration::new(0, 9, 5, 0));
/// assert!(parse_duration("45 minutes").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] if the text does not match the form.
pub fn parse_duration(text: &str) -> Result<Duration> {
    let invalid = |msg: &str| Error::invalid_duration(text, msg);
    let mut cursor = Cursor::new(text);

    let lead = cursor.digit_run();
    if lead.is_empty() {
        return Err(invalid("expected digits"));
    }

    let (days, hours) = if cursor.eat(b' ') {
        if !(cursor.eat_str("days, ") || cursor.eat_str("day, ")) {
            return Err(invalid("expected 'days, ' after the day count"));
        }
        // Digits only, so the text is valid UTF-8 and a valid u64 unless it overflows.
        let days = std::str::from_utf8(lead)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| invalid("day count out of range"))?;
        (days, cursor.digit_run())
    } else {
        (0, lead)
    };

    if hours.is_empty() || hours.len() > 2 {
        return Err(invalid("expected one or two hour digits"));
    }
    let clock = (|| {
        cursor.eat(b':').then_some(())?;
        let minutes = cursor.fixed_digits(2)?;
        cursor.eat(b':').then_some(())?;
        let seconds = cursor.fixed_digits(2)?;
        let micros = if cursor.eat(b'.') {
            fraction_micros(cursor.digit_run())?
        } else {
            0
        };
        cursor.at_end().then_some((minutes, seconds, micros))
    })();
    let (minutes, seconds, micros) = clock.ok_or_else(|| invalid("expected H:MM:SS"))?;

    Ok(Duration::new(days, digits_value(hours), minutes, seconds).with_microseconds(micros))
}

/// Byte offset just past a decimal number starting at `start`:
/// `digits ['.' digits*] [('e'|'E') [sign] digits]`.
fn scan_decimal(bytes: &[u8], start: usize) -> Option<usize> {
    let mut cursor = Cursor {
        bytes,
        position: start,
    };
    if cursor.digit_run().is_empty() {
        return None;
    }
    if cursor.eat(b'.') {
        cursor.digit_run();
    }
    let before_exponent = cursor.position;
    if cursor.eat(b'e') || cursor.eat(b'E') {
        let _ = cursor.eat(b'+') || cursor.eat(b'-');
        if cursor.digit_run().is_empty() {
            return Some(before_exponent);
        }
    }
    Some(cursor.position)
}

fn skip_sign(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn parse_complex(text: &str) -> Option<Complex> {
    let body = text.strip_suffix('j').or_else(|| text.strip_suffix('J'))?;
    let bytes = body.as_bytes();
    let real_end = scan_decimal(bytes, skip_sign(bytes))?;

    if real_end == bytes.len() {
        let im = body.parse::<f64>().ok()?;
        return Some(Complex::new(0.0, im));
    }
    if !matches!(bytes[real_end], b'+' | b'-') {
        return None;
    }
    if scan_decimal(bytes, real_end + 1)? != bytes.len() {
        return None;
    }
    let re = body[..real_end].parse::<f64>().ok()?;
    let im = body[real_end..].parse::<f64>().ok()?;
    Some(Complex::new(re, im))
}

fn is_float_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let start = skip_sign(bytes);
    let Some(end) = scan_decimal(bytes, start) else {
        return false;
    };
    end == bytes.len() && bytes[start..end].contains(&b'.')
}

/// Parses a complex, float or integer literal, in that order.
///
/// - complex: `[±]<decimal>[+-]<decimal>j`, or `[±]<decimal>j` for a pure imaginary
/// - float: `[±]<digits>.<digits>*`, optionally with an exponent
/// - integer: one or more digits with no sign, of any length
///
/// # Examples
///
/// ```rust
/// use reprlit::scalar::parse_number;
/// use reprlit::{Complex, Value};
///
/// assert_eq!(parse_number("2+3.5j").unwrap(), Value::Complex(Complex::new(2.0, 3.5)));
/// assert_eq!(parse_number("-0.5").unwrap(), Value::Float(-0.5));
/// assert_eq!(parse_number("007").unwrap(), Value::from(7));
/// assert!(parse_number("12abc").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if the text is none of these.
pub fn parse_number(text: &str) -> Result<Value> {
    if let Some(c) = parse_complex(text) {
        return Ok(Value::Complex(c));
    }
    if is_float_literal(text) {
        return text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| Error::invalid_number(text));
    }
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<BigInt>()
            .map(Value::Integer)
            .map_err(|_| Error::invalid_number(text));
    }
    Err(Error::invalid_number(text))
}

/// Parses `True` or `False`, exactly.
///
/// # Errors
///
/// Returns [`Error::InvalidBool`] for any other text, including `true`.
pub fn parse_bool(text: &str) -> Result<bool> {
    match text {
        "True" => Ok(true),
        "False" => Ok(false),
        _ => Err(Error::invalid_bool(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_timestamp_with_micros() {
        let ts = parse_timestamp("2018-09-28 22:22:43.467435").unwrap();
        let local = ts.naive_local();
        assert_eq!((local.year(), local.month(), local.day()), (2018, 9, 28));
        assert_eq!((local.hour(), local.minute(), local.second()), (22, 22, 43));
        assert_eq!(local.nanosecond(), 467_435_000);
    }

    #[test]
    fn test_timestamp_partial_forms() {
        assert!(parse_timestamp("2018-09-28").is_ok());
        assert!(parse_timestamp("2018-09-28T22").is_ok());
        assert!(parse_timestamp("2018-09-28T22:22").is_ok());
        assert!(parse_timestamp("2018-09-28T22:22:43.5").is_ok());
        assert!(parse_timestamp("2018-09-28T22:22:43Z").unwrap().offset().is_some());
        assert!(parse_timestamp("2018-09-28T22:22:43-05:00").is_ok());
    }

    #[test]
    fn test_timestamp_rejects() {
        for text in [
            "2018",
            "2018-9-28",
            "2018-09-28 ",
            "2018-09-28x22:22",
            "2018-09-28 25:00",
            "2018-09-28 22:22:43.1234567",
            "2018-09-28 22:22:43+0200",
            "2018-09-28 22:22:43+02:00junk",
            "45 minutes",
        ] {
            assert!(parse_timestamp(text).is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn test_duration_forms() {
        assert_eq!(
            parse_duration("0:00:00.250000").unwrap(),
            Duration::new(0, 0, 0, 0).with_microseconds(250_000)
        );
        assert_eq!(parse_duration("23:59:59").unwrap(), Duration::new(0, 23, 59, 59));
    }

    #[test]
    fn test_duration_rejects() {
        for text in ["123:00:00", "17:34", "28 days 17:34:00", "1:2:3", "days, 1:00:00", "1:00:00 "] {
            assert!(parse_duration(text).is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_number("3.").unwrap(), Value::Float(3.0));
        assert_eq!(parse_number("1.5e3").unwrap(), Value::Float(1500.0));
        assert_eq!(parse_number("2j").unwrap(), Value::Complex(Complex::new(0.0, 2.0)));
        assert_eq!(
            parse_number("1.0e2-1.5j").unwrap(),
            Value::Complex(Complex::new(100.0, -1.5))
        );
        let big = parse_number("123456789012345678901234567890").unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_number_rejects() {
        for text in ["", "-7", "+7", "1e5", ".5", "1.5e", "1.2.3", "j", "1+j", "45 minutes"] {
            assert!(parse_number(text).is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn test_chain_order() {
        assert!(matches!(resolve_scalar("2018-09-28"), Value::Timestamp(_)));
        assert!(matches!(resolve_scalar("17:34:00"), Value::Duration(_)));
        assert_eq!(resolve_scalar("28"), Value::from(28));
        assert_eq!(resolve_scalar("False"), Value::Boolean(false));
        assert_eq!(resolve_scalar("false"), Value::from("false"));
        assert_eq!(resolve_scalar(""), Value::from(""));
    }
}
