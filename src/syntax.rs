//! Literal Syntax
//!
//! This module documents the literal forms [`crate::parse`] recognizes. It is
//! a best-effort reader, not a grammar: anything outside these forms is kept
//! as text rather than rejected.
//!
//! # Containers
//!
//! | Opener | Closer | Kind | Item separator |
//! |--------|--------|------|----------------|
//! | `[` | `]` | [`Value::Sequence`](crate::Value::Sequence) | `,` |
//! | `(` | `)` | [`Value::FixedTuple`](crate::Value::FixedTuple) | `,` |
//! | `{` | `}` | [`Value::Mapping`](crate::Value::Mapping) | `:` after a key, `,` after a value |
//!
//! **Rules**:
//! - The first character selects the kind; the last character must be the
//!   matching closer, otherwise the whole text is returned unchanged
//! - Exactly one layer of delimiters is stripped: `[[1]]` is a sequence
//!   holding a sequence
//! - `[]`, `()` and `{}` are empty containers
//! - A separator only counts at nesting level 0 and outside quotes. Every
//!   bracket family moves the same level counter, so `[(1, 2], 3]` holds the
//!   text `(1, 2]` and the integer 3
//! - A trailing separator is allowed: `(5,)` is a one-element tuple
//! - After a separator, whitespace is skipped (see
//!   [`Spacing`](crate::Spacing) for the single-space mode)
//! - A mapping key with no value after it (`{'a': 1, 'b'}`) is dropped
//! - A sequence or mapping in key position becomes a text key holding its
//!   literal rendering
//!
//! # Quoting
//!
//! Items may be wrapped in `'...'` or `"..."`. Inside a quoted run the other
//! quote character is ordinary text (`'day"s'`). A backslash escapes the
//! next character, so `'it\'s'` is one run and `'a\\'` ends after the
//! escaped backslash. The backslashes themselves are kept unless
//! [`ParseOptions::with_unescape`](crate::ParseOptions::with_unescape) is set,
//! which is also how [`crate::to_string`] output reads back exactly.
//!
//! After the outer quotes are removed the item is resolved like any other:
//! `'45'` is an integer and `'[1, 2]'` a sequence.
//!
//! # Scalars
//!
//! Tried in this order; the first match wins.
//!
//! | Type | Form | Example |
//! |------|------|---------|
//! | Timestamp | `YYYY-MM-DD[(T\| )HH[:MM[:SS[.f{1,6}]]][Z\|±HH:MM[:SS]]]` | `2018-09-28 22:22:43.467435` |
//! | Duration | `[<n> day[s], ]H[H]:MM:SS[.f{1,6}]` | `28 days, 17:34:00` |
//! | Complex | `[±]<dec>[+-]<dec>j` or `[±]<dec>j` | `1.5-2j` |
//! | Float | `[±]<digits>.<digits>*[(e\|E)[±]<digits>]` | `0.25`, `1.0e-3` |
//! | Integer | `<digits>` with no sign | `45` |
//! | Boolean | `True` or `False` | `True` |
//! | Text | anything else | `45 minutes` |
//!
//! `<dec>` is `<digits>[.<digits>*][(e|E)[±]<digits>]`.
//!
//! Integers carry no sign, so `-7` is text while `-7.0` is a float.
//!
//! # Top Level
//!
//! Text that is not a container is resolved as one scalar, after stripping
//! its outer quotes. When no typed form matches, the original text is
//! returned with its quotes, so parsing a text result again gives the same
//! result.
