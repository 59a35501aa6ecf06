//! Top-level item splitting.
//!
//! [`Items`] walks the interior of a container literal once, left to right,
//! and yields the substrings between top-level separators. A separator only
//! counts when the scan is at nesting level 0 and outside a quoted run. A
//! backslash escapes the character after it: `\'` neither opens nor closes a
//! quoted run, and `\\` is a plain backslash.
//!
//! Mapping interiors alternate separators: a key ends at `:`, its value at `,`.
//!
//! ```rust
//! use reprlit::scan::{ItemRole, Items};
//! use reprlit::Spacing;
//!
//! let items: Vec<_> = Items::mapping("'a': [1, 2], 'b': 'x, y'", Spacing::Lenient)
//!     .map(|item| (item.role, item.text))
//!     .collect();
//! assert_eq!(
//!     items,
//!     vec![
//!         (ItemRole::Key, "'a'"),
//!         (ItemRole::Value, "[1, 2]"),
//!         (ItemRole::Key, "'b'"),
//!         (ItemRole::Value, "'x, y'"),
//!     ]
//! );
//! ```

use crate::options::Spacing;

/// Position of an item inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemRole {
    /// Element of a sequence or tuple.
    Element,
    Key,
    Value,
}

/// One top-level item, borrowed from the container interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item<'a> {
    pub text: &'a str,
    pub role: ItemRole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MapState {
    ExpectingKey,
    ExpectingValue,
}

#[derive(Clone, Copy, Debug)]
enum Separators {
    Single(char),
    KeyValue(MapState),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteState {
    NotInQuote,
    InQuote(char),
}

/// Iterator over the top-level items of a container interior.
#[derive(Clone, Debug)]
pub struct Items<'a> {
    input: &'a str,
    position: usize,
    separators: Separators,
    spacing: Spacing,
}

impl<'a> Items<'a> {
    /// Items of a sequence or tuple interior, separated by `,`.
    #[must_use]
    pub fn elements(interior: &'a str, spacing: Spacing) -> Self {
        Self::new(interior, Separators::Single(','), spacing)
    }

    /// Alternating keys and values of a mapping interior.
    #[must_use]
    pub fn mapping(interior: &'a str, spacing: Spacing) -> Self {
        Self::new(
            interior,
            Separators::KeyValue(MapState::ExpectingKey),
            spacing,
        )
    }

    fn new(interior: &'a str, separators: Separators, spacing: Spacing) -> Self {
        let input = match spacing {
            Spacing::Lenient => interior.trim(),
            Spacing::Exact => interior,
        };
        Items {
            input,
            position: 0,
            separators,
            spacing,
        }
    }

    fn current(&self) -> (char, ItemRole) {
        match self.separators {
            Separators::Single(sep) => (sep, ItemRole::Element),
            Separators::KeyValue(MapState::ExpectingKey) => (':', ItemRole::Key),
            Separators::KeyValue(MapState::ExpectingValue) => (',', ItemRole::Value),
        }
    }

    fn flip(&mut self) {
        if let Separators::KeyValue(state) = &mut self.separators {
            *state = match state {
                MapState::ExpectingKey => MapState::ExpectingValue,
                MapState::ExpectingValue => MapState::ExpectingKey,
            };
        }
    }

    /// Skips the separator at the current position and the spacing after it.
    fn skip_separator(&mut self, sep: char) {
        self.position += sep.len_utf8();
        let rest = &self.input[self.position..];
        let skipped = match self.spacing {
            Spacing::Lenient => rest.len() - rest.trim_start().len(),
            Spacing::Exact => usize::from(rest.starts_with(' ')),
        };
        self.position += skipped;
    }
}

/// Byte offset of the first top-level `sep` in `text`, if any.
fn find_separator(text: &str, sep: char) -> Option<usize> {
    let mut level = 0usize;
    let mut quote = QuoteState::NotInQuote;
    let mut pending_escape = false;

    for (idx, ch) in text.char_indices() {
        let escaped = pending_escape;
        pending_escape = ch == '\\' && !escaped;
        match quote {
            QuoteState::InQuote(q) => {
                if ch == q && !escaped {
                    quote = QuoteState::NotInQuote;
                }
            }
            QuoteState::NotInQuote => match ch {
                '\'' | '"' if !escaped => quote = QuoteState::InQuote(ch),
                '(' | '[' | '{' => level += 1,
                ')' | ']' | '}' => level = level.saturating_sub(1),
                c if c == sep && level == 0 => return Some(idx),
                _ => {}
            },
        }
    }
    None
}

impl<'a> Iterator for Items<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        if self.position >= self.input.len() {
            return None;
        }

        let (sep, role) = self.current();
        let rest = &self.input[self.position..];
        let text = match find_separator(rest, sep) {
            Some(end) => {
                self.position += end;
                self.skip_separator(sep);
                &rest[..end]
            }
            None => {
                self.position = self.input.len();
                rest
            }
        };
        self.flip();

        let text = match self.spacing {
            Spacing::Lenient => text.trim_end(),
            Spacing::Exact => text,
        };
        Some(Item { text, role })
    }
}
