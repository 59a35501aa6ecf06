//! Container dispatch and assembly.
//!
//! This module turns literal text into a [`Value`]. The outer delimiters pick
//! the container kind, [`Items`] splits the interior, and each item is either
//! another container (pushed as a new frame) or handed to the scalar chain.
//!
//! ## Overview
//!
//! - **Never fails**: malformed or unrecognized input comes back as text
//! - **Explicit frame stack**: nested containers are parsed without native
//!   recursion, and [`Value`]'s `Drop` takes them apart the same way, so
//!   nesting depth is bounded only by memory
//! - **Atomic mapping entries**: a key is held in its frame until the value
//!   after it has been parsed, then both are inserted together
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use reprlit::{parse, Value};
//!
//! let value = parse("[[1, 2], [3, 4]]");
//! assert_eq!(
//!     value,
//!     Value::Sequence(vec![
//!         Value::Sequence(vec![Value::from(1), Value::from(2)]),
//!         Value::Sequence(vec![Value::from(3), Value::from(4)]),
//!     ])
//! );
//! ```

use crate::options::ParseOptions;
use crate::scalar;
use crate::scan::{ItemRole, Items};
use crate::{Key, LiteralMap, Value};
use std::borrow::Cow;

/// The three container literal forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Sequence,
    FixedTuple,
    Mapping,
}

impl ContainerKind {
    fn from_open(ch: char) -> Option<Self> {
        match ch {
            '[' => Some(ContainerKind::Sequence),
            '(' => Some(ContainerKind::FixedTuple),
            '{' => Some(ContainerKind::Mapping),
            _ => None,
        }
    }

    const fn close(self) -> char {
        match self {
            ContainerKind::Sequence => ']',
            ContainerKind::FixedTuple => ')',
            ContainerKind::Mapping => '}',
        }
    }

    fn items<'a>(self, interior: &'a str, options: &ParseOptions) -> Items<'a> {
        match self {
            ContainerKind::Mapping => Items::mapping(interior, options.spacing),
            _ => Items::elements(interior, options.spacing),
        }
    }
}

/// What the outer characters of a piece of text say it is.
#[derive(Debug, PartialEq, Eq)]
enum Shape<'a> {
    /// Matching delimiters with something between them.
    Container(ContainerKind, &'a str),
    /// `[]`, `()` or `{}`.
    Empty(ContainerKind),
    /// Opens like a container but does not close like one.
    Malformed,
    Scalar,
}

fn shape(text: &str) -> Shape<'_> {
    let Some(kind) = text.chars().next().and_then(ContainerKind::from_open) else {
        return Shape::Scalar;
    };
    // The opener is one byte, so a single-character text can never close.
    if text.len() < 2 || !text.ends_with(kind.close()) {
        return Shape::Malformed;
    }
    let interior = &text[1..text.len() - 1];
    if interior.is_empty() {
        Shape::Empty(kind)
    } else {
        Shape::Container(kind, interior)
    }
}

/// Strips one pair of matching outer quotes, unescaping if asked to.
fn unquote<'a>(text: &'a str, options: &ParseOptions) -> Cow<'a, str> {
    let mut chars = text.chars();
    let quoted = match (chars.next(), chars.next_back()) {
        (Some(first @ ('\'' | '"')), Some(last)) if first == last => Some(&text[1..text.len() - 1]),
        _ => None,
    };
    match quoted {
        Some(inner) if options.unescape && inner.contains('\\') => Cow::Owned(unescape(inner)),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(text),
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next @ ('\'' | '"' | '\\')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(ch);
    }
    out
}

fn empty(kind: ContainerKind) -> Value {
    match kind {
        ContainerKind::Sequence => Value::Sequence(Vec::new()),
        ContainerKind::FixedTuple => Value::FixedTuple(Vec::new().into_boxed_slice()),
        ContainerKind::Mapping => Value::Mapping(LiteralMap::new()),
    }
}

/// Partially built container.
enum Builder {
    Sequence(Vec<Value>),
    FixedTuple(Vec<Value>),
    Mapping {
        map: LiteralMap,
        pending_key: Option<Key>,
    },
}

impl Builder {
    fn new(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Sequence => Builder::Sequence(Vec::new()),
            ContainerKind::FixedTuple => Builder::FixedTuple(Vec::new()),
            ContainerKind::Mapping => Builder::Mapping {
                map: LiteralMap::new(),
                pending_key: None,
            },
        }
    }

    fn accept(&mut self, role: ItemRole, value: Value) {
        match self {
            Builder::Sequence(items) | Builder::FixedTuple(items) => items.push(value),
            Builder::Mapping { map, pending_key } => match role {
                ItemRole::Key => *pending_key = Some(Key::from(value)),
                _ => {
                    if let Some(key) = pending_key.take() {
                        map.insert(key, value);
                    }
                }
            },
        }
    }

    /// A key still waiting for its value is dropped.
    fn finish(self) -> Value {
        match self {
            Builder::Sequence(items) => Value::Sequence(items),
            Builder::FixedTuple(items) => Value::FixedTuple(items.into_boxed_slice()),
            Builder::Mapping { map, .. } => Value::Mapping(map),
        }
    }
}

/// One container being parsed: its remaining items, what it has built so
/// far, and where its value goes in the parent.
struct Frame<'a> {
    items: Items<'a>,
    builder: Builder,
    role: ItemRole,
}

impl<'a> Frame<'a> {
    fn new(kind: ContainerKind, interior: &'a str, role: ItemRole, options: &ParseOptions) -> Self {
        Frame {
            items: kind.items(interior, options),
            builder: Builder::new(kind),
            role,
        }
    }
}

/// Parses literal text with the given options.
///
/// Container literals are parsed into containers; any other text is run
/// through the scalar chain (after stripping one pair of outer quotes) and
/// returned unchanged, quotes included, if no typed form matches.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Value {
    match shape(text) {
        Shape::Container(kind, interior) => parse_container(kind, interior, options),
        Shape::Empty(kind) => empty(kind),
        Shape::Malformed => Value::Text(text.to_string()),
        Shape::Scalar => scalar::resolve_typed(&unquote(text, options))
            .unwrap_or_else(|| Value::Text(text.to_string())),
    }
}

fn parse_container(kind: ContainerKind, interior: &str, options: &ParseOptions) -> Value {
    let mut stack = vec![Frame::new(kind, interior, ItemRole::Element, options)];

    while let Some(frame) = stack.last_mut() {
        let Some(item) = frame.items.next() else {
            // Frame exhausted: hand its value to the parent, or return it.
            let Some(done) = stack.pop() else { break };
            let value = done.builder.finish();
            match stack.last_mut() {
                Some(parent) => parent.builder.accept(done.role, value),
                None => return value,
            }
            continue;
        };

        let text = match unquote(item.text, options) {
            Cow::Borrowed(text) => text,
            Cow::Owned(text) => {
                let value = owned_item(&text, options);
                frame.builder.accept(item.role, value);
                continue;
            }
        };
        match shape(text) {
            Shape::Container(kind, inner) => {
                stack.push(Frame::new(kind, inner, item.role, options));
            }
            Shape::Empty(kind) => frame.builder.accept(item.role, empty(kind)),
            Shape::Malformed => frame.builder.accept(item.role, Value::Text(text.to_string())),
            Shape::Scalar => frame.builder.accept(item.role, scalar::resolve_scalar(text)),
        }
    }

    empty(kind)
}

/// An unescaped item no longer borrows from the input, so a container inside
/// it gets a stack of its own.
fn owned_item(text: &str, options: &ParseOptions) -> Value {
    match shape(text) {
        Shape::Container(kind, inner) => parse_container(kind, inner, options),
        Shape::Empty(kind) => empty(kind),
        Shape::Malformed => Value::Text(text.to_string()),
        Shape::Scalar => scalar::resolve_scalar(text),
    }
}
