//! Configuration options for parsing.
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`Spacing`]: How whitespace after a separator is consumed
//!
//! ## Examples
//!
//! ```rust
//! use reprlit::{parse_with_options, ParseOptions, Spacing, Value};
//!
//! // Default: any run of whitespace after a separator is skipped
//! let options = ParseOptions::new();
//! assert_eq!(parse_with_options("[1,2,   3]", &options).as_slice().unwrap().len(), 3);
//!
//! // Exact: exactly one space is skipped, anything else stays in the item
//! let options = ParseOptions::new().with_spacing(Spacing::Exact);
//! let value = parse_with_options("[1,  2]", &options);
//! assert_eq!(value.as_slice().unwrap()[1], Value::from(" 2"));
//! ```

/// Whitespace handling after an item separator.
///
/// # Examples
///
/// ```rust
/// use reprlit::Spacing;
///
/// assert_eq!(Spacing::default(), Spacing::Lenient);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Skip the separator and any run of whitespace after it; trim the
    /// container interior and trailing whitespace of unquoted items.
    #[default]
    Lenient,
    /// Skip the separator and at most one following space; nothing is trimmed.
    Exact,
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use reprlit::{ParseOptions, Spacing};
///
/// let options = ParseOptions::new()
///     .with_spacing(Spacing::Exact)
///     .with_unescape(true);
/// assert!(options.unescape);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    pub spacing: Spacing,
    /// Replace `\'`, `\"` and `\\` inside quoted items with the bare character.
    pub unescape: bool,
}

impl ParseOptions {
    /// Creates default options (lenient spacing, escapes kept as written).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::{ParseOptions, Spacing};
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.spacing, Spacing::Lenient);
    /// assert!(!options.unescape);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets whether escaped quotes and backslashes in quoted items are unescaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::{parse_with_options, ParseOptions, Value};
    ///
    /// let options = ParseOptions::new().with_unescape(true);
    /// let value = parse_with_options(r"['it\'s']", &options);
    /// assert_eq!(value, Value::Sequence(vec![Value::from("it's")]));
    /// ```
    #[must_use]
    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }
}
