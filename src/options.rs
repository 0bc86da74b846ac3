//! Configuration options for TOON encoding and decoding.
//!
//! Encoding and decoding take separate option structs since their knobs don't overlap:
//! [`EncodeOptions`] governs indentation, delimiter and length-marker choice; [`DecodeOptions`]
//! governs strictness and the indent width strict mode validates against.
//!
//! ## Examples
//!
//! ```rust
//! use serde_toon::{EncodeOptions, Delimiter, to_string_with_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! let toon = to_string_with_options(&data, &options).unwrap();
//!
//! let options = EncodeOptions::new().with_length_marker('#');
//! let toon = to_string_with_options(&vec![1, 2, 3], &options).unwrap();
//! ```

/// Delimiter choice for TOON tabular arrays and inline arrays.
///
/// - **Comma**: default, most compact
/// - **Tab**: best for TSV-like output
/// - **Pipe**: readable for markdown-style tables
///
/// # Examples
///
/// ```rust
/// use serde_toon::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The character written between the row count and `]` in a header for non-comma
    /// delimiters. Comma, being the default, is never written explicitly.
    #[must_use]
    pub const fn header_marker(&self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }

    pub(crate) fn from_header_marker(c: char) -> Option<Self> {
        match c {
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            ',' => Some(Delimiter::Comma),
            _ => None,
        }
    }
}

/// Configuration for [`crate::encode::encode`] and the serde-facing `to_*` functions.
///
/// # Examples
///
/// ```rust
/// use serde_toon::{EncodeOptions, Delimiter};
///
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_length_marker('#')
///     .with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Spaces per nesting level. `0` disables indentation; sibling values still sit on their
    /// own lines, just without leading whitespace.
    pub indent: usize,
    pub delimiter: Delimiter,
    /// Optional marker character prefixing the row count in array/table headers (e.g. `#`
    /// produces `[#3]` instead of `[3]`).
    pub length_marker: Option<char>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: None,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (2-space indent, comma delimiter, no length marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width, in spaces, per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for arrays and tables.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets an optional length marker character for arrays.
    ///
    /// When set, array lengths are prefixed with this character (e.g. `[#3]` instead of `[3]`).
    #[must_use]
    pub fn with_length_marker(mut self, marker: char) -> Self {
        self.length_marker = Some(marker);
        self
    }
}

/// Configuration for [`crate::parser::decode`] and the serde-facing `from_*` functions.
///
/// # Examples
///
/// ```rust
/// use serde_toon::DecodeOptions;
///
/// let options = DecodeOptions::new().strict();
/// assert!(options.strict);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// When `true`, tabs in leading indentation, non-multiple indentation, declared/actual
    /// array length mismatches, and blank lines inside array bodies are fatal errors instead
    /// of being tolerated.
    pub strict: bool,
    /// The indentation width strict mode validates indentation against. Ignored in lenient mode.
    pub indent: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict: false,
            indent: 2,
        }
    }
}

impl DecodeOptions {
    /// Creates default (lenient) decode options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables strict mode.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Sets the indentation width strict mode validates against.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
