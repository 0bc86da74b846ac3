//! # serde_toon
//!
//! A Serde-compatible serialization library for the TOON (Token-Oriented Object Notation) format.
//!
//! ## What is TOON?
//!
//! TOON is a compact, indentation-structured textual format for the same six-case value domain
//! JSON covers (null, bool, number, string, array, object), designed to spend fewer tokens than
//! JSON when the data is fed to or produced by a language model, while staying unambiguously
//! parseable back to the same tree.
//!
//! ## Key Features
//!
//! - **Token-Efficient**: minimal punctuation; homogeneous object arrays collapse into a single
//!   header plus one row per element instead of repeating every key
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]` the same way
//!   `serde_json` does
//! - **One canonical code path**: encoding always goes through a [`Value`] tree, and decoding
//!   always produces one before handing it to serde — there's a single place that understands
//!   TOON's grammar on each side
//! - **Dynamic values**: [`Value`] plus the [`toon!`] macro for building or inspecting TOON data
//!   without a fixed Rust type
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_toon::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let toon_string = to_string(&user).unwrap();
//! assert_eq!(toon_string, "id: 123\nname: Alice\nactive: true");
//!
//! let user_back: User = from_str(&toon_string).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Arrays of uniform objects become tables
//!
//! ```rust
//! use serde::Serialize;
//! use serde_toon::to_string;
//!
//! #[derive(Serialize)]
//! struct Product { id: u32, name: String, price: f64 }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let toon = to_string(&products).unwrap();
//! assert_eq!(toon, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99");
//! ```
//!
//! ### Dynamic values with the `toon!` macro
//!
//! ```rust
//! use serde_toon::{toon, Value};
//!
//! let data = toon!({
//!     "name": "Alice",
//!     "age": 30
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Demos
//!
//! See the `demos/` directory for runnable, focused walkthroughs:
//!
//! - **`simple.rs`** — basic serialization and deserialization
//! - **`macro.rs`** — building values with the `toon!` macro
//! - **`tabular_arrays.rs`** — TOON's tabular-array encoding
//! - **`dynamic_values.rs`** — working with [`Value`] dynamically
//! - **`custom_options.rs`** — customizing delimiters and indentation
//! - **`token_efficiency.rs`** — TOON vs JSON token counts
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod encode;
pub mod error;
pub mod header;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod quoting;
pub mod scanner;
pub mod ser;
pub mod spec;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::{Serializer, ToonValueSerializer};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a TOON string using default encode options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the TOON value domain (e.g. a map
/// with a structural key, or an unsupported enum shape).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a TOON string with custom encode options.
///
/// # Examples
///
/// ```rust
/// use serde_toon::{to_string_with_options, EncodeOptions, Delimiter};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
/// let toon = to_string_with_options(&point, &options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = ser::to_toon_value(value)?;
    Ok(encode::encode(&tree, options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for working with TOON data dynamically when the structure isn't known at compile
/// time, or as a staging step before encoding with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_toon_value(value)
}

/// Serialize any `T: Serialize` to a writer in TOON format using default encode options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer in TOON format with custom encode options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon_string = to_string_with_options(value, options)?;
    writer.write_all(toon_string.as_bytes()).map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of TOON text, under default (lenient)
/// decode options.
///
/// # Examples
///
/// ```rust
/// use serde_toon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon = "x: 1\ny: 2";
/// let point: Point = from_str(toon).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOON, or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserialize an instance of type `T` from a string of TOON text, under custom decode options.
///
/// # Errors
///
/// Returns an error if the input is not valid TOON under the given options, or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: &DecodeOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str_with_options(s, options)?;
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an I/O stream of TOON.
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid TOON, or the data
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader.read_to_string(&mut string).map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of TOON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
