//! TOON format reference
//!
//! This module documents the grammar this crate reads and writes. It contains no
//! implementation; see [`crate::encode`] for the writer and [`crate::parser`] for the reader.
//!
//! # Value domain
//!
//! Every TOON document represents exactly one [`crate::Value`]: null, a boolean, a number
//! (always `f64` internally — there is no separate integer type), a string, an array, or an
//! object. Object field order is preserved, both when read from text and when built from a
//! `Serialize` implementor — fields are never reordered or sorted.
//!
//! # Objects
//!
//! Objects are newline-delimited `key: value` pairs, nested objects indented one level deeper
//! than their parent key:
//!
//! ```text
//! name: Alice
//! age: 30
//! address:
//!   city: Springfield
//!   zip: "00501"
//! ```
//!
//! A key is written bare when it matches `[A-Za-z_][A-Za-z0-9_.]*`; anything else (digits
//! first, hyphens, spaces, empty) is quoted like a string value.
//!
//! # Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `value: null` |
//! | Boolean | `true` / `false` | `active: true` |
//! | Number | decimal, no exponent notation | `count: 42`, `price: 19.99` |
//! | String | bare or `"quoted"` | `name: Alice` |
//!
//! Numbers are always written in plain decimal form (`1000000`, never `1e6`); `-0` collapses
//! to `0`. Integers outside the safe-integer range (±2^53−1) lose exactness once represented
//! as `f64`, so values built from `i128`/`u128` outside that range are normalized to a quoted
//! decimal string instead, preserving their exact digits at the cost of the `Number` type.
//!
//! # Strings
//!
//! Strings are unquoted whenever that would be unambiguous. A string is quoted when it:
//!
//! - is empty, or starts/ends with whitespace
//! - contains the active delimiter, a colon, a quote, a backslash, or a control character
//! - equals a reserved word (`true`, `false`, `null`)
//! - would parse as a number (`"42"`, `"-3.14"`) — except a run of digits with a leading zero
//!   (`"007"`), which parses back as a string on its own and so never needs quoting
//! - starts with `- ` (would read as a list-item marker) or with `[`/`{` (would read as a
//!   header)
//!
//! Quoted strings use only `\"`, `\\`, `\n`, `\r`, and `\t` escapes; any other backslash
//! sequence is a decode error.
//!
//! # Arrays
//!
//! An array picks one of three shapes, decided purely from its contents:
//!
//! **Inline** — every element a primitive:
//!
//! ```text
//! tags[3]: admin,user,guest
//! ```
//!
//! **Tabular** — every element an object, all sharing the same field set with only primitive
//! values (TOON's signature compaction: the keys are written once, not once per element):
//!
//! ```text
//! items[2]{id,name,price}:
//!   1,Widget,9.99
//!   2,Gadget,14.99
//! ```
//!
//! **List** — anything else (mixed types, nested arrays/objects, objects whose field sets
//! differ):
//!
//! ```text
//! items[2]:
//!   - id: 1
//!     tags[2]: a,b
//!   - id: 2
//!     tags[0]:
//! ```
//!
//! A list item that is a non-empty object fuses its first field onto the `- ` line; remaining
//! fields are indented one level past the hyphen.
//!
//! An empty array is always `name[0]:` regardless of what shape it would otherwise have taken.
//!
//! # Delimiters
//!
//! Inline and tabular arrays use one of three delimiters between elements/cells. Comma is the
//! default and is never marked in the header; tab and pipe are marked so a reader without
//! external configuration can still recover the right delimiter:
//!
//! | Delimiter | Character | Header marker |
//! |-----------|-----------|----------------|
//! | Comma (default) | `,` | none — `[3]` |
//! | Tab | `\t` | `[3\t]` |
//! | Pipe | `\|` | `[3\|]` |
//!
//! # Length markers
//!
//! [`crate::options::EncodeOptions::with_length_marker`] optionally prefixes the row count,
//! e.g. `[#3]` instead of `[3]`, purely as a visual cue; it carries no semantic weight and
//! parses the same either way.
//!
//! # Indentation
//!
//! [`crate::options::EncodeOptions::indent`] controls spaces per nesting level (default 2).
//! On the decode side, lenient mode (the default) tolerates any consistent indentation,
//! including tabs (weighted as 4 columns) and indents that aren't exact multiples of the
//! configured width; strict mode ([`crate::options::DecodeOptions::strict`]) rejects tabs and
//! irregular indentation outright.
//!
//! # Rust enum mapping
//!
//! This crate extends the grammar above (rather than the TOON format itself) to round-trip
//! Rust's four enum-variant shapes:
//!
//! - unit variant → bare string: `status: Active`
//! - newtype variant → single-key object: `result: { Err: "not found" }`
//! - tuple variant → single-key object with an array value: `point: { Pair: [1,2] }`
//! - struct variant → single-key object with an object value: `shape: { Circle: { radius: 2 } }`
//!
//! # Strict-mode invariants
//!
//! Only enforced when [`crate::options::DecodeOptions::strict`] is set; lenient decoding
//! tolerates all of the following:
//!
//! - tab characters in leading indentation
//! - indentation that isn't an exact multiple of the configured indent width
//! - an array/table header's declared length disagreeing with the number of rows actually
//!   present
//!
//! # Limitations
//!
//! - Map keys must stringify to a scalar (string, number, or bool); arrays, objects, and null
//!   are rejected as keys.
//! - Tabular encoding requires every element to be an object with the same field set and only
//!   primitive values; anything else falls back to list encoding.
//! - Comments are not part of the format.
