//! Quoting and escaping policy shared by the encoder and the decoder's scanner.
//!
//! TOON only quotes a string when leaving it bare would be ambiguous with a structural token,
//! a reserved word, or a number. Everything else — including most punctuation, unicode text,
//! and strings containing a colon that isn't followed by a space — is written bare. This keeps
//! typical LLM-authored or LLM-consumed data close to its natural form instead of drowning it
//! in quotes the way a naive CSV-style quoter would.

use crate::options::Delimiter;

const RESERVED_WORDS: [&str; 3] = ["true", "false", "null"];

/// Returns `true` if `s` looks like a complete numeric literal (integer or float, with
/// optional leading `-`/`+` and exponent) per the same grammar the decoder uses to recognize
/// bare numbers. A string that merely starts with a digit isn't enough — `"1.2.3"` is safe to
/// leave unquoted, `"1.2"` is not.
#[must_use]
pub fn looks_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    if bytes[i] == b'+' || bytes[i] == b'-' {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Returns `true` if `s` reads as a full ISO-8601 timestamp (`YYYY-MM-DDTHH:MM:SS[...]`),
/// the one shape in which an unescaped `:` is still safe to leave bare.
#[must_use]
pub fn looks_like_iso8601_timestamp(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 19 {
        return false;
    }
    let digit = |i: usize| b.get(i).is_some_and(u8::is_ascii_digit);
    (0..4).all(digit)
        && b[4] == b'-'
        && (5..7).all(digit)
        && b[7] == b'-'
        && (8..10).all(digit)
        && (b[10] == b'T' || b[10] == b't')
        && (11..13).all(digit)
        && b[13] == b':'
        && (14..16).all(digit)
        && b[16] == b':'
        && (17..19).all(digit)
}

/// Decides whether `value` can be written bare under `delimiter`, per the eight conditions of
/// the TOON quoting policy:
///
/// 1. non-empty
/// 2. equal to its own trim (no leading/trailing whitespace)
/// 3. not one of the reserved words `true`/`false`/`null`
/// 4. doesn't parse as a number
/// 5. contains no unescaped `:` unless the whole string is an ISO-8601 timestamp
/// 6. contains no structural or control character (`,`, `[`, `]`, `{`, `}`, `"`, newline, tab,
///    other C0 controls)
/// 7. doesn't contain the currently active delimiter character
/// 8. doesn't start with `-` (which would be mistaken for a list item marker)
#[must_use]
pub fn is_safe_unquoted(value: &str, delimiter: Delimiter) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.trim() != value {
        return false;
    }
    if RESERVED_WORDS.contains(&value) {
        return false;
    }
    if looks_numeric(value) {
        return false;
    }
    if value.contains(':') && !looks_like_iso8601_timestamp(value) {
        return false;
    }
    if value.chars().any(|c| {
        matches!(c, ',' | '[' | ']' | '{' | '}' | '"' | '\n' | '\r' | '\t') || c.is_control()
    }) {
        return false;
    }
    if value.contains(delimiter.as_char()) {
        return false;
    }
    if value.starts_with('-') {
        return false;
    }
    true
}

/// Pattern an object key must match to stay unquoted: `[A-Za-z_][A-Za-z0-9_.]*`.
#[must_use]
pub fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Quotes `key` with `escape_string` if it doesn't match the bare-key pattern.
#[must_use]
pub fn encode_key(key: &str) -> String {
    if is_bare_key(key) {
        key.to_string()
    } else {
        escape_string(key)
    }
}

/// Wraps `s` in double quotes, escaping only `\"`, `\\`, `\n`, `\r`, and `\t` — the narrow
/// escape set TOON uses. Unlike JSON, there is no `\b`, `\f`, `\0`, or `\uXXXX` escape; any
/// other control character is written through literally (it will already have been caught by
/// [`is_safe_unquoted`] if it would have made the value ambiguous).
#[must_use]
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Reverses [`escape_string`] on the inner content of a quoted string (without the surrounding
/// quotes). Returns `None` on an invalid escape sequence or a trailing, unterminated backslash.
#[must_use]
pub fn unescape_string(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Formats a finite `f64` the way the encoder emits numbers: shortest round-trippable decimal,
/// no exponent notation, `-0.0` collapsed to `0`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}
