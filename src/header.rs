//! Shared array/table header grammar.
//!
//! Both the encoder and the scanner agree on one header shape so that anything the encoder
//! writes, the scanner can read back:
//!
//! ```text
//! [key][#]N[delim]][{fields}]: [inline-values]
//! ```
//!
//! e.g. `tags[3]: a,b,c`, `items[#2]{id,name}:`, `rows[3|]{a,b}:`.

use crate::options::Delimiter;

/// A parsed array or table header line (the part before any row/value content).
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayHeader {
    /// The key preceding `[`, for a `key[N]:` header. `None` for a bare list-item array header.
    pub key: Option<String>,
    pub length: usize,
    /// Whether the header used a length marker (`[#3]` vs `[3]`).
    pub length_marker: bool,
    pub delimiter: Delimiter,
    /// Field names from a `{a,b,c}` tabular header, in declaration order.
    pub fields: Option<Vec<String>>,
    /// Trailing text after the `:`, for an inline primitive-array header (`tags[3]: a,b,c`).
    pub inline_values: Option<String>,
}

/// Formats a header line body (everything from `[` onward; the caller prepends `key: ` or
/// `key` as appropriate). `length_marker` is the `EncodeOptions::length_marker` character.
#[must_use]
pub fn format_header(
    length: usize,
    delimiter: Delimiter,
    length_marker: Option<char>,
    fields: Option<&[String]>,
) -> String {
    let mut out = String::new();
    out.push('[');
    if let Some(marker) = length_marker {
        out.push(marker);
    }
    out.push_str(&length.to_string());
    if let Some(marker) = delimiter.header_marker() {
        out.push(marker);
    }
    out.push(']');
    if let Some(fields) = fields {
        out.push('{');
        out.push_str(
            &fields
                .iter()
                .map(|f| crate::quoting::encode_key(f))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push('}');
    }
    out.push(':');
    out
}

/// Parses a header appearing after `key` (or at the start of a list-item line) of the form
/// `[[#]N[delim]][{fields}]:[ values]`. Returns `None` if `s` doesn't start with `[`.
///
/// `key` is supplied by the caller (the scanner already split it off while looking for a
/// leading `name[...`), so this function only has to make sense of the bracketed part onward.
#[must_use]
pub fn parse_header(key: Option<String>, s: &str) -> Option<ArrayHeader> {
    let rest = s.strip_prefix('[')?;
    let close = rest.find(']')?;
    let bracket_body = &rest[..close];
    let after_bracket = &rest[close + 1..];

    let (length_marker, digits_and_delim) = match bracket_body.strip_prefix('#') {
        Some(r) => (true, r),
        None => (false, bracket_body),
    };

    let digit_end = digits_and_delim
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits_and_delim.len());
    let (digits, delim_str) = digits_and_delim.split_at(digit_end);
    let length: usize = digits.parse().ok()?;

    let delimiter = if delim_str.is_empty() {
        Delimiter::Comma
    } else {
        let mut chars = delim_str.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Delimiter::from_header_marker(c)?
    };

    let (fields, after_fields) = if let Some(body) = after_bracket.strip_prefix('{') {
        let end = find_unquoted_brace_close(body)?;
        let field_list = split_field_list(&body[..end]);
        (Some(field_list), &body[end + 1..])
    } else {
        (None, after_bracket)
    };

    let after_colon = after_fields.strip_prefix(':')?;
    let inline = after_colon.trim_start();
    let inline_values = if inline.is_empty() {
        None
    } else {
        Some(inline.to_string())
    };

    Some(ArrayHeader {
        key,
        length,
        length_marker,
        delimiter,
        fields,
        inline_values,
    })
}

/// Finds the index of the `}` that closes a `{fields}` list, skipping over any `}` that appears
/// inside a quoted field name.
fn find_unquoted_brace_close(body: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if in_quotes {
            if c == '\\' {
                chars.next();
            } else if c == '"' {
                in_quotes = false;
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == '}' {
            return Some(i);
        }
    }
    None
}

/// Splits a `{fields}` body on commas, leaving quoted field names (and their escapes) intact so
/// a field name can itself contain a comma or a `}`, then unquotes/unescapes each field the way
/// [`crate::quoting::encode_key`] quoted it on the way out.
fn split_field_list(body: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if in_quotes {
            current.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            } else if c == '"' {
                in_quotes = false;
            }
        } else if c == '"' {
            in_quotes = true;
            current.push(c);
        } else if c == ',' {
            out.push(decode_field_name(std::mem::take(&mut current).trim()));
        } else {
            current.push(c);
        }
    }
    out.push(decode_field_name(current.trim()));
    out
}

/// Reverses `encode_key`'s quoting for one field name: a quoted field is unescaped back to its
/// literal name; a bare field is already literal.
fn decode_field_name(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        if let Some(s) = crate::quoting::unescape_string(&raw[1..raw.len() - 1]) {
            return s;
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_parse_round_trip_comma_inline() {
        let header = format_header(3, Delimiter::Comma, None, None);
        assert_eq!(header, "[3]:");
        let parsed = parse_header(None, &header).unwrap();
        assert_eq!(parsed.length, 3);
        assert_eq!(parsed.delimiter, Delimiter::Comma);
        assert!(parsed.fields.is_none());
    }

    #[test]
    fn format_and_parse_tabular_with_pipe_and_marker() {
        let fields = vec!["id".to_string(), "name".to_string()];
        let header = format_header(2, Delimiter::Pipe, Some('#'), Some(&fields));
        assert_eq!(header, "[#2|]{id,name}:");
        let parsed = parse_header(Some("items".to_string()), &header).unwrap();
        assert_eq!(parsed.key.as_deref(), Some("items"));
        assert_eq!(parsed.length, 2);
        assert!(parsed.length_marker);
        assert_eq!(parsed.delimiter, Delimiter::Pipe);
        assert_eq!(parsed.fields, Some(fields));
    }

    #[test]
    fn format_and_parse_round_trip_quoted_field_names() {
        let fields = vec!["a,b".to_string(), "has space".to_string(), "c}d".to_string()];
        let header = format_header(1, Delimiter::Comma, None, Some(&fields));
        assert_eq!(header, "[1]{\"a,b\",\"has space\",\"c}d\"}:");
        let parsed = parse_header(None, &header).unwrap();
        assert_eq!(parsed.fields, Some(fields));
    }

    #[test]
    fn parse_inline_values() {
        let parsed = parse_header(Some("tags".to_string()), "[3]: a,b,c").unwrap();
        assert_eq!(parsed.inline_values.as_deref(), Some("a,b,c"));
    }

    #[test]
    fn parse_rejects_non_header() {
        assert!(parse_header(None, "not a header").is_none());
    }
}
