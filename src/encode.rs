//! Encoder: shape selection and line emission.
//!
//! The encoder walks a [`Value`] tree once and, at every array node, picks one of three
//! surface shapes:
//!
//! - **tabular**: a non-empty array of objects that all share the same field set with only
//!   scalar values — emitted as a `key[N]{f1,f2}:` header followed by one comma-joined row
//!   per element.
//! - **inline**: a non-empty array of scalars — emitted as `key[N]: v1,v2,v3` on one line.
//! - **list**: anything else (mixed types, nested arrays/objects, non-uniform objects) —
//!   emitted as a `key[N]:` header followed by one `- ` item per line. When a list item is a
//!   non-empty object, its first field is fused onto the `- ` line itself and the remaining
//!   fields follow as ordinary indented object fields (list-item object fusion).
//!
//! Every line is built with a single trailing-whitespace-free `String`; the final document is
//! the lines joined with `\n` — no trailing newline.

use crate::header;
use crate::map::ToonMap;
use crate::options::{Delimiter, EncodeOptions};
use crate::quoting;
use crate::value::Value;

/// Encodes `value` as a TOON document.
#[must_use]
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let mut lines = Vec::new();
    match value {
        Value::Object(map) => write_object_fields(map, 0, options, &mut lines),
        Value::Array(arr) => write_array("", arr, 0, options, &mut lines),
        scalar => lines.push(write_scalar(scalar, options.delimiter)),
    }
    lines.join("\n")
}

fn indent(level: usize, options: &EncodeOptions) -> String {
    " ".repeat(level * options.indent)
}

fn is_primitive(v: &Value) -> bool {
    !matches!(v, Value::Object(_) | Value::Array(_))
}

fn write_scalar(v: &Value, delimiter: Delimiter) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => quoting::format_number(*n),
        Value::String(s) => {
            if quoting::is_safe_unquoted(s, delimiter) {
                s.clone()
            } else {
                quoting::escape_string(s)
            }
        }
        Value::Object(_) | Value::Array(_) => {
            unreachable!("write_scalar called on a non-primitive value")
        }
    }
}

/// Returns the common field list if `arr` is eligible for tabular encoding: non-empty, every
/// element an object with exactly the first element's keys (in that order), every value a
/// scalar.
fn tabular_fields(arr: &[Value]) -> Option<Vec<String>> {
    let first_obj = arr.first()?.as_object()?;
    if first_obj.is_empty() {
        return None;
    }
    let fields: Vec<String> = first_obj.keys().cloned().collect();
    for item in arr {
        let obj = item.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        for f in &fields {
            match obj.get(f) {
                Some(v) if is_primitive(v) => {}
                _ => return None,
            }
        }
    }
    Some(fields)
}

fn write_object_fields(
    map: &ToonMap,
    indent_level: usize,
    options: &EncodeOptions,
    lines: &mut Vec<String>,
) {
    for (k, v) in map.iter() {
        let key_str = quoting::encode_key(k);
        write_field(indent(indent_level, options), &key_str, v, indent_level, options, lines);
    }
}

/// Writes one `lead + key + value` line (or, for nested object/array, a header line plus its
/// body), where `lead` is the already-built left margin — plain indentation for a normal
/// object field, or indentation plus `"- "` for a fused list-item field.
fn write_field(
    lead: String,
    key_str: &str,
    value: &Value,
    indent_level: usize,
    options: &EncodeOptions,
    lines: &mut Vec<String>,
) {
    match value {
        Value::Object(obj) if obj.is_empty() => lines.push(format!("{}{}:", lead, key_str)),
        Value::Object(obj) => {
            lines.push(format!("{}{}:", lead, key_str));
            write_object_fields(obj, indent_level + 1, options, lines);
        }
        Value::Array(arr) => {
            write_array(&format!("{}{}", lead, key_str), arr, indent_level, options, lines);
        }
        scalar => lines.push(format!("{}{}: {}", lead, key_str, write_scalar(scalar, options.delimiter))),
    }
}

fn write_array(
    prefix: &str,
    arr: &[Value],
    indent_level: usize,
    options: &EncodeOptions,
    lines: &mut Vec<String>,
) {
    let n = arr.len();
    if n == 0 {
        lines.push(format!("{}[0]:", prefix));
        return;
    }

    if let Some(fields) = tabular_fields(arr) {
        let header = header::format_header(n, options.delimiter, options.length_marker, Some(&fields));
        lines.push(format!("{}{}", prefix, header));
        let body_indent = indent(indent_level + 1, options);
        let sep = options.delimiter.as_char().to_string();
        for item in arr {
            let obj = item.as_object().expect("tabular_fields guarantees objects");
            let cells: Vec<String> = fields
                .iter()
                .map(|f| write_scalar(obj.get(f).unwrap_or(&Value::Null), options.delimiter))
                .collect();
            lines.push(format!("{}{}", body_indent, cells.join(&sep)));
        }
        return;
    }

    if arr.iter().all(is_primitive) {
        let header = header::format_header(n, options.delimiter, options.length_marker, None);
        let sep = options.delimiter.as_char().to_string();
        let values: Vec<String> = arr.iter().map(|v| write_scalar(v, options.delimiter)).collect();
        lines.push(format!("{}{} {}", prefix, header, values.join(&sep)));
        return;
    }

    let header = header::format_header(n, options.delimiter, options.length_marker, None);
    lines.push(format!("{}{}", prefix, header));
    for item in arr {
        write_list_item(item, indent_level + 1, options, lines);
    }
}

fn write_list_item(item: &Value, indent_level: usize, options: &EncodeOptions, lines: &mut Vec<String>) {
    match item {
        Value::Object(obj) if !obj.is_empty() => {
            let mut iter = obj.iter();
            let (first_key, first_value) = iter.next().expect("non-empty");
            let lead = format!("{}- ", indent(indent_level, options));
            // The fused key's own column sits one level deeper than the list item itself, so a
            // nested body under it must go a further level deeper still (depth+2 overall) to
            // clear both the "- " column and the property's own column.
            write_field(
                lead,
                &quoting::encode_key(first_key),
                first_value,
                indent_level + 1,
                options,
                lines,
            );
            for (k, v) in iter {
                write_field(
                    indent(indent_level + 1, options),
                    &quoting::encode_key(k),
                    v,
                    indent_level + 1,
                    options,
                    lines,
                );
            }
        }
        Value::Object(_) => lines.push(format!("{}-", indent(indent_level, options))),
        Value::Array(arr) => {
            let prefix = format!("{}- ", indent(indent_level, options));
            write_array(&prefix, arr, indent_level, options, lines);
        }
        scalar => lines.push(format!(
            "{}- {}",
            indent(indent_level, options),
            write_scalar(scalar, options.delimiter)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn encodes_flat_object() {
        let value = toon!({ "id": 1, "name": "Ada", "active": true });
        assert_eq!(
            encode(&value, &EncodeOptions::default()),
            "id: 1\nname: Ada\nactive: true"
        );
    }

    #[test]
    fn encodes_empty_object_and_array() {
        let value = toon!({ "tags": [], "meta": {} });
        assert_eq!(encode(&value, &EncodeOptions::default()), "tags[0]:\nmeta:");
    }

    #[test]
    fn root_empty_object_is_empty_string() {
        let value = Value::Object(ToonMap::new());
        assert_eq!(encode(&value, &EncodeOptions::default()), "");
    }

    #[test]
    fn encodes_inline_primitive_array() {
        let value = toon!({ "tags": ["a", "b", "c"] });
        assert_eq!(encode(&value, &EncodeOptions::default()), "tags[3]: a,b,c");
    }

    #[test]
    fn encodes_tabular_array() {
        let value = toon!({ "items": [{ "id": 1, "qty": 5 }, { "id": 2, "qty": 3 }] });
        assert_eq!(
            encode(&value, &EncodeOptions::default()),
            "items[2]{id,qty}:\n  1,5\n  2,3"
        );
    }

    #[test]
    fn encodes_list_for_nonuniform_objects() {
        let value = toon!({ "items": [{ "id": 1 }, { "id": 2, "extra": true }] });
        assert_eq!(
            encode(&value, &EncodeOptions::default()),
            "items[2]:\n  - id: 1\n  - id: 2\n    extra: true"
        );
    }

    #[test]
    fn quotes_ambiguous_strings() {
        let value = toon!({ "name": "true", "note": "a, b" });
        assert_eq!(
            encode(&value, &EncodeOptions::default()),
            "name: \"true\"\nnote: \"a, b\""
        );
    }

    #[test]
    fn collapses_negative_zero() {
        let value = Value::Number(-0.0);
        assert_eq!(encode(&value, &EncodeOptions::default()), "0");
    }

    #[test]
    fn list_item_fused_nested_object_indents_at_depth_plus_two() {
        let value = toon!({ "items": [{ "obj": { "x": 1 }, "y": 2 }] });
        assert_eq!(
            encode(&value, &EncodeOptions::default()),
            "items[1]:\n  - obj:\n      x: 1\n    y: 2"
        );
    }

    #[test]
    fn list_item_fused_nested_array_indents_at_depth_plus_two() {
        let value = toon!({ "items": [{ "rows": [1, { "a": 1 }], "y": 2 }] });
        assert_eq!(
            encode(&value, &EncodeOptions::default()),
            "items[1]:\n  - rows[2]:\n      - 1\n      - a: 1\n    y: 2"
        );
    }
}
