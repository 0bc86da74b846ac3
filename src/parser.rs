//! Parser: reassembles a [`Value`] tree from scanned lines.
//!
//! The parser is a small recursive-descent reader over [`scanner::Line`]s. Nesting is carried
//! entirely by indentation — there's no explicit block-close token — so each recursive call
//! learns its block's indent from the first line it sees and treats any later line at a lower
//! indent as the end of the block. A change to some *other* indent at the same level (neither
//! the established block indent nor a return to the parent's) is a syntax error.
//!
//! Four line shapes are recognized, in [`LineKind`]: a `- ` list item, a bracketed array header
//! (with or without a leading key), a `key: value`/`key:` pair, and — only at the top of the
//! document — a single bare scalar with no key at all.

use crate::error::{Error, Result};
use crate::header::{self, ArrayHeader};
use crate::map::ToonMap;
use crate::options::DecodeOptions;
use crate::quoting;
use crate::scanner::{self, Line};
use crate::value::Value;

#[derive(Debug)]
enum LineKind {
    ListItem(String),
    ArrayHeader(ArrayHeader),
    KeyValue { key: String, value: Option<String> },
}

/// Decodes `text` into a [`Value`] tree. This is the pure-core counterpart to
/// [`crate::encode::encode`] — the single function every `from_*` entry point in the crate root
/// and [`crate::de::Deserializer`] funnels through.
pub fn decode(text: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = scanner::scan(text, options)?;
    let mut parser = Parser {
        lines: &lines,
        pos: 0,
        options,
    };
    parser.skip_blank();

    let Some(first) = parser.lines.get(parser.pos) else {
        return Ok(Value::Null);
    };
    if first.indent != 0 {
        return Err(Error::invalid_format(
            first.line_no,
            first.indent + 1,
            "the document must not be indented at the top level",
        ));
    }
    let content = first.content.clone();
    let line_no = first.line_no;

    let value = match classify_line(&content) {
        Some(LineKind::ArrayHeader(h)) if h.key.is_none() => {
            parser.pos += 1;
            parser.parse_array_from_header(&h, None, line_no)?
        }
        Some(LineKind::KeyValue { .. }) | Some(LineKind::ArrayHeader(_)) => parser.parse_object(None)?,
        Some(LineKind::ListItem(_)) => {
            return Err(Error::syntax(
                line_no,
                1,
                "a list item cannot appear outside of an array body",
            ));
        }
        None => {
            if parser.lines[parser.pos + 1..].iter().all(|l| l.content.is_empty()) {
                parser.pos = parser.lines.len();
                parse_scalar(&content)
            } else {
                return Err(Error::syntax(
                    line_no,
                    1,
                    "expected 'key: value', an array header, or a single scalar value",
                ));
            }
        }
    };

    parser.skip_blank();
    if parser.options.strict {
        if let Some(trailing) = parser.lines.get(parser.pos) {
            return Err(Error::syntax(trailing.line_no, 1, "unexpected trailing content"));
        }
    }
    Ok(value)
}

struct Parser<'a> {
    lines: &'a [Line],
    pos: usize,
    options: &'a DecodeOptions,
}

impl<'a> Parser<'a> {
    fn skip_blank(&mut self) {
        while let Some(l) = self.lines.get(self.pos) {
            if l.content.is_empty() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Like [`Self::skip_blank`], but a blank line found while inside an array body is fatal in
    /// strict mode rather than silently skipped.
    fn skip_blank_in_array(&mut self) -> Result<()> {
        while let Some(l) = self.lines.get(self.pos) {
            if l.content.is_empty() {
                if self.options.strict {
                    return Err(Error::invalid_format(l.line_no, 1, "blank line inside an array body"));
                }
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn validate_child_indent(
        &self,
        parent_indent: Option<usize>,
        child_indent: usize,
        line_no: usize,
    ) -> Result<()> {
        match parent_indent {
            Some(p) => {
                if child_indent <= p {
                    return Err(Error::invalid_format(line_no, child_indent + 1, "expected an indented block"));
                }
                if self.options.strict {
                    let step = child_indent - p;
                    if step != self.options.indent {
                        return Err(Error::indentation_error(line_no, child_indent + 1, self.options.indent, step, ""));
                    }
                }
            }
            None if child_indent != 0 => {
                return Err(Error::invalid_format(
                    line_no,
                    child_indent + 1,
                    "the document must not be indented at the top level",
                ));
            }
            None => {}
        }
        Ok(())
    }

    fn parse_object(&mut self, parent_indent: Option<usize>) -> Result<Value> {
        let mut map = ToonMap::new();
        self.fill_object_fields(&mut map, parent_indent)?;
        Ok(Value::Object(map))
    }

    fn fill_object_fields(&mut self, map: &mut ToonMap, parent_indent: Option<usize>) -> Result<()> {
        self.skip_blank();
        let Some(first) = self.lines.get(self.pos) else {
            return Ok(());
        };
        let block_indent = first.indent;
        // Compact-mode: with zero-width indentation, a nested object's fields sit at the same
        // column as the key that opens them (there's no column left to indent into). We only
        // relax the "strictly deeper" requirement when the parent itself is already at column 0
        // — a genuinely deeper parent still needs a genuinely deeper child.
        let is_compact_nesting = parent_indent == Some(0) && block_indent == 0;
        if let Some(p) = parent_indent {
            if block_indent <= p && !is_compact_nesting {
                return Ok(());
            }
        }
        if !is_compact_nesting {
            self.validate_child_indent(parent_indent, block_indent, first.line_no)?;
        }

        loop {
            self.skip_blank();
            let Some(line) = self.lines.get(self.pos) else { break };
            if line.indent < block_indent {
                break;
            }
            if line.indent != block_indent {
                return Err(Error::invalid_format(line.line_no, line.indent + 1, "inconsistent indentation"));
            }
            if line.content == "-" || line.content.starts_with("- ") {
                break;
            }

            let content = line.content.clone();
            let line_no = line.line_no;
            let kind = classify_line(&content)
                .ok_or_else(|| Error::syntax(line_no, 1, "expected 'key: value' or an array header"))?;
            self.pos += 1;

            match kind {
                LineKind::KeyValue { key, value: Some(raw) } => {
                    map.insert(key, parse_scalar(&raw));
                }
                LineKind::KeyValue { key, value: None } => {
                    let nested = self.parse_object(Some(block_indent))?;
                    map.insert(key, nested);
                }
                LineKind::ArrayHeader(h) => {
                    let key = h
                        .key
                        .clone()
                        .ok_or_else(|| Error::syntax(line_no, 1, "array header is missing a key"))?;
                    let value = self.parse_array_from_header(&h, Some(block_indent), line_no)?;
                    map.insert(key, value);
                }
                LineKind::ListItem(_) => {
                    return Err(Error::syntax(line_no, 1, "unexpected list item outside of an array body"));
                }
            }
        }
        Ok(())
    }

    fn parse_array_from_header(
        &mut self,
        h: &ArrayHeader,
        parent_indent: Option<usize>,
        header_line_no: usize,
    ) -> Result<Value> {
        if let Some(raw) = &h.inline_values {
            let tokens = split_delimited(raw, h.delimiter.as_char());
            if self.options.strict && tokens.len() != h.length {
                return Err(Error::count_mismatch(header_line_no, h.length, tokens.len()));
            }
            let values = tokens.iter().map(|t| parse_scalar(t.trim())).collect();
            return Ok(Value::Array(values));
        }

        if h.length == 0 {
            return Ok(Value::Array(Vec::new()));
        }

        if let Some(fields) = &h.fields {
            return self.parse_tabular_rows(fields, h.length, h.delimiter.as_char(), parent_indent, header_line_no);
        }

        self.parse_list_items(h.length, parent_indent, header_line_no)
    }

    fn parse_tabular_rows(
        &mut self,
        fields: &[String],
        declared_len: usize,
        delim: char,
        parent_indent: Option<usize>,
        header_line_no: usize,
    ) -> Result<Value> {
        self.skip_blank_in_array()?;
        let Some(first) = self.lines.get(self.pos) else {
            return Err(Error::unexpected_eof(header_line_no, 1, "tabular array rows", ""));
        };
        let body_indent = first.indent;
        self.validate_child_indent(parent_indent, body_indent, first.line_no)?;

        let mut rows = Vec::new();
        loop {
            self.skip_blank_in_array()?;
            let Some(line) = self.lines.get(self.pos) else { break };
            if line.indent != body_indent {
                break;
            }
            let tokens = split_delimited(&line.content, delim);
            if self.options.strict && tokens.len() != fields.len() {
                return Err(Error::count_mismatch(line.line_no, fields.len(), tokens.len()));
            }
            let mut obj = ToonMap::new();
            for (field, token) in fields.iter().zip(tokens.iter()) {
                obj.insert(field.clone(), parse_scalar(token.trim()));
            }
            rows.push(Value::Object(obj));
            self.pos += 1;
        }

        if self.options.strict && rows.len() != declared_len {
            return Err(Error::count_mismatch(header_line_no, declared_len, rows.len()));
        }
        Ok(Value::Array(rows))
    }

    fn parse_list_items(
        &mut self,
        declared_len: usize,
        parent_indent: Option<usize>,
        header_line_no: usize,
    ) -> Result<Value> {
        self.skip_blank_in_array()?;
        let Some(first) = self.lines.get(self.pos) else {
            return Err(Error::unexpected_eof(header_line_no, 1, "array list items", ""));
        };
        let body_indent = first.indent;
        self.validate_child_indent(parent_indent, body_indent, first.line_no)?;

        let mut items = Vec::new();
        loop {
            self.skip_blank_in_array()?;
            let Some(line) = self.lines.get(self.pos) else { break };
            if line.indent != body_indent {
                break;
            }
            if !(line.content == "-" || line.content.starts_with("- ")) {
                break;
            }
            let rest = line.content.strip_prefix('-').unwrap().trim_start().to_string();
            let line_no = line.line_no;
            self.pos += 1;
            let item = self.parse_list_item_rest(&rest, body_indent, line_no)?;
            items.push(item);
        }

        // A nested array can legitimately span more physical rows than its own declared length
        // implies for the *outer* count check, so outer arrays containing nested arrays skip
        // the strict length check rather than mis-declaring a violation.
        let has_nested_array = items.iter().any(Value::is_array);
        if self.options.strict && !has_nested_array && items.len() != declared_len {
            return Err(Error::count_mismatch(header_line_no, declared_len, items.len()));
        }
        Ok(Value::Array(items))
    }

    fn parse_list_item_rest(&mut self, rest: &str, dash_indent: usize, line_no: usize) -> Result<Value> {
        if rest.is_empty() {
            self.skip_blank();
            if let Some(line) = self.lines.get(self.pos) {
                if line.indent > dash_indent {
                    return self.parse_object(Some(dash_indent));
                }
            }
            return Ok(Value::Object(ToonMap::new()));
        }

        match classify_line(rest) {
            Some(LineKind::ArrayHeader(h)) if h.key.is_none() => {
                self.parse_array_from_header(&h, Some(dash_indent), line_no)
            }
            Some(LineKind::ArrayHeader(h)) => {
                let key = h.key.clone().expect("checked by the guard above");
                let mut map = ToonMap::new();
                // The fused key sits one logical level deeper than the list item itself (the
                // encoder's `write_field` call for it uses `indent_level + 1`), so any array
                // body nested under it is expected a further level deeper still, not merely one
                // step past the `- ` column.
                let value =
                    self.parse_array_from_header(&h, Some(dash_indent + self.options.indent), line_no)?;
                map.insert(key, value);
                self.fill_object_fields(&mut map, Some(dash_indent))?;
                Ok(Value::Object(map))
            }
            Some(LineKind::KeyValue { key, value: Some(raw) }) => {
                let mut map = ToonMap::new();
                map.insert(key, parse_scalar(&raw));
                self.fill_object_fields(&mut map, Some(dash_indent))?;
                Ok(Value::Object(map))
            }
            Some(LineKind::KeyValue { key, value: None }) => {
                let mut map = ToonMap::new();
                // Same depth+2 reasoning as above: the fused key's own nested object body goes
                // one level past the fused key's logical depth, not one level past the `- `.
                let nested = self.parse_object(Some(dash_indent + self.options.indent))?;
                map.insert(key, nested);
                self.fill_object_fields(&mut map, Some(dash_indent))?;
                Ok(Value::Object(map))
            }
            Some(LineKind::ListItem(_)) | None => Ok(parse_scalar(rest)),
        }
    }
}

/// Classifies one line's (already indentation-stripped) content.
fn classify_line(content: &str) -> Option<LineKind> {
    if content == "-" || content.starts_with("- ") {
        let rest = content.strip_prefix('-').unwrap().trim_start().to_string();
        return Some(LineKind::ListItem(rest));
    }
    if content.starts_with('[') {
        let h = header::parse_header(None, content)?;
        return Some(LineKind::ArrayHeader(h));
    }
    let (key, rest) = extract_key(content)?;
    let rest = rest.trim_start();
    if rest.starts_with('[') {
        let h = header::parse_header(Some(key), rest)?;
        return Some(LineKind::ArrayHeader(h));
    }
    let rest = rest.strip_prefix(':')?;
    let value = rest.trim_start();
    Some(LineKind::KeyValue {
        key,
        value: if value.is_empty() { None } else { Some(value.to_string()) },
    })
}

/// Splits a bare or quoted key off the front of `content`, returning the key and the unconsumed
/// remainder. Returns `None` if `content` doesn't start with a recognizable key token.
fn extract_key(content: &str) -> Option<(String, &str)> {
    if let Some(rest) = content.strip_prefix('"') {
        let mut iter = rest.char_indices();
        while let Some((i, c)) = iter.next() {
            if c == '\\' {
                iter.next();
                continue;
            }
            if c == '"' {
                let key = quoting::unescape_string(&rest[..i])?;
                return Some((key, &rest[i + 1..]));
            }
        }
        None
    } else {
        let end = content.find(|c: char| c == '[' || c == ':').unwrap_or(content.len());
        if end == 0 {
            return None;
        }
        let key = content[..end].trim_end().to_string();
        if key.is_empty() {
            return None;
        }
        Some((key, &content[end..]))
    }
}

/// Splits `raw` on `delim`, leaving quoted segments (and their escapes) intact so a quoted
/// value can itself contain the active delimiter.
fn split_delimited(raw: &str, delim: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars();
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
        } else if c == delim {
            out.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    out.push(current);
    out
}

/// Decodes leading-zero multi-digit literals (`"007"`) as strings rather than numbers: TOON
/// preserves them exactly, on the theory that a value written with a leading zero was probably
/// an identifier, not an integer with floating-point-safe round-tripping in mind.
fn has_ambiguous_leading_zero(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let digits = s.split(['.', 'e', 'E']).next().unwrap_or(s);
    digits.len() > 1 && digits.starts_with('0')
}

/// Parses one already-trimmed scalar token: a quoted string, `null`/`true`/`false`, a number, or
/// (falling through) a bare string.
fn parse_scalar(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::String(String::new());
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        if let Some(s) = quoting::unescape_string(&raw[1..raw.len() - 1]) {
            return Value::String(s);
        }
    }
    match raw {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if quoting::looks_numeric(raw) && !has_ambiguous_leading_zero(raw) {
        if let Ok(f) = raw.parse::<f64>() {
            return Value::from_f64_normalized(f);
        }
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Value {
        super::decode(text, &DecodeOptions::default()).unwrap()
    }

    #[test]
    fn parses_flat_object() {
        let value = decode("id: 1\nname: Ada\nactive: true");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("id"), Some(&Value::Number(1.0)));
        assert_eq!(obj.get("name"), Some(&Value::String("Ada".to_string())));
        assert_eq!(obj.get("active"), Some(&Value::Bool(true)));
    }

    #[test]
    fn parses_nested_object() {
        let value = decode("outer:\n  inner: 1");
        let outer = value.as_object().unwrap().get("outer").unwrap().as_object().unwrap();
        assert_eq!(outer.get("inner"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn parses_inline_array() {
        let value = decode("tags[3]: a,b,c");
        let tags = value.as_object().unwrap().get("tags").unwrap().as_array().unwrap();
        assert_eq!(
            tags,
            &vec![
                Value::String("a".to_string()),
                Value::String("b".to_string()),
                Value::String("c".to_string())
            ]
        );
    }

    #[test]
    fn parses_tabular_array() {
        let value = decode("items[2]{id,qty}:\n  1,5\n  2,3");
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_object().unwrap().get("id"), Some(&Value::Number(1.0)));
        assert_eq!(items[1].as_object().unwrap().get("qty"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn parses_list_with_fused_first_field() {
        let value = decode("items[2]:\n  - id: 1\n  - id: 2\n    extra: true");
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        assert_eq!(items[0].as_object().unwrap().get("id"), Some(&Value::Number(1.0)));
        let second = items[1].as_object().unwrap();
        assert_eq!(second.get("id"), Some(&Value::Number(2.0)));
        assert_eq!(second.get("extra"), Some(&Value::Bool(true)));
    }

    #[test]
    fn parses_empty_array_and_object() {
        let value = decode("tags[0]:\nmeta:");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("tags"), Some(&Value::Array(Vec::new())));
        assert_eq!(obj.get("meta"), Some(&Value::Object(ToonMap::new())));
    }

    #[test]
    fn parses_root_scalar_document() {
        assert_eq!(decode("42"), Value::Number(42.0));
        assert_eq!(decode("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn parses_quoted_string_with_escapes() {
        let value = decode("note: \"a, b\\nc\"");
        assert_eq!(
            value.as_object().unwrap().get("note"),
            Some(&Value::String("a, b\nc".to_string()))
        );
    }

    #[test]
    fn leading_zero_preserved_as_string() {
        let value = decode("code: 007");
        assert_eq!(
            value.as_object().unwrap().get("code"),
            Some(&Value::String("007".to_string()))
        );
    }

    #[test]
    fn strict_mode_rejects_count_mismatch() {
        let options = DecodeOptions::default().strict();
        let result = super::decode("tags[3]: a,b", &options);
        assert!(matches!(result, Err(Error::CountMismatch { declared: 3, found: 2, .. })));
    }

    #[test]
    fn strict_mode_rejects_tabular_row_cell_count_mismatch() {
        let options = DecodeOptions::default().strict();
        let result = super::decode("items[2]{id,qty}:\n  1,5\n  2", &options);
        assert!(matches!(result, Err(Error::CountMismatch { declared: 2, found: 1, .. })));
    }

    #[test]
    fn lenient_mode_tolerates_tabular_row_cell_count_mismatch() {
        let value = decode("items[2]{id,qty}:\n  1,5\n  2");
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        assert_eq!(items[0].as_object().unwrap().get("qty"), Some(&Value::Number(5.0)));
        assert_eq!(items[1].as_object().unwrap().get("id"), Some(&Value::Number(2.0)));
        assert_eq!(items[1].as_object().unwrap().get("qty"), None);
    }

    #[test]
    fn lenient_mode_tolerates_count_mismatch() {
        let value = decode("tags[3]: a,b");
        let tags = value.as_object().unwrap().get("tags").unwrap().as_array().unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn strict_mode_rejects_irregular_indent() {
        let options = DecodeOptions::default().strict();
        let result = super::decode("outer:\n   inner: 1", &options);
        assert!(matches!(result, Err(Error::IndentationError { .. })));
    }

    #[test]
    fn parses_list_item_fused_nested_object_at_depth_plus_two() {
        let value = decode("items[1]:\n  - obj:\n      x: 1\n    y: 2");
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        let item = items[0].as_object().unwrap();
        let obj = item.get("obj").unwrap().as_object().unwrap();
        assert_eq!(obj.get("x"), Some(&Value::Number(1.0)));
        assert_eq!(item.get("y"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn parses_list_item_fused_nested_array_at_depth_plus_two() {
        let value = decode("items[1]:\n  - rows[2]:\n      - 1\n      - a: 1\n    y: 2");
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        let item = items[0].as_object().unwrap();
        let rows = item.get("rows").unwrap().as_array().unwrap();
        assert_eq!(rows[0], Value::Number(1.0));
        assert_eq!(rows[1].as_object().unwrap().get("a"), Some(&Value::Number(1.0)));
        assert_eq!(item.get("y"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn compact_mode_recovers_nested_objects_at_column_zero() {
        // With `indent: 0` a nested object has nowhere to indent into, so its fields
        // share column 0 with the key that opens them.
        let value = decode("a:\nb:\nc: 1");
        let a = value.as_object().unwrap().get("a").unwrap().as_object().unwrap();
        let b = a.get("b").unwrap().as_object().unwrap();
        assert_eq!(b.get("c"), Some(&Value::Number(1.0)));
    }
}
