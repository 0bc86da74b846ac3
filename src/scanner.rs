//! Scanner: splits TOON text into indentation-tagged, whitespace-trimmed lines.
//!
//! TOON's grammar is line-oriented — indentation carries nesting, so the scanner's only job is
//! to measure each line's leading indentation and hand the remainder to the parser. A leading
//! tab is fatal in strict mode; in lenient mode it is tolerated and weighted as four columns
//! (the fixed weight resolves the "how much does a tab count for" ambiguity without making
//! indentation width configurable per tab).

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// One physical line, with its leading indentation already measured and trailing whitespace
/// trimmed from its content. A blank (whitespace-only) line has `content == ""`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub line_no: usize,
    pub indent: usize,
    pub had_tab_indent: bool,
    pub content: String,
}

/// Scans `text` into [`Line`]s. Never fails in lenient mode; in strict mode, a tab found while
/// measuring leading indentation is an immediate [`Error::IndentationError`].
pub fn scan(text: &str, options: &DecodeOptions) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let mut indent = 0usize;
        let mut had_tab_indent = false;
        let mut content_start = raw.len();
        for (pos, c) in raw.char_indices() {
            match c {
                ' ' => indent += 1,
                '\t' => {
                    if options.strict {
                        return Err(Error::indentation_error(
                            line_no,
                            pos + 1,
                            options.indent,
                            indent,
                            raw,
                        ));
                    }
                    indent += 4;
                    had_tab_indent = true;
                }
                _ => {
                    content_start = pos;
                    break;
                }
            }
        }
        let content = raw[content_start..].trim_end().to_string();
        lines.push(Line {
            line_no,
            indent,
            had_tab_indent,
            content,
        });
    }
    Ok(lines)
}
