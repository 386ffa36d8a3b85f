use crate::models::{FieldDefinition, ModelDefinition, ParseResult};
use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use super::class_header::{collect_header, is_class_start, parse_header};
use super::field_parser::parse_field_statement;

/// Statements found directly in a class body
struct ClassBody {
    fields: Vec<FieldDefinition>,
    skipped: usize,
    /// Index of the first line after the body
    end: usize,
}

/// Strings and brackets left open at the end of a physical line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Continuation {
    /// Delimiter of an unterminated triple-quoted string
    string: Option<&'static str>,
    /// Brackets opened and not yet closed
    brackets: i32,
}

impl Continuation {
    /// True while the next line still belongs to the current statement
    fn is_open(&self) -> bool {
        self.string.is_some() || self.brackets > 0
    }

    /// Advance over one physical line
    fn feed(&mut self, line: &str) {
        let bytes = line.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            if let Some(delimiter) = self.string {
                match find_bytes(&bytes[i..], delimiter.as_bytes()) {
                    Some(pos) => {
                        self.string = None;
                        i += pos + delimiter.len();
                        continue;
                    }
                    None => break,
                }
            }

            let rest = &bytes[i..];
            if rest.starts_with(b"\"\"\"") {
                self.string = Some("\"\"\"");
                i += 3;
                continue;
            }
            if rest.starts_with(b"'''") {
                self.string = Some("'''");
                i += 3;
                continue;
            }

            match bytes[i] {
                b'#' => break,
                quote @ (b'"' | b'\'') => i = skip_short_string(bytes, i + 1, quote),
                b'(' | b'[' | b'{' => {
                    self.brackets += 1;
                    i += 1;
                }
                b')' | b']' | b'}' => {
                    self.brackets -= 1;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        self.brackets = self.brackets.max(0);
    }
}

/// Parse a Python source file and extract Django model classes.
///
/// Only top-level classes whose base list matches one of `model_bases` are
/// returned. Fails only when the file ends inside an open class header.
pub fn parse_models(content: &str, source_file: &Path, model_bases: &[String]) -> Result<ParseResult> {
    let lines: Vec<&str> = content.lines().collect();
    let mut result = ParseResult::new();
    let mut continuation = Continuation::default();
    let mut index = 0;

    while index < lines.len() {
        // A `class` line inside a module docstring or an open call is text
        if continuation.is_open() || !is_class_start(lines[index]) {
            continuation.feed(lines[index]);
            index += 1;
            continue;
        }

        let header_line = index + 1;
        let Some((header_text, body_start)) = collect_header(&lines, index) else {
            anyhow::bail!(
                "Unterminated class declaration at {}:{}",
                source_file.display(),
                header_line
            );
        };

        let Some(header) = parse_header(&header_text) else {
            debug!(
                "{}:{}: skipping malformed class header `{}`",
                source_file.display(),
                header_line,
                header_text
            );
            index = scan_body(&lines, body_start, Continuation::default()).end;
            continue;
        };

        // `class Tag(models.Model): name = ...` puts body statements on the header line
        let mut fields = Vec::new();
        let mut skipped = 0;
        let mut body_continuation = Continuation::default();
        if !header.inline_body.is_empty() {
            collect_statements(&header.inline_body, header_line, &mut fields, &mut skipped);
            body_continuation.feed(&header.inline_body);
        }

        let body = scan_body(&lines, body_start, body_continuation);
        index = body.end;

        if !header.is_model(model_bases) {
            debug!(
                "{}:{}: class {} is not a model (bases: {:?})",
                source_file.display(),
                header_line,
                header.name,
                header.bases
            );
            continue;
        }

        if let Some(pos) = result.models.iter().position(|m| m.name == header.name) {
            warn!(
                "{}:{}: model {} redefined; the earlier definition at line {} is dropped",
                source_file.display(),
                header_line,
                header.name,
                result.models[pos].line
            );
            result.models.remove(pos);
        }

        fields.extend(body.fields);
        result.skipped_lines += skipped + body.skipped;
        result.models.push(ModelDefinition {
            name: header.name,
            fields,
            source_file: source_file.to_path_buf(),
            line: header_line,
        });
    }

    Ok(result)
}

/// Walk a class body starting at `start` until the next top-level statement.
///
/// Only lines at the body's own indentation are statements; deeper lines
/// belong to methods, nested classes or call continuations.
fn scan_body(lines: &[&str], start: usize, mut continuation: Continuation) -> ClassBody {
    let mut fields = Vec::new();
    let mut skipped = 0;
    let mut body_indent: Option<usize> = None;
    let mut index = start;

    while index < lines.len() {
        let line = lines[index];

        if continuation.is_open() {
            continuation.feed(line);
            index += 1;
            continue;
        }

        let statement = line.trim_start();
        if statement.is_empty() || statement.starts_with('#') {
            index += 1;
            continue;
        }

        let indent = line.len() - statement.len();
        if indent == 0 {
            break;
        }

        let body_indent = *body_indent.get_or_insert(indent);
        if indent == body_indent {
            collect_statements(statement, index + 1, &mut fields, &mut skipped);
        }

        continuation.feed(statement);
        index += 1;
    }

    ClassBody {
        fields,
        skipped,
        end: index,
    }
}

/// Parse every `;`-separated statement of one line
fn collect_statements(
    text: &str,
    line: usize,
    fields: &mut Vec<FieldDefinition>,
    skipped: &mut usize,
) {
    for statement in split_statements(text) {
        match parse_field_statement(statement, line) {
            Some(field) => fields.push(field),
            None => {
                debug!("line {}: not a field statement: `{}`", line, statement);
                *skipped += 1;
            }
        }
    }
}

/// Split a line on `;` outside strings and brackets, dropping a trailing comment
fn split_statements(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut statements = Vec::new();
    let mut depth = 0;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'#' => break,
            quote @ (b'"' | b'\'') => {
                i = skip_short_string(bytes, i + 1, quote);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            b';' if depth == 0 => {
                statements.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    statements.push(text[start..i.min(bytes.len())].trim());

    statements.retain(|s| !s.is_empty());
    statements
}

/// Index just past the quote that closes a single-line string
fn skip_short_string(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
