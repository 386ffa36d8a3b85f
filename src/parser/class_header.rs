//! Top-level `class` header handling: collecting multi-line headers,
//! splitting base lists and deciding whether a class is a model.

use regex::Regex;
use std::sync::LazyLock;

static CLASS_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^class\s").expect("class start pattern is valid"));

static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^class\s+([A-Za-z_]\w*)\s*").expect("class name pattern is valid")
});

/// A parsed `class Name(bases):` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    pub name: String,
    /// Positional base references, keyword arguments dropped
    pub bases: Vec<String>,
    /// Statements written after the colon on the header line
    pub inline_body: String,
}

impl ClassHeader {
    /// Check whether any base matches one of the configured model markers
    pub fn is_model(&self, markers: &[String]) -> bool {
        self.bases.iter().any(|base| is_model_base(base, markers))
    }
}

/// Check if a line opens a top-level class declaration
pub fn is_class_start(line: &str) -> bool {
    CLASS_START.is_match(line)
}

/// Collect a class header starting at `start`, following open parentheses
/// across lines.
///
/// Returns the header joined onto one line and the index of the first line
/// after it, or `None` if the file ends while a parenthesis is still open.
pub fn collect_header(lines: &[&str], start: usize) -> Option<(String, usize)> {
    let mut header = String::new();
    let mut depth: i32 = 0;

    for (index, line) in lines.iter().enumerate().skip(start) {
        let code = strip_comment(line);
        if !header.is_empty() {
            header.push(' ');
        }
        header.push_str(code.trim());

        for c in code.chars() {
            match c {
                '(' | '[' => depth += 1,
                ')' | ']' => depth -= 1,
                _ => {}
            }
        }

        if depth <= 0 {
            return Some((header, index + 1));
        }
    }

    None
}

/// Parse a joined header into its name and base list.
///
/// Returns `None` when the header is not of the shape `class Name[(...)]:`.
pub fn parse_header(header: &str) -> Option<ClassHeader> {
    let captures = CLASS_NAME.captures(header)?;
    let name = captures.get(1)?.as_str().to_string();
    let rest = &header[captures.get(0)?.end()..];

    let (bases_text, after) = if let Some(inner) = rest.strip_prefix('(') {
        let close = matching_paren(inner)?;
        (&inner[..close], &inner[close + 1..])
    } else {
        ("", rest)
    };

    let inline_body = after.trim_start().strip_prefix(':')?;

    Some(ClassHeader {
        name,
        bases: split_bases(bases_text),
        inline_body: inline_body.trim().to_string(),
    })
}

/// Check if a base reference matches one of the markers.
///
/// Qualified markers (`models.Model`) must match exactly; unqualified markers
/// (`Model`) also match the last segment of a qualified base.
pub fn is_model_base(base: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| {
        base == marker
            || (!marker.contains('.') && base.rsplit('.').next() == Some(marker.as_str()))
    })
}

/// Split a base list on top-level commas, dropping keyword arguments
fn split_bases(text: &str) -> Vec<String> {
    let mut bases = Vec::new();
    let mut current = String::new();
    let mut depth = 0;

    for c in text.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            ',' if depth == 0 => {
                push_base(&mut bases, &current);
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    push_base(&mut bases, &current);

    bases
}

fn push_base(bases: &mut Vec<String>, raw: &str) {
    let base: String = raw.split_whitespace().collect();
    if base.is_empty() || base.contains('=') {
        return;
    }
    // Generic[T] subscripts are irrelevant to the marker check
    let base = match base.find('[') {
        Some(pos) => base[..pos].to_string(),
        None => base,
    };
    bases.push(base);
}

/// Byte offset of the `)` closing an already-opened parenthesis
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 1;
    for (pos, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
