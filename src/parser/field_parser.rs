use crate::models::FieldDefinition;
use regex::Regex;
use std::sync::LazyLock;

/// `name = [module.]*Constructor(`; everything after the parenthesis is ignored
static FIELD_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_]\w*)\s*=\s*(?:[A-Za-z_]\w*\s*\.\s*)*([A-Za-z_]\w*)\s*\(")
        .expect("field statement pattern is valid")
});

/// Parse one statement from a model body into a field definition.
///
/// `statement` must already have its indentation removed. Returns `None` for
/// anything that is not a call assignment (methods, decorators, docstrings,
/// annotated or plain value assignments).
pub fn parse_field_statement(statement: &str, line: usize) -> Option<FieldDefinition> {
    let captures = FIELD_STATEMENT.captures(statement)?;
    let name = captures.get(1)?.as_str();
    let constructor = captures.get(2)?.as_str();

    Some(FieldDefinition::new(name, constructor, line))
}
