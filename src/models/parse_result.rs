use super::ModelDefinition;

/// Result of parsing one Python source file
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Model classes found in the file, in source order
    pub models: Vec<ModelDefinition>,
    /// Body lines that were not field-assignment statements
    pub skipped_lines: usize,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the file declared no model classes
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
