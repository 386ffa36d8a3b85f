use std::path::PathBuf;

/// Represents a parsed Django model class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDefinition {
    /// Name of the class
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDefinition>,
    /// Source file where the class was found
    pub source_file: PathBuf,
    /// 1-based line of the `class` keyword
    pub line: usize,
}

/// Represents one field-assignment statement in a model body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Attribute name on the model
    pub name: String,
    /// Constructor name with any module qualifier removed (`CharField`)
    pub field_type: String,
    /// Emitted as `name?: T`; always true for parsed fields
    pub optional: bool,
    /// 1-based source line
    pub line: usize,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            optional: true,
            line,
        }
    }
}
