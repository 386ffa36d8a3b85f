use crate::config::TypesConfig;
use crate::known_types;
use crate::models::FieldDefinition;
use std::collections::BTreeMap;
use tracing::warn;

/// Lookup table from Django field constructor to TypeScript type.
///
/// `resolve` is total: constructors missing from the table map to the
/// fallback placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeMap {
    entries: BTreeMap<String, String>,
    fallback: String,
}

impl FieldTypeMap {
    /// The built-in table with `any` as the fallback
    pub fn builtin() -> Self {
        let entries = known_types::builtin_entries()
            .map(|(field, ts)| (field.to_string(), ts.to_string()))
            .collect();

        Self {
            entries,
            fallback: "any".to_string(),
        }
    }

    /// The built-in table with configured overrides layered on top
    pub fn from_config(config: &TypesConfig) -> Self {
        let mut map = Self::builtin();
        map.fallback = config.fallback.clone();
        for (field, ts) in &config.overrides {
            map.entries.insert(field.clone(), ts.clone());
        }
        map
    }

    /// TypeScript type for a constructor, if the table has one
    pub fn get(&self, field_type: &str) -> Option<&str> {
        self.entries.get(field_type).map(String::as_str)
    }

    /// TypeScript type for a constructor, falling back to the placeholder
    pub fn resolve(&self, field_type: &str) -> &str {
        self.get(field_type).unwrap_or(self.fallback.as_str())
    }

    pub fn is_known(&self, field_type: &str) -> bool {
        self.entries.contains_key(field_type)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FieldTypeMap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Convert a parsed field to its TypeScript type
pub fn field_to_typescript(field: &FieldDefinition, type_map: &FieldTypeMap) -> String {
    if !type_map.is_known(&field.field_type) {
        warn!(
            "Unknown field type '{}' for '{}' (line {}), using '{}'",
            field.field_type,
            field.name,
            field.line,
            type_map.fallback()
        );
    }
    type_map.resolve(&field.field_type).to_string()
}
