//! Known types module - the built-in table of Django field types and their TypeScript mappings
//!
//! Field constructors are grouped by the TypeScript type their JSON
//! representation takes when served by Django REST Framework.

/// Text-like fields
pub const STRING_FIELDS: &[&str] = &[
    "CharField",
    "TextField",
    "SlugField",
    "EmailField",
    "URLField",
    "UUIDField",
    "GenericIPAddressField",
];

/// Date and time fields (ISO 8601 strings on the wire)
pub const DATE_TIME_FIELDS: &[&str] = &["DateField", "DateTimeField", "TimeField"];

/// File fields (serialized as URLs or paths)
pub const FILE_FIELDS: &[&str] = &["FileField", "ImageField", "FilePathField"];

/// Boolean fields
pub const BOOLEAN_FIELDS: &[&str] = &["BooleanField", "NullBooleanField"];

/// Numeric fields
pub const NUMBER_FIELDS: &[&str] = &[
    "AutoField",
    "BigAutoField",
    "SmallAutoField",
    "IntegerField",
    "SmallIntegerField",
    "BigIntegerField",
    "PositiveIntegerField",
    "PositiveSmallIntegerField",
    "PositiveBigIntegerField",
    "FloatField",
    "DecimalField",
    "DurationField",
];

/// Relations to a single record, represented by the target's primary key
pub const RELATION_TO_ONE_FIELDS: &[&str] = &["ForeignKey", "OneToOneField"];

/// Relations to many records, represented by a list of primary keys
pub const RELATION_TO_MANY_FIELDS: &[&str] = &["ManyToManyField"];

/// `models.JSONField`
pub const JSON_FIELD: &str = "JSONField";

/// `django.contrib.postgres.fields.ArrayField`
pub const ARRAY_FIELD: &str = "ArrayField";

/// Structured fields with their own TypeScript shape
pub const STRUCTURED_FIELDS: &[&str] = &[JSON_FIELD, ARRAY_FIELD];

/// Get the TypeScript type for a Django field constructor name
pub fn field_to_typescript(name: &str) -> Option<&'static str> {
    if STRING_FIELDS.contains(&name)
        || DATE_TIME_FIELDS.contains(&name)
        || FILE_FIELDS.contains(&name)
    {
        return Some("string");
    }
    if BOOLEAN_FIELDS.contains(&name) {
        return Some("boolean");
    }
    if NUMBER_FIELDS.contains(&name) || RELATION_TO_ONE_FIELDS.contains(&name) {
        return Some("number");
    }
    if RELATION_TO_MANY_FIELDS.contains(&name) {
        return Some("number[]");
    }
    if name == JSON_FIELD {
        return Some("Record<string, any>");
    }
    if name == ARRAY_FIELD {
        return Some("any[]");
    }
    None
}

/// Iterate over every built-in entry as `(field, typescript)` pairs
pub fn builtin_entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    STRING_FIELDS
        .iter()
        .chain(DATE_TIME_FIELDS)
        .chain(FILE_FIELDS)
        .chain(BOOLEAN_FIELDS)
        .chain(NUMBER_FIELDS)
        .chain(RELATION_TO_ONE_FIELDS)
        .chain(RELATION_TO_MANY_FIELDS)
        .chain(STRUCTURED_FIELDS)
        .filter_map(|name| field_to_typescript(name).map(|ts| (*name, ts)))
}
