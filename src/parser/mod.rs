pub mod class_header;
pub mod field_parser;
pub mod model_parser;

pub use field_parser::parse_field_statement;
pub use model_parser::parse_models;
