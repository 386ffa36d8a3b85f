mod model;
mod parse_result;

pub use model::{FieldDefinition, ModelDefinition};
pub use parse_result::ParseResult;
