pub mod interfaces_gen;
pub mod type_mapper;

use crate::config::{Config, FieldCase, NamingConfig};
use crate::utils::to_camel_case;

pub use type_mapper::FieldTypeMap;

/// Context for code generation
pub struct GeneratorContext {
    /// Naming configuration
    pub naming: NamingConfig,
    /// Field type table for this run
    pub type_map: FieldTypeMap,
    /// Prepend the "generated" banner to each file
    pub header: bool,
}

impl GeneratorContext {
    pub fn new(naming: NamingConfig, type_map: FieldTypeMap) -> Self {
        Self {
            naming,
            type_map,
            header: true,
        }
    }

    /// Build the context described by a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            naming: config.naming.clone(),
            type_map: FieldTypeMap::from_config(&config.types),
            header: config.output.header,
        }
    }

    /// Apply naming configuration to an interface name
    pub fn format_type_name(&self, name: &str) -> String {
        format!(
            "{}{}{}",
            self.naming.type_prefix, name, self.naming.type_suffix
        )
    }

    /// Apply the configured casing to a field name
    pub fn format_field_name(&self, name: &str) -> String {
        match self.naming.field_case {
            FieldCase::Preserve => name.to_string(),
            FieldCase::Camel => to_camel_case(name),
        }
    }
}
