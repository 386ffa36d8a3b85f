use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub types: TypesConfig,
}

/// Input configuration - where to find Django model files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Root directory to scan (a single app or a project containing many apps)
    pub source_dir: PathBuf,
    /// Directories or files to exclude from scanning
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Descend into subdirectories of `source_dir`
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    /// File names always treated as model files
    #[serde(default = "default_file_names")]
    pub file_names: Vec<String>,
    /// Directory names whose `.py` files are all treated as model files
    #[serde(default = "default_model_packages")]
    pub model_packages: Vec<String>,
    /// Base class references that mark a class as a model
    #[serde(default = "default_model_bases")]
    pub model_bases: Vec<String>,
}

/// Output configuration - where to write generated TypeScript files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for generated `.ts` files
    pub dest_dir: PathBuf,
    /// Prepend a "generated" banner to each file
    #[serde(default = "default_header")]
    pub header: bool,
}

/// Naming configuration - prefixes, suffixes and field casing
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NamingConfig {
    /// Prefix for TypeScript interface names
    #[serde(default)]
    pub type_prefix: String,
    /// Suffix for TypeScript interface names
    #[serde(default)]
    pub type_suffix: String,
    /// Casing applied to emitted field names
    #[serde(default)]
    pub field_case: FieldCase,
}

/// How field names are written in the generated interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldCase {
    /// Keep the Django attribute name as written
    #[default]
    Preserve,
    /// Convert snake_case to camelCase
    Camel,
}

/// Field type table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesConfig {
    /// TypeScript type used for field constructors missing from the table
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Extra or replacement entries layered over the built-in table
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            overrides: BTreeMap::new(),
        }
    }
}

pub(crate) fn default_recursive() -> bool {
    true
}

pub(crate) fn default_file_names() -> Vec<String> {
    vec!["models.py".to_string()]
}

pub(crate) fn default_model_packages() -> Vec<String> {
    vec!["models".to_string()]
}

fn default_model_bases() -> Vec<String> {
    vec!["models.Model".to_string(), "Model".to_string()]
}

fn default_header() -> bool {
    true
}

fn default_fallback() -> String {
    "any".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let source_dir = &self.input.source_dir;
        if !source_dir.exists() {
            anyhow::bail!("Source directory does not exist: {}", source_dir.display());
        }
        if !source_dir.is_dir() {
            anyhow::bail!("Source path is not a directory: {}", source_dir.display());
        }
        fs::read_dir(source_dir).with_context(|| {
            format!("Source directory is not readable: {}", source_dir.display())
        })?;

        if self.input.model_bases.is_empty() {
            anyhow::bail!("input.model_bases must name at least one model base class");
        }

        if self.input.file_names.is_empty() && self.input.model_packages.is_empty() {
            anyhow::bail!("input.file_names and input.model_packages are both empty; no file would be scanned");
        }

        if self.types.fallback.trim().is_empty() {
            anyhow::bail!("types.fallback must not be empty");
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig {
                source_dir: PathBuf::from("backend"),
                exclude: vec![
                    "migrations".to_string(),
                    "tests".to_string(),
                    "venv".to_string(),
                ],
                recursive: default_recursive(),
                file_names: default_file_names(),
                model_packages: default_model_packages(),
                model_bases: default_model_bases(),
            },
            output: OutputConfig {
                dest_dir: PathBuf::from("frontend/src/lib/types/models"),
                header: default_header(),
            },
            naming: NamingConfig::default(),
            types: TypesConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
