use crate::config::{default_file_names, default_model_packages, default_recursive, InputConfig};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scanner for finding Django model files in a directory
pub struct Scanner {
    /// Root directory to scan
    source_dir: PathBuf,
    /// Patterns to exclude
    exclude_patterns: Vec<String>,
    /// Descend into subdirectories
    recursive: bool,
    /// File names that are always model files
    file_names: Vec<String>,
    /// Directory names whose Python files are model files
    model_packages: Vec<String>,
}

impl Scanner {
    /// Create a new scanner with the default recognition rules
    pub fn new(source_dir: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Scanner {
            source_dir,
            exclude_patterns,
            recursive: default_recursive(),
            file_names: default_file_names(),
            model_packages: default_model_packages(),
        }
    }

    /// Create a scanner from the input configuration
    pub fn from_config(input: &InputConfig) -> Self {
        Scanner {
            source_dir: input.source_dir.clone(),
            exclude_patterns: input.exclude.clone(),
            recursive: input.recursive,
            file_names: input.file_names.clone(),
            model_packages: input.model_packages.clone(),
        }
    }

    /// Scan for all model files, sorted by path
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut model_files = Vec::new();

        let mut walker = WalkDir::new(&self.source_dir)
            .follow_links(true)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e.path()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Symlink loops and unreadable subdirectories only lose that subtree
                Err(e) if e.depth() > 0 => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to scan source directory: {}", self.source_dir.display())
                    })
                }
            };
            let path = entry.path();

            if path.is_file() && self.is_model_file(path) {
                model_files.push(path.to_path_buf());
            } else if path.is_file() {
                debug!("Ignoring {}", path.display());
            }
        }

        Ok(model_files)
    }

    /// Check if a path is a Django model file
    fn is_model_file(&self, path: &Path) -> bool {
        let is_python = path
            .extension()
            .map(|ext| ext == "py")
            .unwrap_or(false);
        if !is_python {
            return false;
        }

        let named_model_file = path
            .file_name()
            .map(|name| self.file_names.iter().any(|f| name == f.as_str()))
            .unwrap_or(false);

        let in_model_package = path
            .parent()
            .and_then(|parent| parent.file_name())
            .map(|dir| self.model_packages.iter().any(|p| dir == p.as_str()))
            .unwrap_or(false);

        named_model_file || in_model_package
    }

    /// Check if a path should be excluded
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.source_dir).unwrap_or(path);

        for pattern in &self.exclude_patterns {
            // Check if any component of the path matches the exclude pattern
            if relative
                .components()
                .any(|component| component.as_os_str().to_string_lossy() == *pattern)
            {
                debug!("Excluding {}", path.display());
                return true;
            }
        }

        false
    }
}
