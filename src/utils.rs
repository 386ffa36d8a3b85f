use anyhow::{Context, Result};
use convert_case::{Case, Casing};
use std::path::{Component, Path, PathBuf};

/// Convert snake_case to camelCase
pub fn to_camel_case(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Destination path for a source file: same relative location under
/// `dest_dir`, extension replaced with `.ts`
pub fn output_path(source_file: &Path, source_dir: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let relative = source_file.strip_prefix(source_dir).with_context(|| {
        format!(
            "{} is not inside {}",
            source_file.display(),
            source_dir.display()
        )
    })?;

    Ok(dest_dir.join(relative).with_extension("ts"))
}

/// Platform-independent `/`-separated form of a path relative to `root`
pub fn display_relative(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
