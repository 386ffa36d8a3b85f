//! The batch pass: scan, parse, generate, write.

use crate::config::Config;
use crate::generator::interfaces_gen::generate_interfaces_file;
use crate::generator::GeneratorContext;
use crate::parser::parse_models;
use crate::scanner::Scanner;
use crate::utils::{display_relative, output_path};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, info_span, warn};

/// Counters describing one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Model files found by the scanner
    pub files_scanned: usize,
    /// Destination files written
    pub files_written: usize,
    /// Files that could not be read or parsed
    pub files_skipped: usize,
    /// Files that parsed but declared no models
    pub files_without_models: usize,
    /// Interfaces emitted across all files
    pub interfaces: usize,
    /// Fields typed with the fallback placeholder
    pub unknown_fields: usize,
}

/// Runs the full generation pipeline
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Generate one `.ts` file per model file under `config.input.source_dir`.
    ///
    /// Unreadable or unparsable files are skipped with a warning. A failed
    /// write aborts the run.
    pub fn run(&self, config: &Config) -> Result<RunSummary> {
        config.validate()?;

        let source_dir = &config.input.source_dir;
        let dest_dir = &config.output.dest_dir;
        info!("Scanning models in: {}", source_dir.display());

        let scanner = Scanner::from_config(&config.input);
        let files = scanner.scan()?;
        debug!("Found {} model files", files.len());

        let ctx = GeneratorContext::from_config(config);
        debug!(
            "Type map: {} known constructors, fallback '{}'",
            ctx.type_map.len(),
            ctx.type_map.fallback()
        );
        let mut summary = RunSummary::default();

        for file in &files {
            summary.files_scanned += 1;
            let label = display_relative(file, source_dir);
            let _span = info_span!("file", path = %label).entered();

            let content = match fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping {}: {}", label, e);
                    summary.files_skipped += 1;
                    continue;
                }
            };

            let parsed = match parse_models(&content, file, &config.input.model_bases) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Skipping {}: {:#}", label, e);
                    summary.files_skipped += 1;
                    continue;
                }
            };

            if parsed.is_empty() {
                debug!("No models in {}", label);
                summary.files_without_models += 1;
                continue;
            }

            if parsed.skipped_lines > 0 {
                debug!("{} body lines were not field statements", parsed.skipped_lines);
            }

            summary.unknown_fields += parsed
                .models
                .iter()
                .flat_map(|model| &model.fields)
                .filter(|field| !ctx.type_map.is_known(&field.field_type))
                .count();

            let out_path = output_path(file, source_dir, dest_dir)?;
            let output = generate_interfaces_file(&parsed.models, &label, &ctx);
            write_output(&out_path, &output)?;

            if self.verbose {
                for model in &parsed.models {
                    info!(
                        "{} ({} fields) -> {}",
                        model.name,
                        model.fields.len(),
                        out_path.display()
                    );
                }
            }
            info!(
                "Wrote {} ({} interfaces)",
                out_path.display(),
                parsed.models.len()
            );

            summary.files_written += 1;
            summary.interfaces += parsed.models.len();
        }

        info!(
            "Done. {} interfaces generated in {} files ({} skipped).",
            summary.interfaces, summary.files_written, summary.files_skipped
        );

        Ok(summary)
    }
}

/// Write a generated file, creating parent directories as needed
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
