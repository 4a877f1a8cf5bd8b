use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::{Config, CONFIG_CANDIDATES};
use crate::error::EnumDocError;
use super::{assemble, Document, SourceScanner};

/// How `preview` prints a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PreviewFormat {
    Markdown,
    Json,
}

/// Outcome of one `generate` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Source units read
    pub scanned: usize,
    /// Markdown files written, in write order
    pub written: Vec<PathBuf>,
    /// Tables across all written files
    pub tables: usize,
}

/// Drives scanning, rendering and writing
pub struct Engine {
    config: Config,
    scanner: SourceScanner,
}

impl Engine {
    /// Create an engine from a config file, or the default lookup when `None`
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        debug!("Loaded configuration: {:?}", config);
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            scanner: SourceScanner::new(),
        }
    }

    /// Write one markdown file per source unit that has documented enums.
    pub fn generate(
        &self,
        source: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<GenerationReport> {
        let config = self
            .config
            .clone()
            .with_overrides(source, output)
            .context("Failed to resolve output directory")?;
        let base_dir = config.project.base_dir.clone();
        let output_dir = config.project.resolved_output_dir();

        info!("🔍 Scanning {} for enum declarations", base_dir.display());
        debug!("Output: {}", output_dir.display());

        let files = self
            .scanner
            .discover(&base_dir)
            .with_context(|| format!("Failed to scan {}", base_dir.display()))?;

        let mut report = GenerationReport::default();
        let mut seen = HashSet::new();

        for path in files {
            let unit = self.scanner.read_unit(&path)?;
            report.scanned += 1;

            let document = assemble(&unit);
            if document.is_empty() {
                debug!("No documented enums in {}", path.display());
                continue;
            }

            if !output_dir.exists() {
                std::fs::create_dir_all(&output_dir).map_err(|source| EnumDocError::Write {
                    path: output_dir.clone(),
                    source,
                })?;
            }

            let target = output_dir.join(unit.artifact_name());
            if !seen.insert(target.clone()) {
                warn!(
                    "{} overwrites output of an earlier file with the same name",
                    path.display()
                );
            }

            write_document(&target, &document)?;
            info!("Markdown file generated: {}", target.display());

            report.tables += document.tables.len();
            report.written.push(target);
        }

        info!(
            "🎉 {} source files scanned, {} markdown files written ({} tables)",
            report.scanned,
            report.written.len(),
            report.tables
        );
        Ok(report)
    }

    /// Render a single file without writing anything. `None` when the file
    /// has no documented enums.
    pub fn preview(&self, file: &Path, format: PreviewFormat) -> Result<Option<String>> {
        let unit = self.scanner.read_unit(file)?;
        let document = assemble(&unit);

        if document.is_empty() {
            info!("No documented enums in {}", file.display());
            return Ok(None);
        }

        let rendered = match format {
            PreviewFormat::Markdown => document.to_string(),
            PreviewFormat::Json => {
                serde_json::to_string_pretty(&document).map_err(EnumDocError::from)? + "\n"
            }
        };
        Ok(Some(rendered))
    }

    /// Write a default config file into `path` (current directory if `None`).
    pub fn init(&self, path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
        let target_dir = match path {
            Some(path) => path,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };
        let target = target_dir.join(CONFIG_CANDIDATES[0]);

        if target.exists() && !force {
            return Err(EnumDocError::Config(format!(
                "{} already exists, use --force to overwrite",
                target.display()
            ))
            .into());
        }

        std::fs::create_dir_all(&target_dir)
            .with_context(|| format!("Failed to create {}", target_dir.display()))?;
        Config::default().save(&target)?;
        info!("Initialized enumdoc in: {}", target_dir.display());
        Ok(target)
    }
}

fn write_document(target: &Path, document: &Document) -> crate::error::Result<()> {
    std::fs::write(target, document.to_string()).map_err(|source| EnumDocError::Write {
        path: target.to_path_buf(),
        source,
    })
}
