use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use anyhow::{Context, Result};

use crate::core::{Engine, PreviewFormat};

#[derive(Parser)]
#[command(name = "enumdoc")]
#[command(about = "Generate markdown tables from documented enum constants")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write one markdown file per source file with documented enums
    Generate {
        /// Directory to scan (overrides project.base_dir)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (overrides project.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the tables of a single file to stdout
    Preview {
        /// Source file to render
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: PreviewFormat,
    },

    /// Write a default enumdoc.toml
    Init {
        /// Target directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn execute(self, engine: Engine) -> Result<()> {
        match self.command {
            Commands::Generate { source, output } => {
                engine.generate(source, output)?;
                Ok(())
            }
            Commands::Preview { file, format } => {
                if let Some(rendered) = engine.preview(&file, format)? {
                    let mut stdout = std::io::stdout().lock();
                    stdout
                        .write_all(rendered.as_bytes())
                        .context("Failed to write to stdout")?;
                }
                Ok(())
            }
            Commands::Init { path, force } => {
                engine.init(path, force)?;
                Ok(())
            }
        }
    }
}
