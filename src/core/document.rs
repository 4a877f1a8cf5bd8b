use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::constants::parse_constants;
use super::extractor::extract_enums;
use super::table::{render_table, RenderedTable};

/// Extension of generated documents
pub const MARKDOWN_EXTENSION: &str = "md";

/// One input file: its name and decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// `Color.java` becomes `Color.md`.
    pub fn artifact_name(&self) -> PathBuf {
        PathBuf::from(&self.name).with_extension(MARKDOWN_EXTENSION)
    }
}

/// All tables rendered for one source unit, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub source: String,
    pub tables: Vec<RenderedTable>,
}

impl Document {
    /// An empty document produces no output file.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "##  {}\n\n{}", self.source, table)?;
        }
        Ok(())
    }
}

/// Render every documented enum of `unit`.
pub fn assemble(unit: &SourceUnit) -> Document {
    let mut tables = Vec::new();

    for declaration in extract_enums(&unit.text) {
        let constants = parse_constants(declaration.body);
        match render_table(declaration.name, &constants) {
            Some(table) => tables.push(table),
            None => debug!(
                "No documented constants in enum {} of {}",
                declaration.name, unit.name
            ),
        }
    }

    Document {
        source: unit.name.clone(),
        tables,
    }
}
