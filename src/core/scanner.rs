use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{EnumDocError, Result};
use super::document::SourceUnit;

/// Extension of the source files that are scanned
pub const SOURCE_EXTENSION: &str = "java";

/// Finds and reads source units below a base directory
#[derive(Debug, Clone)]
pub struct SourceScanner {
    extension: String,
}

impl SourceScanner {
    pub fn new() -> Self {
        Self {
            extension: SOURCE_EXTENSION.to_string(),
        }
    }

    /// All eligible files below `root`, sorted by path.
    pub fn discover<P: AsRef<Path>>(&self, root: P) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
            let entry = entry.map_err(|e| EnumDocError::FileSystem(e.to_string()))?;
            // Follows symlinks, so linked source files are scanned too.
            if entry.path().is_file() && self.should_scan(entry.path()) {
                files.push(entry.into_path());
            }
        }

        debug!("Discovered {} source files in {}", files.len(), root.as_ref().display());
        Ok(files)
    }

    /// Read one file into a unit named after its file name.
    pub fn read_unit<P: AsRef<Path>>(&self, path: P) -> Result<SourceUnit> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| EnumDocError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(SourceUnit::new(name, text))
    }

    fn should_scan(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new()
    }
}
