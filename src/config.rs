use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EnumDocError, Result};

/// File names searched in the working directory when no `--config` is given
pub const CONFIG_CANDIDATES: &[&str] = &["enumdoc.toml", ".enumdoc.toml"];

/// Output subdirectory used when none is configured
pub const DEFAULT_OUTPUT_SUBDIR: &str = "md";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Project configuration
    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory scanned for source files
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Markdown output directory; relative paths resolve against `base_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            output_dir: None,
        }
    }
}

impl ProjectConfig {
    /// Output directory after applying the `<base_dir>/md` default.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.join(DEFAULT_OUTPUT_SUBDIR),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EnumDocError::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EnumDocError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Err(EnumDocError::Config(format!(
                        "config file not found: {}",
                        p.as_ref().display()
                    )))
                }
            }
            None => {
                for candidate in CONFIG_CANDIDATES {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    /// Apply command line directory overrides.
    ///
    /// A configured `output_dir` is kept when only the source changes; a
    /// relative one then resolves against the new source directory.
    pub fn with_overrides(
        mut self,
        source: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(source) = source {
            self.project.base_dir = source;
        }
        if let Some(output) = output {
            // Command line paths are relative to the working directory, not base_dir.
            self.project.output_dir = Some(if output.is_absolute() {
                output
            } else {
                std::env::current_dir()?.join(output)
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.project.base_dir, PathBuf::from("."));
        assert_eq!(config.project.resolved_output_dir(), PathBuf::from("./md"));
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            "[project]\nbase_dir = \"service\"\noutput_dir = \"docs/enums\"\n",
        )
        .unwrap();
        assert_eq!(config.project.base_dir, PathBuf::from("service"));
        assert_eq!(
            config.project.resolved_output_dir(),
            PathBuf::from("service/docs/enums")
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_toml("[project]\nbase_dir = \"app\"\n").unwrap();
        assert_eq!(config.project.resolved_output_dir(), PathBuf::from("app/md"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("[project\nbase_dir = 1").unwrap_err();
        assert!(matches!(err, EnumDocError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enumdoc.toml");
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("src")), None)
            .unwrap();
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_source_override_without_output_dir_uses_default_subdir() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("other")), None)
            .unwrap();
        assert_eq!(config.project.resolved_output_dir(), PathBuf::from("other/md"));
    }

    #[test]
    fn test_source_override_keeps_absolute_output_dir() {
        let absolute = std::env::temp_dir().join("docs").join("enums");
        let mut config = Config::default();
        config.project.output_dir = Some(absolute.clone());

        let config = config
            .with_overrides(Some(PathBuf::from("other")), None)
            .unwrap();
        assert_eq!(config.project.resolved_output_dir(), absolute);
    }

    #[test]
    fn test_source_override_keeps_relative_output_dir() {
        let config = Config::from_toml("[project]\noutput_dir = \"out\"\n")
            .unwrap()
            .with_overrides(Some(PathBuf::from("other")), None)
            .unwrap();
        assert_eq!(config.project.resolved_output_dir(), PathBuf::from("other/out"));
    }

    #[test]
    fn test_output_override_is_absolute() {
        let config = Config::default()
            .with_overrides(None, Some(PathBuf::from("generated")))
            .unwrap();
        assert!(config.project.resolved_output_dir().is_absolute());
        assert!(config.project.resolved_output_dir().ends_with("generated"));
    }
}
