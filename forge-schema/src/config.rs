//! Project configuration (`cqlforge.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "cqlforge.toml";

/// Java package root used when neither the CLI nor the config names one.
pub const DEFAULT_PACKAGE: &str = "com.example";

/// Root schema for cqlforge.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Java package root for generated artifacts
    #[serde(default = "default_package")]
    pub package: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
        }
    }
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

/// Default locations, resolved relative to the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ForgeConfig {
    /// Parse a configuration from a string with a custom filename for error reporting
    pub fn parse_str(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SourceContext::new(content, filename).toml_error(e))
    }

    /// Load the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse_str(&content, &path.display().to_string())
    }

    /// Load the configuration file at `path`, or the defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
