use crate::error::{Result, VersionError};
use crate::store::{VersionStore, DEFAULT_VERSION_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "./version-manager.toml";
const USER_CONFIG_FILE: &str = ".version-manager.toml";

/// Represents the complete configuration for version-manager.
///
/// Holds the version file location plus parsing and output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default)]
    pub parse: ParseConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version_file() -> String {
    DEFAULT_VERSION_FILE.to_string()
}

fn default_indent() -> usize {
    4
}

fn default_color() -> bool {
    true
}

/// Options for reading version strings given on the command line
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ParseConfig {
    /// Accept `2` or `2.4` when setting a version, filling missing components with 0
    #[serde(default)]
    pub lenient: bool,
}

/// Options for the version file layout and terminal output
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            indent: default_indent(),
            color: default_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            parse: ParseConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Build a store for `path`, falling back to the configured version file
    pub fn store(&self, path: Option<&Path>) -> VersionStore {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.version_file));
        VersionStore::new(path)
            .with_indent(self.output.indent)
            .with_lenient_parsing(self.parse.lenient)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `version-manager.toml` in current directory
/// 3. `.version-manager.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read(Path::new(path))?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        read(Path::new(LOCAL_CONFIG_FILE))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| VersionError::config(e.to_string()))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| VersionError::config(format!("cannot read {}: {}", path.display(), e)))
}
