//! Configuration parsing for slnsync.
//!
//! An optional TOML file supplies the values that rarely change between
//! runs (destination directory, target address, toolchain locations).
//! Command-line flags and environment variables override anything set here.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "slnsync.toml";

/// Default build tool invoked by the generated descriptor
pub const DEFAULT_MAKE_TOOL: &str = "jom.exe";

/// Root configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Solution name; defaults to the project name when unset
    #[serde(default)]
    pub solution: Option<String>,

    /// Directory the descriptors are written to
    #[serde(default)]
    pub dest_dir: Option<PathBuf>,

    /// Target device address substituted into the preferences document
    #[serde(default)]
    pub target_addr: Option<String>,

    /// Cross-toolchain binary; the sysroot is probed next to it
    #[serde(default)]
    pub toolchain_path: Option<PathBuf>,

    /// Qt tool binary; headers are expected next to it
    #[serde(default)]
    pub qt_path: Option<PathBuf>,

    /// Build tool written into the descriptor's build command lines
    #[serde(default = "default_make_tool")]
    pub make_tool: String,

    /// Build configurations, in emission order
    #[serde(default = "default_configurations")]
    pub configurations: Vec<String>,

    /// Platform half of every configuration|platform pair
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Directory of template overrides; bundled templates are used when unset
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Additional placeholder bindings for template overrides
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

fn default_make_tool() -> String {
    DEFAULT_MAKE_TOOL.to_string()
}

fn default_configurations() -> Vec<String> {
    vec!["Debug".to_string(), "Release".to_string()]
}

fn default_platform() -> String {
    "Win32".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solution: None,
            dest_dir: None,
            target_addr: None,
            toolchain_path: None,
            qt_path: None,
            make_tool: default_make_tool(),
            configurations: default_configurations(),
            platform: default_platform(),
            template_dir: None,
            tokens: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load an explicitly named file, the default file if present, or the
    /// built-in defaults when no configuration exists at all.
    pub fn load_or_default(explicit: Option<&Path>, search_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate = search_dir.join(CONFIG_FILE_NAME);
                if candidate.exists() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
