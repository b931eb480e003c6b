// File: src/config.rs
// Purpose: Configuration parsing from typed-routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::OutputFormat;
use crate::scanner::DEFAULT_PAGE_FILES;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "typed-routes.toml";

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

/// Where pages live and how they are recognized
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Directory containing page files (default: "src/app")
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Exact file names that mark a directory as a route
    #[serde(default = "default_page_files")]
    pub page_files: Vec<String>,

    /// Keep `(group)` segments in route templates
    #[serde(default)]
    pub include_route_groups: bool,
}

/// Generated definitions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Prepended to every emitted route
    #[serde(default)]
    pub route_prefix: String,

    /// Inferred from the output extension when unset
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Watch mode filtering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchConfig {
    /// Directory names whose changes never trigger a rescan
    #[serde(default = "default_ignored")]
    pub ignored: Vec<String>,
}

// Default values
fn default_pages_dir() -> PathBuf {
    PathBuf::from("src/app")
}

fn default_page_files() -> Vec<String> {
    DEFAULT_PAGE_FILES.iter().map(|s| s.to_string()).collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("typed-routes/generated/routes.ts")
}

fn default_ignored() -> Vec<String> {
    ["node_modules", ".git", "dist", "build", ".next"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            page_files: default_page_files(),
            include_route_groups: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            route_prefix: String::new(),
            format: None,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            ignored: default_ignored(),
        }
    }
}

impl OutputConfig {
    /// Configured format, or the one implied by the output path
    pub fn resolved_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.path))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./typed-routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Resolves relative directories against `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.routing.pages_dir.is_relative() {
            self.routing.pages_dir = base.join(&self.routing.pages_dir);
        }
        if self.output.path.is_relative() {
            self.output.path = base.join(&self.output.path);
        }
        self
    }
}
