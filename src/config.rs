//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/retree/retree.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `RETREE_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::render::RenderStyle;

/// Timing harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BenchConfig {
    /// Balanced tree sizes to reconstruct, in order
    pub sizes: Vec<usize>,
    /// Size whose reconstructed shape is printed after the run
    pub show_shape: Option<usize>,
    /// Run the Empty and No-solution scenarios before the sized ones
    pub include_edge_cases: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![20, 50, 100, 200],
            show_shape: Some(20),
            include_edge_cases: true,
        }
    }
}

/// Raw bench config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawBenchConfig {
    pub sizes: Option<Vec<usize>>,
    pub show_shape: Option<usize>,
    pub include_edge_cases: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: Option<RenderStyle>,
    pub bench: RawBenchConfig,
}

impl BenchConfig {
    /// Overlay wins where it specifies a field, otherwise keep base.
    pub fn merge(&self, overlay: &RawBenchConfig) -> Self {
        Self {
            sizes: overlay.sizes.clone().unwrap_or_else(|| self.sizes.clone()),
            show_shape: overlay.show_shape.or(self.show_shape),
            include_edge_cases: overlay
                .include_edge_cases
                .unwrap_or(self.include_edge_cases),
        }
    }
}

/// Unified configuration for retree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Default tree rendering
    pub render: RenderStyle,
    /// Timing harness settings
    pub bench: BenchConfig,
}

/// Get the XDG config directory for retree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "retree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("retree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// `Ok(None)` if the variable is unset, `Config` error naming it if it does not parse.
fn env_value<T>(result: Result<T, ConfigError>, var: &str) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{}: {}", var, e),
        }),
    }
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: overlay.render.unwrap_or(self.render),
            bench: self.bench.merge(&overlay.bench),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_path` - Optional config file; unlike the global file it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/retree/retree.toml`
    /// 3. Local config: `local_path`
    /// 4. Environment variables: `RETREE_*` prefix
    #[instrument(level = "debug")]
    pub fn load(local_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(local) = local_path {
            debug!(path = %local.display(), "local config");
            current = current.merge_with(&load_raw_settings(local)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply RETREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("RETREE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("bench.sizes")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("render"), "RETREE_RENDER")? {
            settings.render = RenderStyle::from_str(&val, true).map_err(|e| {
                ApplicationError::Config {
                    message: format!("RETREE_RENDER: {}", e),
                }
            })?;
        }
        if let Some(val) = env_value(config.get::<Vec<usize>>("bench.sizes"), "RETREE_BENCH__SIZES")? {
            settings.bench.sizes = val;
        }
        if let Some(val) = env_value(config.get::<usize>("bench.show_shape"), "RETREE_BENCH__SHOW_SHAPE")? {
            settings.bench.show_shape = Some(val);
        }
        if let Some(val) = env_value(
            config.get_bool("bench.include_edge_cases"),
            "RETREE_BENCH__INCLUDE_EDGE_CASES",
        )? {
            settings.bench.include_edge_cases = val;
        }

        Ok(settings)
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
