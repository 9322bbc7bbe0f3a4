//! Configuration management for Prompt My Papers.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - Config file (`.papers/config.yaml`, or an explicit path)
//! - Environment variables
//! - Command-line flags
//!
//! Essay defaults are kept as raw labels and numbers here. The prompt crate
//! resolves them into typed values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Directory under the workspace holding `config.yaml`.
pub const CONFIG_DIR: &str = ".papers";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .papers/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Where saved prompts go; relative paths resolve against the workspace
    pub output_dir: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Default essay parameters used when a flag is not given
    pub defaults: EssayDefaultsConfig,
}

/// Raw essay defaults from the `defaults:` section of config.yaml.
///
/// Enumerations are stored as their labels (e.g. `"Formal Academic"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayDefaultsConfig {
    pub essay_type: Option<String>,
    pub word_count: Option<u32>,
    pub academic_level: Option<String>,
    pub writing_style: Option<String>,
    pub urgency_days: Option<u32>,
    pub include_introduction: Option<bool>,
    pub include_sources: Option<bool>,
    pub include_citations: Option<bool>,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    defaults: Option<EssayDefaultsConfig>,
    output: Option<OutputConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutputConfig {
    dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

/// Values read from the process environment.
///
/// Kept separate from `AppConfig::load` so loading can be exercised
/// without touching real environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub workspace: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_color: bool,
}

impl ConfigSources {
    /// Read `PAPERS_WORKSPACE`, `PAPERS_CONFIG`, `PAPERS_OUTPUT_DIR`,
    /// `RUST_LOG` and `NO_COLOR`.
    pub fn from_env() -> Self {
        Self {
            workspace: std::env::var("PAPERS_WORKSPACE").ok().map(PathBuf::from),
            config_file: std::env::var("PAPERS_CONFIG").ok().map(PathBuf::from),
            output_dir: std::env::var("PAPERS_OUTPUT_DIR").ok().map(PathBuf::from),
            log_level: std::env::var("RUST_LOG").ok(),
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            output_dir: None,
            log_level: None,
            verbose: false,
            no_color: false,
            defaults: EssayDefaultsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, with explicit workspace and
    /// config-file paths taking precedence over `PAPERS_WORKSPACE` and
    /// `PAPERS_CONFIG`.
    ///
    /// # Example
    /// ```no_run
    /// use papers_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None, None).expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut sources = ConfigSources::from_env();
        if workspace.is_some() {
            sources.workspace = workspace;
        }
        if config_file.is_some() {
            sources.config_file = config_file;
        }
        Self::load_from(sources)
    }

    /// Build configuration from already-gathered sources.
    pub fn load_from(sources: ConfigSources) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) = sources.workspace {
            config.workspace = workspace;
        }
        config.config_file = sources.config_file;

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => config.config_dir().join("config.yaml"),
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            // An explicitly named file must exist; the default one is optional.
            return Err(AppError::Config(format!(
                "Config file not found: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        if let Some(output_dir) = sources.output_dir {
            config.output_dir = Some(output_dir);
        }
        if let Some(level) = sources.log_level {
            config.log_level = Some(level);
        }
        if sources.no_color {
            config.no_color = true;
        }

        tracing::debug!("Loaded configuration from {:?}", config_path);

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file deserializes to `null`; treat it as "no settings".
        let config_file: ConfigFile = serde_yaml::from_str::<Option<ConfigFile>>(&contents)
            .map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
            .unwrap_or_default();

        let mut result = self.clone();

        if let Some(defaults) = config_file.defaults {
            result.defaults = defaults;
        }

        if let Some(dir) = config_file.output.and_then(|o| o.dir) {
            result.output_dir = Some(PathBuf::from(dir));
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the file and environment.
    pub fn with_overrides(
        mut self,
        output_dir: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(output_dir) = output_dir {
            self.output_dir = Some(output_dir);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .papers directory.
    pub fn config_dir(&self) -> PathBuf {
        self.workspace.join(CONFIG_DIR)
    }

    /// Directory saved prompts are written to.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match self.output_dir {
            Some(ref dir) if dir.is_absolute() => dir.clone(),
            Some(ref dir) => self.workspace.join(dir),
            None => self.workspace.clone(),
        }
    }
}
