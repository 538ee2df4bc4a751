//! Scaffold settings from `rw.toml`.
//!
//! ```toml
//! [scaffold]
//! outline = "organizer.yml"
//! base_dir = "${NOTES_SITE:-site}"
//! strategy = "planned"
//! ```
//!
//! Relative paths resolve against the file's folder. `outline` and
//! `base_dir` go through `${VAR}` expansion first. [`CliSettings`] win over
//! anything in the file.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command-line overrides. `None` keeps the value from the file.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override outline file path.
    pub outline: Option<PathBuf>,
    /// Override base directory.
    pub base_dir: Option<PathBuf>,
    /// Override scaffold strategy.
    pub strategy: Option<ScaffoldStrategy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Outline filename used when none is configured.
const DEFAULT_OUTLINE: &str = "organizer.yml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scaffold configuration (paths are relative strings from TOML).
    scaffold: ScaffoldConfigRaw,

    /// Resolved scaffold configuration (set after loading).
    #[serde(skip)]
    pub scaffold_resolved: ScaffoldConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// How pages and sibling blocks are composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldStrategy {
    /// Write pages, the index, then append sibling blocks.
    #[default]
    Sequential,
    /// Compose every file first, then write each once.
    Planned,
}

/// Raw scaffold configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ScaffoldConfigRaw {
    outline: Option<String>,
    base_dir: Option<String>,
    strategy: Option<ScaffoldStrategy>,
}

/// Resolved scaffold configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ScaffoldConfig {
    /// Outline YAML file.
    pub outline: PathBuf,
    /// Explicit base directory, if configured.
    pub base_dir: Option<PathBuf>,
    /// Composition strategy.
    pub strategy: ScaffoldStrategy,
}

impl ScaffoldConfig {
    /// Directory the site is generated into.
    ///
    /// Defaults to the folder containing the outline file.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        if let Some(base_dir) = &self.base_dir {
            return base_dir.clone();
        }
        match self.outline.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`scaffold.outline`").
        field: String,
        /// Error message (e.g., "${`NOTES_DIR`} not set").
        message: String,
    },
}

/// Require an optional string field, when set, to be non-empty.
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load `config_path`, or the nearest `rw.toml`, then apply `cli_settings`.
    ///
    /// Without any config file, paths are relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing explicit path, and a
    /// parse, validation or expansion error for a bad file.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover_config(),
        };
        let mut config = match file {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default_with_base(&std::env::current_dir().unwrap_or_default()),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(outline) = &settings.outline {
            self.scaffold_resolved.outline.clone_from(outline);
        }
        if let Some(base_dir) = &settings.base_dir {
            self.scaffold_resolved.base_dir = Some(base_dir.clone());
        }
        if let Some(strategy) = settings.strategy {
            self.scaffold_resolved.strategy = strategy;
        }
    }

    /// Nearest `rw.toml` in the current directory or one of its parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        cwd.ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Defaults with the outline expected in `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            scaffold: ScaffoldConfigRaw::default(),
            scaffold_resolved: ScaffoldConfig {
                outline: base.join(DEFAULT_OUTLINE),
                base_dir: None,
                strategy: ScaffoldStrategy::default(),
            },
            config_path: None,
        }
    }

    /// Parse, validate, expand and resolve one `rw.toml`.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.validate()?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a configured path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.scaffold.outline.as_deref(), "scaffold.outline")?;
        require_non_empty(self.scaffold.base_dir.as_deref(), "scaffold.base_dir")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref outline) = self.scaffold.outline {
            self.scaffold.outline = Some(expand::expand_env(outline, "scaffold.outline")?);
        }
        if let Some(ref base_dir) = self.scaffold.base_dir {
            self.scaffold.base_dir = Some(expand::expand_env(base_dir, "scaffold.base_dir")?);
        }
        Ok(())
    }

    /// Join the configured paths onto `config_dir`.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let outline = self.scaffold.outline.as_deref().unwrap_or(DEFAULT_OUTLINE);
        self.scaffold_resolved = ScaffoldConfig {
            outline: config_dir.join(outline),
            base_dir: self.scaffold.base_dir.as_deref().map(|d| config_dir.join(d)),
            strategy: self.scaffold.strategy.unwrap_or_default(),
        };
    }
}
