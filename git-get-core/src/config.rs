//! Configuration management for git-get
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GIT_GET_*)
//! 3. Config file (~/.config/git-get/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{expand_home, Error, Result};

/// Default git executable name, looked up on PATH
pub const DEFAULT_GIT: &str = "git";

/// Default prefix for implicitly relative clone URLs
pub const DEFAULT_PREFIX: &str = "git@github.com:";

/// Default source root, every clone lands below it
pub const DEFAULT_SOURCE_ROOT: &str = "~/src";

/// Clone-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CloneConfig {
    /// Name or path of the git executable
    pub git: String,

    /// Prefixed to `project/repo` shorthand references
    pub default_prefix: String,

    /// Base directory for clones, may start with `~`
    pub source_root: String,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            git: DEFAULT_GIT.to_string(),
            default_prefix: DEFAULT_PREFIX.to_string(),
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
        }
    }
}

impl CloneConfig {
    /// The source root with `~` expanded
    ///
    /// Must be absolute so the destination does not depend on the working directory.
    pub fn source_root_dir(&self) -> Result<PathBuf> {
        let root = expand_home(&self.source_root)?;
        if !root.is_absolute() {
            return Err(Error::Config(format!(
                "source root must be an absolute path, got {:?}",
                self.source_root
            )));
        }
        Ok(root)
    }
}

/// CLI flag overrides, `None` leaves the loaded value alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub git: Option<String>,
    pub default_prefix: Option<String>,
    pub source_root: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clone configuration
    pub clone: CloneConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/git-get/config.toml` on Linux
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("git-get").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GIT_GET_GIT: git executable
    /// - GIT_GET_PREFIX: default prefix for shorthand references
    /// - GIT_GET_ROOT: source root
    ///
    /// Empty values are treated as unset.
    pub fn with_env_overrides(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(git) = lookup("GIT_GET_GIT") {
            self.clone.git = git;
        }

        if let Some(prefix) = lookup("GIT_GET_PREFIX") {
            self.clone.default_prefix = prefix;
        }

        if let Some(root) = lookup("GIT_GET_ROOT") {
            self.clone.source_root = root;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(git) = overrides.git {
            self.clone.git = git;
        }

        if let Some(prefix) = overrides.default_prefix {
            self.clone.default_prefix = prefix;
        }

        if let Some(root) = overrides.source_root {
            self.clone.source_root = root;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// An explicit `config_path` must exist. Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let base = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(base.with_env_overrides().with_cli_overrides(overrides))
    }
}
