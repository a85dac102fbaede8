//! Console configuration loaded from TOML.
//!
//! Path priority:
//! 1. Explicit `--config` path (must exist)
//! 2. `TODO_CONSOLE_CONFIG` environment variable (must exist)
//! 3. `<config dir>/todo-console/config.toml` (optional)
//!
//! A missing optional file yields [`AppConfig::default`].

use crate::todo::domain::{DEFAULT_DEADLINE_FORMAT, TodoDomainError, User, UserId};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "TODO_CONSOLE_CONFIG";

const APP_DIR_NAME: &str = "todo-console";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for [`AppConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is syntactically valid but unusable.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Offending key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Identity the console acts as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: "local".to_owned(),
            name: "Local user".to_owned(),
        }
    }
}

/// A todo list to make available at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Display title.
    pub title: String,
    /// Owner identifier; defaults to the configured user. Lists owned by
    /// someone else are shared read-only.
    #[serde(default)]
    pub owner: Option<String>,
}

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `chrono` format string for deadlines.
    pub deadline_format: String,
    /// Whether each menu iteration clears the terminal.
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            deadline_format: DEFAULT_DEADLINE_FORMAT.to_owned(),
            clear_screen: true,
        }
    }
}

/// File logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error.
    pub level: String,
    /// Log directory; defaults to the platform data directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

/// Complete console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Acting user.
    pub user: UserConfig,
    /// Lists seeded at start-up.
    pub lists: Vec<ListConfig>,
    /// Presentation options.
    pub display: DisplayConfig,
    /// Logging options.
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
            lists: vec![ListConfig {
                title: "Personal".to_owned(),
                owner: None,
            }],
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration following the documented path priority.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required file is missing, a file cannot
    /// be read or parsed, or a value fails validation.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::load_from(path);
        }
        if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&env_path));
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads and validates a specific file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or a
    /// value fails validation.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the acting user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the user id is blank.
    pub fn user(&self) -> Result<User, ConfigError> {
        let id = UserId::new(self.user.id.as_str()).map_err(invalid("user.id"))?;
        Ok(User::new(id, self.user.name.trim()))
    }

    /// Returns the owner of a seeded list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the owner id is blank.
    pub fn list_owner(&self, list: &ListConfig) -> Result<UserId, ConfigError> {
        let raw = list.owner.as_deref().unwrap_or(self.user.id.as_str());
        UserId::new(raw).map_err(invalid("lists.owner"))
    }

    /// Returns the directory log files go to, if one can be determined.
    #[must_use]
    pub fn log_directory(&self) -> Option<PathBuf> {
        self.logging.directory.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.user()?;
        for list in &self.lists {
            if list.title.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "lists.title",
                    reason: "list title must not be empty".to_owned(),
                });
            }
            self.list_owner(list)?;
        }
        if StrftimeItems::new(&self.display.deadline_format).any(|item| item == Item::Error) {
            return Err(ConfigError::Invalid {
                field: "display.deadline_format",
                reason: format!(
                    "`{}` is not a valid date format",
                    self.display.deadline_format
                ),
            });
        }
        Ok(())
    }
}

/// Returns `<config dir>/todo-console/config.toml` when the platform has a
/// config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn invalid(field: &'static str) -> impl FnOnce(TodoDomainError) -> ConfigError {
    move |err| ConfigError::Invalid {
        field,
        reason: err.to_string(),
    }
}
