//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::Category;

/// Database file used when neither `--db` nor the config file names one.
pub const DEFAULT_DB_FILE: &str = "notes.db";

/// How long a save waits on a locked database by default.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Application configuration loaded from config file.
///
/// ```toml
/// db = "/home/me/notes.db"
/// categories = ["Personal", "Work", "School", "Other"]
/// default_category = "Personal"
/// busy_timeout_ms = 5000
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file
    pub db: Option<PathBuf>,

    /// Categories offered for new notes
    pub categories: Option<Vec<Category>>,

    /// Category preselected for new notes
    pub default_category: Option<Category>,

    /// Milliseconds to wait for a locked database before giving up
    pub busy_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `notes.db` in the current directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }

    /// Categories offered for new notes.
    pub fn categories(&self) -> Vec<Category> {
        self.categories
            .clone()
            .unwrap_or_else(Category::defaults)
    }

    /// Category preselected for new notes: the configured one, otherwise
    /// the first offered category.
    pub fn default_category(&self) -> Category {
        self.default_category
            .clone()
            .or_else(|| self.categories().into_iter().next())
            .unwrap_or_else(Category::fallback)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS))
    }

    fn validate(&self) -> Result<()> {
        if let Some(categories) = &self.categories {
            if categories.is_empty() {
                bail!("categories cannot be empty");
            }
            for (i, category) in categories.iter().enumerate() {
                if categories[..i].contains(category) {
                    bail!("category '{}' is listed twice", category);
                }
            }
        }

        let default = self.default_category();
        if !self.categories().contains(&default) {
            bail!(
                "default_category '{}' is not one of the configured categories",
                default
            );
        }

        Ok(())
    }
}
