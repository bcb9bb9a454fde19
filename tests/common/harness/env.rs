//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jot::domain::Note;
use jot::store::{NoteStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config written for every environment unless a test supplies its own.
const DEFAULT_CONFIG: &str = "busy_timeout_ms = 1000\n";

/// Isolated test environment with its own database and config file.
///
/// Everything lives in a temp directory that is removed on drop, so tests
/// never touch the user's config or a `notes.db` in the working directory.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    db_path: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with an empty database path and the
    /// default config.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CONFIG)
    }

    /// Creates a new environment with `config` as its config file.
    pub fn with_config(config: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("notes.db");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, config).expect("Failed to write config");
        Self {
            _temp_dir: temp_dir,
            db_path,
            config_path,
        }
    }

    /// Returns the path to the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Returns the path to the config file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Writes `notes` to the database, replacing its contents.
    pub fn seed(&self, notes: &[TestNote]) {
        let notes: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        let mut store = SqliteStore::open(&self.db_path).expect("Failed to open database");
        store.replace_all(&notes).expect("Failed to seed notes");
    }

    /// Reads every note back from the database, in storage order.
    pub fn stored_notes(&self) -> Vec<Note> {
        SqliteStore::open(&self.db_path)
            .expect("Failed to open database")
            .load_all()
            .expect("Failed to load notes")
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .db(&self.db_path)
            .config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.config_path().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seed_round_trip() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("First"), TestNote::new("Second").category("Work")]);

        let stored = env.stored_notes();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].text(), "First");
        assert_eq!(stored[1].category().as_str(), "Work");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[2], "--config");
    }
}
