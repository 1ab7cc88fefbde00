use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "items.db")
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "items.db")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "items.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
