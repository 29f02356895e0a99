use std::{env, path::PathBuf};

use distreg_core::export::EXPORT_FILE_NAME;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "distreg.db")
    pub sqlite_path: String,
    /// Where the spreadsheet export is written (default: "distributor_data.xlsx")
    pub export_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "distreg.db")
    /// - `EXPORT_PATH` - Spreadsheet export path (default: "distributor_data.xlsx")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "distreg.db".to_string()),
            export_path: env::var("EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(EXPORT_FILE_NAME)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("EXPORT_PATH");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "distreg.db");
        assert_eq!(config.export_path, PathBuf::from("distributor_data.xlsx"));
    }
}
