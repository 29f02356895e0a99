//! Application state with repository-based storage.
//!
//! The state is cloned for each request handler and holds repository trait
//! objects, so handlers never touch SQLite directly.

use std::{path::PathBuf, sync::Arc};

use distreg_core::storage::{AnswerRepository, DistributorRepository};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Distributor registration records.
    pub distributor_repo: Arc<dyn DistributorRepository>,
    /// Survey answers.
    pub answer_repo: Arc<dyn AnswerRepository>,
    /// Where `/export-excel` writes the spreadsheet artifact.
    pub export_path: Arc<PathBuf>,
}

impl AppState {
    /// Creates AppState backed by the configured SQLite database.
    ///
    /// Opening the repository runs the schema migration, so this must
    /// complete before the router starts serving.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
        Ok(Self::build(repo.clone(), repo, config.export_path.clone()))
    }

    fn build(
        distributor_repo: Arc<dyn DistributorRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        export_path: PathBuf,
    ) -> Self {
        Self {
            distributor_repo,
            answer_repo,
            export_path: Arc::new(export_path),
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    impl AppState {
        /// Creates an AppState backed by an in-memory SQLite database.
        ///
        /// Data is lost when the state is dropped; the export path should
        /// point into a temporary directory.
        pub(crate) async fn in_memory(export_path: PathBuf) -> Self {
            let repo = Arc::new(
                SqliteRepository::new_in_memory()
                    .await
                    .expect("in-memory database should open"),
            );
            Self::build(repo.clone(), repo, export_path)
        }
    }
}
