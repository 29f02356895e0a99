//! SQLite repository implementation.
//!
//! Implements the repository traits from `distreg_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use distreg_core::registration::{Distributor, DistributorAnswer, NewDistributor};
use distreg_core::storage::{AnswerRepository, DistributorRepository, RepositoryError, Result};

use super::conversions::{row_to_answer, row_to_distributor};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// One connection serves the whole process; tokio-rusqlite serializes access
/// to it, which is the only write coordination this service needs.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. The schema
    /// migration runs here, once, before any request touches the store.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// DistributorRepository implementation
// ============================================================================

#[async_trait]
impl DistributorRepository for SqliteRepository {
    async fn create_distributor(&self, new: &NewDistributor) -> Result<Distributor> {
        let new = new.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_DISTRIBUTOR,
                    rusqlite::params![
                        new.distributor_name,
                        new.contact_person,
                        new.email,
                        new.phone,
                        new.address
                    ],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(Distributor::from_new(id, new))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Distributor"))
    }

    async fn list_distributors(&self) -> Result<Vec<Distributor>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_DISTRIBUTORS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_distributor).map_err(wrap_err)?;

                let mut distributors = Vec::new();
                for row_result in rows {
                    distributors.push(row_result.map_err(wrap_err)?);
                }
                Ok(distributors)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Distributor"))
    }
}

// ============================================================================
// AnswerRepository implementation
// ============================================================================

#[async_trait]
impl AnswerRepository for SqliteRepository {
    async fn record_answers(
        &self,
        distributor_id: i64,
        answers: &[(u32, Option<String>)],
    ) -> Result<()> {
        let answers = answers.to_vec();

        self.conn
            .call(move |conn| {
                // One transaction for the whole batch: the existence check
                // and every upsert either all commit or all roll back.
                let tx = conn.transaction().map_err(wrap_err)?;

                let exists: bool = tx
                    .query_row(schema::SELECT_DISTRIBUTOR_EXISTS, [distributor_id], |row| {
                        row.get(0)
                    })
                    .map_err(wrap_err)?;
                if !exists {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }

                for (question_number, answer) in &answers {
                    tx.execute(
                        schema::UPSERT_ANSWER,
                        rusqlite::params![distributor_id, question_number, answer],
                    )
                    .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error_with_id(e, "Distributor", distributor_id.to_string())
            })
    }

    async fn list_answers(&self) -> Result<Vec<DistributorAnswer>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_ANSWERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_answer).map_err(wrap_err)?;

                let mut answers = Vec::new();
                for row_result in rows {
                    answers.push(row_result.map_err(wrap_err)?);
                }
                Ok(answers)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "DistributorAnswer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> NewDistributor {
        NewDistributor {
            distributor_name: "Acme".to_string(),
            contact_person: "Jo".to_string(),
            email: "jo@acme.com".to_string(),
            phone: "555".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_fresh_ids_and_list_matches() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let first = repo.create_distributor(&acme()).await.unwrap();
        let mut second_payload = acme();
        second_payload.distributor_name = "Globex".to_string();
        let second = repo.create_distributor(&second_payload).await.unwrap();

        assert_ne!(first.id, second.id);

        let listed = repo.list_distributors().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], first);
        assert_eq!(listed[1].distributor_name, "Globex");
    }

    #[tokio::test]
    async fn record_answers_persists_one_row_per_question() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let distributor = repo.create_distributor(&acme()).await.unwrap();

        let batch = vec![
            (1, Some("Yes".to_string())),
            (2, Some("No".to_string())),
            (3, None),
        ];
        repo.record_answers(distributor.id, &batch).await.unwrap();

        let answers = repo.list_answers().await.unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers[0].distributor_id, distributor.id);
        assert_eq!(answers[0].question_number, 1);
        assert_eq!(answers[0].answer.as_deref(), Some("Yes"));
        assert_eq!(answers[1].answer.as_deref(), Some("No"));
        assert_eq!(answers[2].answer, None);
    }

    #[tokio::test]
    async fn record_answers_unknown_distributor_fails_and_persists_nothing() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let batch = vec![(1, Some("Yes".to_string()))];
        let err = repo.record_answers(999, &batch).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity_type: "Distributor",
                id: "999".to_string(),
            }
        );
        assert!(repo.list_answers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn resubmitting_a_question_overwrites_the_answer() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let distributor = repo.create_distributor(&acme()).await.unwrap();

        repo.record_answers(distributor.id, &[(1, Some("Yes".to_string()))])
            .await
            .unwrap();
        repo.record_answers(distributor.id, &[(1, Some("No".to_string()))])
            .await
            .unwrap();

        let answers = repo.list_answers().await.unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].answer.as_deref(), Some("No"));
    }

    #[tokio::test]
    async fn file_backed_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("distreg-test.db");
        let path_str = path.to_str().unwrap();

        {
            let repo = SqliteRepository::new(path_str).await.unwrap();
            repo.create_distributor(&acme()).await.unwrap();
        }

        let repo = SqliteRepository::new(path_str).await.unwrap();
        let listed = repo.list_distributors().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].distributor_name, "Acme");
    }
}
