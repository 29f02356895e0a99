use async_trait::async_trait;

use crate::registration::{Distributor, DistributorAnswer, NewDistributor};

use super::Result;

/// Repository for distributor registration records.
#[async_trait]
pub trait DistributorRepository: Send + Sync {
    /// Persists a new distributor and returns the stored record with its
    /// freshly generated id.
    async fn create_distributor(&self, new: &NewDistributor) -> Result<Distributor>;

    /// Lists all distributors, ordered by id ascending.
    async fn list_distributors(&self) -> Result<Vec<Distributor>>;
}

/// Repository for survey answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Records a batch of answers for one distributor.
    ///
    /// Fails with [`RepositoryError::NotFound`] when the distributor id is
    /// unknown, in which case nothing is persisted. The batch is applied
    /// atomically; resubmitting a question number overwrites the prior
    /// answer.
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn record_answers(
        &self,
        distributor_id: i64,
        answers: &[(u32, Option<String>)],
    ) -> Result<()>;

    /// Lists all answers, ordered by id ascending.
    async fn list_answers(&self) -> Result<Vec<DistributorAnswer>>;
}
