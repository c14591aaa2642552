//! Port for question persistence.
//!
//! Lookups by identifier return `Ok(None)` for unknown questions so callers
//! decide how absence surfaces; only infrastructure failures are errors.

use async_trait::async_trait;

use crate::domain::{Question, QuestionDraft, QuestionId, QuestionPatch, QuestionSearch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "{message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "{message}",
    }
}

/// Port for storing and querying questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a question and return the stored row.
    async fn create(&self, draft: &QuestionDraft) -> Result<Question, QuestionRepositoryError>;

    /// Every question, newest identifier first.
    async fn list(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions matching every supplied filter, newest identifier first.
    async fn search(
        &self,
        search: &QuestionSearch,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch a single question.
    async fn find_by_id(&self, id: QuestionId)
    -> Result<Option<Question>, QuestionRepositoryError>;

    /// Apply a partial update; returns `None` when the question is absent.
    async fn update(
        &self,
        id: QuestionId,
        patch: &QuestionPatch,
    ) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Delete a question together with its answers.
    ///
    /// Returns `false` when no question had the identifier.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}
