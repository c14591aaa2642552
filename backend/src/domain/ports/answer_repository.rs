//! Port for answer persistence scoped to a parent question.
//!
//! Every operation checks that the parent exists and fails with
//! [`AnswerRepositoryError::QuestionNotFound`] otherwise. Adapters run the
//! check and the dependent statement atomically.

use async_trait::async_trait;

use crate::domain::{Answer, AnswerContent, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by answer repository adapters.
    pub enum AnswerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "{message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "{message}",
        /// The parent question does not exist.
        QuestionNotFound { question_id: i32 } => "question {question_id} not found",
    }
}

/// Port for storing and querying answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Insert an answer under `question_id`.
    async fn create(
        &self,
        question_id: QuestionId,
        content: &AnswerContent,
    ) -> Result<Answer, AnswerRepositoryError>;

    /// Answers of `question_id`, newest identifier first.
    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, AnswerRepositoryError>;

    /// Remove every answer of `question_id`, returning how many went.
    async fn delete_all_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<usize, AnswerRepositoryError>;
}
