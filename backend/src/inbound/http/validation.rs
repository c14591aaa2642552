//! Shared validation helpers for inbound HTTP adapters.

use std::fmt::Display;

use tracing::error;

use crate::domain::{AnswerValidationError, Error, QuestionId, QuestionValidationError};

/// Message returned when a path identifier is not a 32-bit integer.
pub(crate) const INVALID_QUESTION_ID: &str = "Question id must be an integer";

/// Parse the `{id}` / `{question_id}` path segment.
pub(crate) fn parse_question_id(raw: &str) -> Result<QuestionId, Error> {
    raw.parse()
        .map_err(|_| Error::invalid_request(INVALID_QUESTION_ID))
}

/// Log an infrastructure failure and wrap it in a 500 with the cause attached.
pub(crate) fn internal_failure(message: &'static str, cause: impl Display) -> Error {
    let detail = cause.to_string();
    error!(error = %detail, "{message}");
    Error::internal(message).with_detail(detail)
}

impl From<QuestionValidationError> for Error {
    fn from(err: QuestionValidationError) -> Self {
        Error::invalid_request(err.to_string())
    }
}

impl From<AnswerValidationError> for Error {
    fn from(err: AnswerValidationError) -> Self {
        Error::invalid_request(err.to_string())
    }
}
