//! Answers attached to a parent question.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::QuestionId;

/// Maximum answer length, counted in Unicode scalar values.
pub const MAX_ANSWER_CONTENT_CHARS: usize = 300;

/// Database-assigned answer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerId(i32);

impl AnswerId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Identifier assigned on insert.
    pub id: AnswerId,
    /// Parent question.
    pub question_id: QuestionId,
    /// Answer text.
    pub content: String,
}

/// Validation failures for answer content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerValidationError {
    /// Content is absent or empty.
    #[error("Content is required")]
    Missing,
    /// Content exceeds [`MAX_ANSWER_CONTENT_CHARS`].
    #[error("Content must not exceed 300 characters")]
    TooLong,
}

/// Non-empty answer text of at most [`MAX_ANSWER_CONTENT_CHARS`] characters.
///
/// # Examples
/// ```
/// use backend::domain::{AnswerContent, AnswerValidationError};
///
/// assert!(AnswerContent::new(Some("Use an Arc.".to_owned())).is_ok());
/// assert_eq!(
///     AnswerContent::new(Some("x".repeat(301))),
///     Err(AnswerValidationError::TooLong)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerContent(String);

impl AnswerContent {
    /// Validate raw request content.
    pub fn new(content: Option<String>) -> Result<Self, AnswerValidationError> {
        let content = content
            .filter(|raw| !raw.is_empty())
            .ok_or(AnswerValidationError::Missing)?;
        if content.chars().count() > MAX_ANSWER_CONTENT_CHARS {
            return Err(AnswerValidationError::TooLong);
        }
        Ok(Self(content))
    }

    /// Borrow the validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the validated text.
    pub fn into_inner(self) -> String {
        self.0
    }
}
