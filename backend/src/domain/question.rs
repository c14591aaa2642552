//! Question aggregate and the validated inputs used to create, patch, and
//! search questions.
//!
//! Constructors treat absent and empty strings alike. Any non-empty value,
//! whitespace included, is accepted and stored exactly as given.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Database-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A stored question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Identifier assigned on insert.
    pub id: QuestionId,
    /// Short headline.
    pub title: String,
    /// Full question body.
    pub description: String,
    /// Free-form category label.
    pub category: String,
}

/// Validation failures for question inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    /// Create request lacks one of the required fields.
    #[error("Title, description and category are required")]
    MissingRequiredFields,
    /// Update request supplies neither title nor description.
    #[error("At least title or description must be provided")]
    EmptyPatch,
    /// Search request supplies neither title nor category.
    #[error("At least title or category must be provided")]
    EmptySearch,
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.is_empty())
}

/// Fields for a new question; all three are present and non-empty.
///
/// # Examples
/// ```
/// use backend::domain::QuestionDraft;
///
/// let draft = QuestionDraft::new(
///     Some("Borrow checker".to_owned()),
///     Some("Why does this not compile?".to_owned()),
///     Some("rust".to_owned()),
/// )
/// .expect("all fields supplied");
/// assert_eq!(draft.category(), "rust");
///
/// assert!(QuestionDraft::new(Some("t".to_owned()), None, Some("c".to_owned())).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    title: String,
    description: String,
    category: String,
}

impl QuestionDraft {
    /// Validate the raw request fields.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<Self, QuestionValidationError> {
        match (supplied(title), supplied(description), supplied(category)) {
            (Some(title), Some(description), Some(category)) => Ok(Self {
                title,
                description,
                category,
            }),
            _ => Err(QuestionValidationError::MissingRequiredFields),
        }
    }

    /// Question title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Question description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Question category.
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Partial update of a question's title and/or description.
///
/// Fields left as `None` keep their stored value. Category is not patchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPatch {
    title: Option<String>,
    description: Option<String>,
}

impl QuestionPatch {
    /// Validate the raw request fields; at least one must be supplied.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Self, QuestionValidationError> {
        let patch = Self {
            title: supplied(title),
            description: supplied(description),
        };
        if patch.title.is_none() && patch.description.is_none() {
            return Err(QuestionValidationError::EmptyPatch);
        }
        Ok(patch)
    }

    /// Replacement title, if supplied.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replacement description, if supplied.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Apply the patch to an existing question.
    pub fn apply_to(&self, question: &mut Question) {
        if let Some(title) = &self.title {
            question.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            question.description.clone_from(description);
        }
    }
}

/// Case-insensitive substring filters; present filters combine with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSearch {
    title: Option<String>,
    category: Option<String>,
}

impl QuestionSearch {
    /// Validate the raw query parameters; at least one must be supplied.
    pub fn new(
        title: Option<String>,
        category: Option<String>,
    ) -> Result<Self, QuestionValidationError> {
        let search = Self {
            title: supplied(title),
            category: supplied(category),
        };
        if search.title.is_none() && search.category.is_none() {
            return Err(QuestionValidationError::EmptySearch);
        }
        Ok(search)
    }

    /// Title fragment to match.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Category fragment to match.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether `question` satisfies every supplied filter.
    pub fn matches(&self, question: &Question) -> bool {
        fn contains(haystack: &str, needle: Option<&str>) -> bool {
            needle.is_none_or(|needle| haystack.to_lowercase().contains(&needle.to_lowercase()))
        }

        contains(&question.title, self.title()) && contains(&question.category, self.category())
    }
}
