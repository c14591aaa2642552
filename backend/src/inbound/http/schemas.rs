//! OpenAPI schema definitions for response bodies.
//!
//! Handlers serialise the generic [`super::envelope::Envelope`] and the
//! domain [`crate::domain::Error`]; neither derives `ToSchema`. The wrappers
//! below mirror their concrete JSON shapes for documentation only.

use utoipa::ToSchema;

use super::answers::AnswerResponse;
use super::questions::QuestionResponse;

/// Error body returned with every 4xx and 5xx response.
#[derive(ToSchema)]
pub struct ErrorSchema {
    /// Human-readable summary.
    #[schema(example = "Failed to fetch questions")]
    pub message: String,
    /// Underlying cause, present for database failures.
    #[schema(example = "connection refused")]
    pub error: Option<String>,
}

/// Confirmation body without a payload.
#[derive(ToSchema)]
pub struct MessageSchema {
    #[schema(example = "Question deleted successfully")]
    pub message: String,
}

/// Envelope carrying one question.
#[derive(ToSchema)]
pub struct QuestionEnvelopeSchema {
    #[schema(example = "Question created successfully")]
    pub message: Option<String>,
    pub data: QuestionResponse,
}

/// Envelope carrying a list of questions.
#[derive(ToSchema)]
pub struct QuestionListEnvelopeSchema {
    pub data: Vec<QuestionResponse>,
}

/// Envelope carrying one answer.
#[derive(ToSchema)]
pub struct AnswerEnvelopeSchema {
    #[schema(example = "Answer created successfully")]
    pub message: String,
    pub data: AnswerResponse,
}

/// Envelope carrying a list of answers.
#[derive(ToSchema)]
pub struct AnswerListEnvelopeSchema {
    pub data: Vec<AnswerResponse>,
}

/// Database clock reading.
#[derive(ToSchema)]
pub struct ServerTimeSchema {
    #[schema(example = "2024-05-01T12:00:00.000000Z")]
    pub time: String,
}

/// `/test` success body.
#[derive(ToSchema)]
pub struct ConnectivityEnvelopeSchema {
    #[schema(example = "Server API is working")]
    pub message: String,
    pub data: ServerTimeSchema,
}
