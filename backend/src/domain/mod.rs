//! Domain primitives and aggregates.
//!
//! Purpose: define the question and answer types shared by the HTTP and
//! persistence layers, along with the validation rules applied to incoming
//! requests and the ports adapters implement.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Question / QuestionDraft / QuestionPatch / QuestionSearch.
//! - Answer / AnswerContent.
//! - TraceId: request-scoped correlation identifier.

pub mod answer;
pub mod error;
pub mod ports;
pub mod question;
pub mod trace_id;

pub use self::answer::{
    Answer, AnswerContent, AnswerId, AnswerValidationError, MAX_ANSWER_CONTENT_CHARS,
};
pub use self::error::{Error, ErrorCode};
pub use self::question::{
    Question, QuestionDraft, QuestionId, QuestionPatch, QuestionSearch, QuestionValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Question not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
