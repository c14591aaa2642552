//! Answer HTTP handlers, scoped under a parent question.
//!
//! ```text
//! POST   /questions/{question_id}/answers
//! GET    /questions/{question_id}/answers
//! DELETE /questions/{question_id}/answers
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::AnswerRepositoryError;
use crate::domain::{Answer, AnswerContent, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{
    AnswerEnvelopeSchema, AnswerListEnvelopeSchema, ErrorSchema, MessageSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{internal_failure, parse_question_id};

/// Request payload for creating an answer.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateAnswerRequest {
    /// At most 300 characters.
    #[schema(example = "Wrap the pool in web::Data.")]
    pub content: Option<String>,
}

/// Answer as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub question_id: i32,
    pub content: String,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id.get(),
            question_id: answer.question_id.get(),
            content: answer.content,
        }
    }
}

fn map_repository_error(message: &'static str, err: AnswerRepositoryError) -> Error {
    match err {
        AnswerRepositoryError::QuestionNotFound { .. } => Error::not_found("Question not found"),
        other => internal_failure(message, other),
    }
}

/// Answer a question.
#[utoipa::path(
    post,
    path = "/questions/{question_id}/answers",
    params(("question_id" = i32, Path, description = "Parent question identifier")),
    request_body = CreateAnswerRequest,
    responses(
        (status = 201, description = "Answer created", body = AnswerEnvelopeSchema),
        (status = 400, description = "Content missing or too long", body = ErrorSchema),
        (status = 404, description = "Question not found", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["answers"],
    operation_id = "createAnswer"
)]
#[post("/questions/{question_id}/answers")]
pub async fn create_answer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CreateAnswerRequest>,
) -> ApiResult<HttpResponse> {
    let question_id = parse_question_id(&path)?;
    let content = AnswerContent::new(payload.into_inner().content)?;

    let answer = state
        .answers
        .create(question_id, &content)
        .await
        .map_err(|err| map_repository_error("Failed to create answer", err))?;

    Ok(HttpResponse::Created().json(Envelope::with_message(
        "Answer created successfully",
        AnswerResponse::from(answer),
    )))
}

/// List a question's answers, newest first.
#[utoipa::path(
    get,
    path = "/questions/{question_id}/answers",
    params(("question_id" = i32, Path, description = "Parent question identifier")),
    responses(
        (status = 200, description = "Answers, possibly none", body = AnswerListEnvelopeSchema),
        (status = 404, description = "Question not found", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["answers"],
    operation_id = "listAnswers"
)]
#[get("/questions/{question_id}/answers")]
pub async fn list_answers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let question_id = parse_question_id(&path)?;

    let answers = state
        .answers
        .list_for_question(question_id)
        .await
        .map_err(|err| map_repository_error("Failed to fetch answers", err))?;

    let body: Vec<AnswerResponse> = answers.into_iter().map(AnswerResponse::from).collect();
    Ok(HttpResponse::Ok().json(Envelope::data(body)))
}

/// Delete every answer of a question.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}/answers",
    params(("question_id" = i32, Path, description = "Parent question identifier")),
    responses(
        (status = 200, description = "Answers deleted, possibly none", body = MessageSchema),
        (status = 404, description = "Question not found", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["answers"],
    operation_id = "deleteAnswers"
)]
#[delete("/questions/{question_id}/answers")]
pub async fn delete_answers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let question_id = parse_question_id(&path)?;

    let removed = state
        .answers
        .delete_all_for_question(question_id)
        .await
        .map_err(|err| map_repository_error("Failed to delete answers", err))?;
    tracing::debug!(%question_id, removed, "answers deleted");

    Ok(HttpResponse::Ok().json(Envelope::message("All answers deleted successfully")))
}
