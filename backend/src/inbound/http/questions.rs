//! Question HTTP handlers.
//!
//! ```text
//! POST   /questions
//! GET    /questions
//! GET    /questions/search?title=&category=
//! GET    /questions/{id}
//! PUT    /questions/{id}
//! DELETE /questions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Question, QuestionDraft, QuestionPatch, QuestionSearch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{
    ErrorSchema, MessageSchema, QuestionEnvelopeSchema, QuestionListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{internal_failure, parse_question_id};

const QUESTION_NOT_FOUND: &str = "Question not found";

/// Request payload for creating a question.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(example = "How do I share state between actix workers?")]
    pub title: Option<String>,
    #[schema(example = "Each worker builds its own App.")]
    pub description: Option<String>,
    #[schema(example = "rust")]
    pub category: Option<String>,
}

/// Request payload for a partial question update. Category is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Query string for `GET /questions/search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuestionsParams {
    /// Case-insensitive title fragment.
    pub title: Option<String>,
    /// Case-insensitive category fragment.
    pub category: Option<String>,
}

/// Question as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.get(),
            title: question.title,
            description: question.description,
            category: question.category,
        }
    }
}

fn into_responses(questions: Vec<Question>) -> Vec<QuestionResponse> {
    questions.into_iter().map(QuestionResponse::from).collect()
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionEnvelopeSchema),
        (status = 400, description = "Missing title, description or category", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuestionRequest>,
) -> ApiResult<HttpResponse> {
    let CreateQuestionRequest {
        title,
        description,
        category,
    } = payload.into_inner();
    let draft = QuestionDraft::new(title, description, category)?;

    let question = state
        .questions
        .create(&draft)
        .await
        .map_err(|err| internal_failure("Failed to create question", err))?;

    Ok(HttpResponse::Created().json(Envelope::with_message(
        "Question created successfully",
        QuestionResponse::from(question),
    )))
}

/// List every question, newest first.
#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "All questions", body = QuestionListEnvelopeSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let questions = state
        .questions
        .list()
        .await
        .map_err(|err| internal_failure("Failed to fetch questions", err))?;

    Ok(HttpResponse::Ok().json(Envelope::data(into_responses(questions))))
}

/// Search questions by title and/or category.
#[utoipa::path(
    get,
    path = "/questions/search",
    params(SearchQuestionsParams),
    responses(
        (status = 200, description = "Matching questions, possibly none", body = QuestionListEnvelopeSchema),
        (status = 400, description = "Neither filter supplied", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[get("/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuestionsParams>,
) -> ApiResult<HttpResponse> {
    let SearchQuestionsParams { title, category } = query.into_inner();
    let search = QuestionSearch::new(title, category)?;

    let questions = state
        .questions
        .search(&search)
        .await
        .map_err(|err| internal_failure("Failed to search questions", err))?;

    Ok(HttpResponse::Ok().json(Envelope::data(into_responses(questions))))
}

/// Fetch a single question.
#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "The question", body = QuestionEnvelopeSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Question not found", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "getQuestion"
)]
#[get("/questions/{id}")]
pub async fn get_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_question_id(&path)?;

    let question = state
        .questions
        .find_by_id(id)
        .await
        .map_err(|err| internal_failure("Failed to fetch question", err))?
        .ok_or_else(|| Error::not_found(QUESTION_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(Envelope::data(QuestionResponse::from(question))))
}

/// Update a question's title and/or description.
#[utoipa::path(
    put,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question identifier")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = QuestionEnvelopeSchema),
        (status = 400, description = "Neither title nor description supplied", body = ErrorSchema),
        (status = 404, description = "Question not found", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "updateQuestion"
)]
#[put("/questions/{id}")]
pub async fn update_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateQuestionRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_question_id(&path)?;
    let UpdateQuestionRequest { title, description } = payload.into_inner();
    let patch = QuestionPatch::new(title, description)?;

    let question = state
        .questions
        .update(id, &patch)
        .await
        .map_err(|err| internal_failure("Failed to update question", err))?
        .ok_or_else(|| Error::not_found(QUESTION_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(Envelope::with_message(
        "Question updated successfully",
        QuestionResponse::from(question),
    )))
}

/// Delete a question and its answers.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = MessageSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Question not found", body = ErrorSchema),
        (status = 500, description = "Database failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_question_id(&path)?;

    let deleted = state
        .questions
        .delete(id)
        .await
        .map_err(|err| internal_failure("Failed to delete question", err))?;
    if !deleted {
        return Err(Error::not_found(QUESTION_NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(Envelope::message("Question deleted successfully")))
}

#[cfg(test)]
mod tests;
