//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler in the inbound HTTP layer together
//! with the documentation-only response schemas from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::answers::{AnswerResponse, CreateAnswerRequest};
use crate::inbound::http::questions::{
    CreateQuestionRequest, QuestionResponse, UpdateQuestionRequest,
};
use crate::inbound::http::schemas::{ErrorSchema, MessageSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Questions and answers API",
        description = "CRUD over questions and their answers, backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::questions::create_question,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::questions::get_question,
        crate::inbound::http::questions::update_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::answers::create_answer,
        crate::inbound::http::answers::list_answers,
        crate::inbound::http::answers::delete_answers,
        crate::inbound::http::health::database_check,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuestionResponse,
        AnswerResponse,
        CreateQuestionRequest,
        UpdateQuestionRequest,
        CreateAnswerRequest,
        ErrorSchema,
        MessageSchema
    )),
    tags(
        (name = "questions", description = "Create, read, search, update and delete questions"),
        (name = "answers", description = "Answers scoped to a question"),
        (name = "health", description = "Probes and database connectivity")
    )
)]
pub struct ApiDoc;
