//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::ports::{
    AnswerRepository, ConnectivityProbe, MockAnswerRepository, MockConnectivityProbe,
    MockQuestionRepository, QuestionRepository,
};
use crate::inbound::http::routing::{configure_routes, route_not_found};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::test_support::InMemoryQnaStore;

/// State backed entirely by one in-memory store.
pub fn store_state(store: &Arc<InMemoryQnaStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(HttpStatePorts {
        questions: store.clone(),
        answers: store.clone(),
        connectivity: store.clone(),
    }))
}

/// State whose question port is a mock; other ports are unused mocks.
pub fn question_mock_state(questions: MockQuestionRepository) -> web::Data<HttpState> {
    mock_state(Arc::new(questions), Arc::new(MockAnswerRepository::new()))
}

/// State whose answer port is a mock; other ports are unused mocks.
pub fn answer_mock_state(answers: MockAnswerRepository) -> web::Data<HttpState> {
    mock_state(Arc::new(MockQuestionRepository::new()), Arc::new(answers))
}

fn mock_state(
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
) -> web::Data<HttpState> {
    let connectivity: Arc<dyn ConnectivityProbe> = Arc::new(MockConnectivityProbe::new());
    web::Data::new(HttpState::new(HttpStatePorts {
        questions,
        answers,
        connectivity,
    }))
}

/// Run one request through the full route table and decode the JSON body.
pub async fn send(state: &web::Data<HttpState>, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes)
            .default_service(web::to(route_not_found)),
    )
    .await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}
