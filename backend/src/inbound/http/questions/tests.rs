//! Tests for question API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::ports::{MockQuestionRepository, QuestionRepositoryError};
use crate::inbound::http::test_utils::{question_mock_state, send, store_state};
use crate::test_support::InMemoryQnaStore;

#[fixture]
fn store() -> Arc<InMemoryQnaStore> {
    Arc::new(InMemoryQnaStore::default())
}

fn message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str)
}

#[rstest]
#[actix_web::test]
async fn create_echoes_the_stored_row(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::post().uri("/questions").set_json(json!({
            "title": "Pinning futures",
            "description": "When is Box::pin needed?",
            "category": "async"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": "Question created successfully",
            "data": {
                "id": 1,
                "title": "Pinning futures",
                "description": "When is Box::pin needed?",
                "category": "async"
            }
        })
    );
    assert_eq!(store.question_count(), 1);
}

#[rstest]
#[case(json!({"description": "d", "category": "c"}))]
#[case(json!({"title": "t", "category": "c"}))]
#[case(json!({"title": "t", "description": "d"}))]
#[case(json!({"title": "", "description": "d", "category": "c"}))]
#[actix_web::test]
async fn create_rejects_missing_fields(store: Arc<InMemoryQnaStore>, #[case] payload: Value) {
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::post().uri("/questions").set_json(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&body),
        Some("Title, description and category are required")
    );
    assert_eq!(store.question_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn create_accepts_whitespace_values(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::post()
            .uri("/questions")
            .set_json(json!({"title": "t", "description": "d", "category": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["category"], "   ");
    assert_eq!(store.question_count(), 1);
}

#[rstest]
#[actix_web::test]
async fn create_rejects_malformed_json(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::post()
            .uri("/questions")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\":"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), Some("Invalid JSON body"));
    assert!(body.get("error").is_some());
}

#[rstest]
#[actix_web::test]
async fn create_reports_database_failures() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(QuestionRepositoryError::query("relation \"questions\" does not exist")));
    let state = question_mock_state(repo);

    let (status, body) = send(
        &state,
        TestRequest::post()
            .uri("/questions")
            .set_json(json!({"title": "t", "description": "d", "category": "c"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "message": "Failed to create question",
            "error": "relation \"questions\" does not exist"
        })
    );
}

#[rstest]
#[actix_web::test]
async fn list_returns_newest_first(store: Arc<InMemoryQnaStore>) {
    store.insert_question("first", "d", "c");
    store.insert_question("second", "d", "c");
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::get().uri("/questions")).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|q| q["title"].as_str())
        .collect();
    assert_eq!(titles, ["second", "first"]);
    assert!(body.get("message").is_none());
}

#[rstest]
#[actix_web::test]
async fn list_reports_database_failures() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(QuestionRepositoryError::connection("timed out")));
    let state = question_mock_state(repo);

    let (status, body) = send(&state, TestRequest::get().uri("/questions")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message(&body), Some("Failed to fetch questions"));
    assert_eq!(body["error"], "timed out");
}

#[rstest]
#[case("/questions/search?title=ASYNC", &["Async traits"])]
#[case("/questions/search?category=rust", &["Async traits", "Borrowing"])]
#[case("/questions/search?title=borrow&category=RUST", &["Borrowing"])]
#[case("/questions/search?title=nothing", &[])]
#[case("/questions/search?title=&category=go", &["Goroutines"])]
#[case("/questions/search?title=%20", &["Async traits"])]
#[actix_web::test]
async fn search_matches_case_insensitively(
    store: Arc<InMemoryQnaStore>,
    #[case] uri: &str,
    #[case] expected: &[&str],
) {
    store.insert_question("Borrowing", "d", "Rust");
    store.insert_question("Goroutines", "d", "go");
    store.insert_question("Async traits", "d", "rust");
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|q| q["title"].as_str())
        .collect();
    assert_eq!(titles, expected);
}

#[rstest]
#[case("/questions/search")]
#[case("/questions/search?title=&category=")]
#[actix_web::test]
async fn search_requires_a_filter(store: Arc<InMemoryQnaStore>, #[case] uri: &str) {
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&body),
        Some("At least title or category must be provided")
    );
}

#[rstest]
#[actix_web::test]
async fn search_reports_database_failures() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_search()
        .times(1)
        .return_once(|_| Err(QuestionRepositoryError::query("boom")));
    let state = question_mock_state(repo);

    let (status, body) = send(&state, TestRequest::get().uri("/questions/search?title=x")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message(&body), Some("Failed to search questions"));
}

#[rstest]
#[actix_web::test]
async fn get_returns_the_created_row(store: Arc<InMemoryQnaStore>) {
    let question = store.insert_question("Title", "Body", "cat");
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::get().uri(&format!("/questions/{}", question.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"id": 1, "title": "Title", "description": "Body", "category": "cat"}})
    );
}

#[rstest]
#[actix_web::test]
async fn get_unknown_question_is_not_found(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::get().uri("/questions/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Question not found"}));
}

#[rstest]
#[case::get(TestRequest::get())]
#[case::put(TestRequest::put().set_json(json!({"title": "t"})))]
#[case::delete(TestRequest::delete())]
#[actix_web::test]
async fn non_integer_ids_are_rejected(store: Arc<InMemoryQnaStore>, #[case] req: TestRequest) {
    let state = store_state(&store);

    let (status, body) = send(&state, req.uri("/questions/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), Some("Question id must be an integer"));
}

#[rstest]
#[actix_web::test]
async fn get_reports_database_failures() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(QuestionRepositoryError::query("boom")));
    let state = question_mock_state(repo);

    let (status, body) = send(&state, TestRequest::get().uri("/questions/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message(&body), Some("Failed to fetch question"));
}

#[rstest]
#[actix_web::test]
async fn update_keeps_unsupplied_fields(store: Arc<InMemoryQnaStore>) {
    let question = store.insert_question("Title", "Body", "cat");
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::put()
            .uri(&format!("/questions/{}", question.id))
            .set_json(json!({"description": "New body", "category": "ignored"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Question updated successfully",
            "data": {"id": 1, "title": "Title", "description": "New body", "category": "cat"}
        })
    );
    let stored = store.question(question.id).expect("question still stored");
    assert_eq!(stored.category, "cat");
}

#[rstest]
#[case(json!({}))]
#[case(json!({"category": "only category"}))]
#[case(json!({"title": "", "description": ""}))]
#[actix_web::test]
async fn update_requires_title_or_description(
    store: Arc<InMemoryQnaStore>,
    #[case] payload: Value,
) {
    let question = store.insert_question("Title", "Body", "cat");
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::put()
            .uri(&format!("/questions/{}", question.id))
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&body),
        Some("At least title or description must be provided")
    );
}

#[rstest]
#[actix_web::test]
async fn update_unknown_question_is_not_found(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::put()
            .uri("/questions/5")
            .set_json(json!({"title": "t"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), Some("Question not found"));
}

#[rstest]
#[actix_web::test]
async fn update_reports_database_failures() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(|_, _| Err(QuestionRepositoryError::query("boom")));
    let state = question_mock_state(repo);

    let (status, body) = send(
        &state,
        TestRequest::put()
            .uri("/questions/1")
            .set_json(json!({"title": "t"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message(&body), Some("Failed to update question"));
}

#[rstest]
#[actix_web::test]
async fn delete_removes_question_and_answers(store: Arc<InMemoryQnaStore>) {
    let question = store.insert_question("Title", "Body", "cat");
    store.insert_answer(question.id, "an answer");
    let state = store_state(&store);

    let (status, body) = send(
        &state,
        TestRequest::delete().uri(&format!("/questions/{}", question.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Question deleted successfully"}));
    assert!(store.question(question.id).is_none());
    assert!(store.answers_for(question.id).is_empty());
}

#[rstest]
#[actix_web::test]
async fn delete_unknown_question_is_not_found(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::delete().uri("/questions/3")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), Some("Question not found"));
}

#[rstest]
#[actix_web::test]
async fn delete_reports_database_failures() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(|_| Err(QuestionRepositoryError::query("boom")));
    let state = question_mock_state(repo);

    let (status, body) = send(&state, TestRequest::delete().uri("/questions/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message(&body), Some("Failed to delete question"));
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_are_not_found(store: Arc<InMemoryQnaStore>) {
    let state = store_state(&store);

    let (status, body) = send(&state, TestRequest::get().uri("/nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), Some("Route not found"));
}
