use answer_judge_core::database::convex::ConvexStore;
use answer_judge_core::database::error::StoreError;
use answer_judge_core::database::{DocumentStore, NewAiAnswer};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn store(server: &MockServer) -> ConvexStore {
    ConvexStore::new(format!("{}/api/", server.uri()), reqwest::Client::new())
}

#[tokio::test]
async fn test_base_url_is_normalized() {
    let server = MockServer::start().await;
    let store = store(&server).await;
    assert_eq!(store.url(), server.uri());
}

#[tokio::test]
async fn test_query_question_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .and(body_partial_json(json!({
            "path": "question:getQuestionById",
            "args": { "id": "q1" },
            "format": "json",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "value": {
                "_id": "q1",
                "_creationTime": 1720000000000.0,
                "title": "What is AI?",
                "body": "Explain AI in one sentence.",
                "mainCategory": "tech",
                "subCategory": "ai",
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let question = store(&server)
        .await
        .question_by_id("q1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(question.id, "q1");
    assert_eq!(question.main_category, "tech");
    assert_eq!(question.user_id, None);
}

#[tokio::test]
async fn test_missing_question_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "value": null })),
        )
        .mount(&server)
        .await;

    let question = store(&server).await.question_by_id("q404").await.unwrap();
    assert!(question.is_none());
}

#[tokio::test]
async fn test_null_answer_list_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .and(body_partial_json(json!({
            "path": "question:getAIAnswer",
            "args": { "questionId": "q1" },
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "value": null })),
        )
        .mount(&server)
        .await;

    let answers = store(&server).await.ai_answers("q1").await.unwrap();
    assert!(answers.is_empty());
}

#[tokio::test]
async fn test_answers_without_ai_name_default_to_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "value": [
                { "_id": "a1", "questionId": "q1", "content": "AI is ...", "aiName": "Kimi" },
                { "_id": "a2", "questionId": "q1", "content": "AI was ..." },
            ],
        })))
        .mount(&server)
        .await;

    let answers = store(&server).await.ai_answers("q1").await.unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].ai_name, "Kimi");
    assert_eq!(answers[1].ai_name, "unknown");
}

#[tokio::test]
async fn test_create_ai_answer_is_a_mutation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/mutation"))
        .and(body_partial_json(json!({
            "path": "question:createSampleAIAnswer",
            "args": { "questionId": "q1", "content": "AI is ...", "aiName": "MiniMax" },
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "value": "a9" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let id = store(&server)
        .await
        .create_ai_answer(&NewAiAnswer {
            question_id: "q1".to_string(),
            content: "AI is ...".to_string(),
            ai_name: "MiniMax".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(id, "a9");
}

#[tokio::test]
async fn test_argument_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "errorMessage": "ArgumentValidationError: Value does not match validator. Path: .id",
        })))
        .mount(&server)
        .await;

    let err = store(&server)
        .await
        .question_by_id("not-an-id")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_function_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "errorMessage": "Server Error: Uncaught Error: boom",
        })))
        .mount(&server)
        .await;

    let err = store(&server).await.search_questions("AI").await.unwrap_err();
    assert!(matches!(err, StoreError::FunctionError { .. }));
}

#[tokio::test]
async fn test_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = store(&server)
        .await
        .questions_by_category("tech")
        .await
        .unwrap_err();
    match err {
        StoreError::StatusError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
