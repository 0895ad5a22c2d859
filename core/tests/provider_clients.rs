use answer_judge_core::model::error::ModelError;
use answer_judge_core::model::kimi::{KimiConfig, KimiModel};
use answer_judge_core::model::minimax::{MinimaxConfig, MinimaxModel};
use answer_judge_core::model::ChatModel;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn minimax(server: &MockServer) -> MinimaxModel {
    MinimaxModel::new(
        MinimaxConfig {
            api_key: Some(SecretString::from("mm-key".to_string())),
            group_id: Some("group-1".to_string()),
            base_url: server.uri(),
            ..Default::default()
        },
        reqwest::Client::new(),
    )
}

fn kimi(server: &MockServer) -> KimiModel {
    KimiModel::new(
        KimiConfig {
            api_key: Some(SecretString::from("kimi-key".to_string())),
            base_url: format!("{}/v1", server.uri()),
            ..Default::default()
        },
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn test_minimax_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text/chatcompletion_pro"))
        .and(query_param("GroupId", "group-1"))
        .and(header("authorization", "Bearer mm-key"))
        .and(body_partial_json(json!({
            "model": "MiniMax-Text-01",
            "tokens_to_generate": 1024,
            "reply_constraints": { "sender_type": "BOT", "sender_name": "MM智能助理" },
            "messages": [
                { "sender_type": "USER", "sender_name": "小明", "text": "compare these" }
            ],
            "bot_setting": [
                { "bot_name": "MM智能助理", "content": "you are a judge" }
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "0.85",
            "base_resp": { "status_code": 0, "status_msg": "success" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = minimax(&server)
        .complete("you are a judge", "compare these", 0.3)
        .await
        .unwrap();
    assert_eq!(reply, "0.85");
}

#[tokio::test]
async fn test_minimax_answer_uses_persona_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text/chatcompletion_pro"))
        .and(body_partial_json(json!({
            "reply_constraints": { "sender_type": "BOT", "sender_name": "简洁明了知乎用户" },
            "messages": [
                { "sender_type": "USER", "sender_name": "中枢控制", "text": "桂林怎么玩？" }
            ],
            "bot_setting": [{
                "bot_name": "简洁明了知乎用户",
                "content": "请简洁明了地回答问题，不要长篇大论。你是一个知乎的普通用户，",
            }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "坐竹筏游漓江",
            "base_resp": { "status_code": 0, "status_msg": "success" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = minimax(&server).answer("桂林怎么玩？", 0.6).await.unwrap();
    assert_eq!(reply, "坐竹筏游漓江");
}

#[tokio::test]
async fn test_minimax_base_resp_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text/chatcompletion_pro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "",
            "base_resp": { "status_code": 1004, "status_msg": "authentication failed" },
        })))
        .mount(&server)
        .await;

    let err = minimax(&server)
        .complete("system", "prompt", 0.3)
        .await
        .unwrap_err();
    match err {
        ModelError::ProviderError { message, .. } => {
            assert!(message.contains("authentication failed"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_minimax_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text/chatcompletion_pro"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let err = minimax(&server)
        .complete("system", "prompt", 0.3)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::StatusError { status: 500, .. }));
}

#[tokio::test]
async fn test_minimax_without_group_id() {
    let model = MinimaxModel::new(
        MinimaxConfig {
            api_key: Some(SecretString::from("mm-key".to_string())),
            ..Default::default()
        },
        reqwest::Client::new(),
    );

    let err = model.complete("system", "prompt", 0.3).await.unwrap_err();
    assert!(matches!(err, ModelError::CredentialsError(_)));
}

#[tokio::test]
async fn test_kimi_chat_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer kimi-key"))
        .and(body_partial_json(json!({
            "model": "kimi-k2-0711-preview",
            "messages": [
                { "role": "system", "content": "you are a judge" },
                { "role": "user", "content": "compare these" },
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cmpl-1",
            "object": "chat.completion",
            "created": 1720000000,
            "model": "kimi-k2-0711-preview",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "相似度：0.9" },
                "finish_reason": "stop",
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14 },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = kimi(&server)
        .complete("you are a judge", "compare these", 0.3)
        .await
        .unwrap();
    assert_eq!(reply, "相似度：0.9");
}

#[tokio::test]
async fn test_kimi_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cmpl-2",
            "object": "chat.completion",
            "created": 1720000000,
            "model": "kimi-k2-0711-preview",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "  " },
                "finish_reason": "stop",
            }],
        })))
        .mount(&server)
        .await;

    let err = kimi(&server)
        .complete("system", "prompt", 0.6)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::EmptyReply(_)));
}

#[tokio::test]
async fn test_kimi_without_api_key() {
    let model = KimiModel::new(KimiConfig::default(), reqwest::Client::new());
    let err = model.complete("system", "prompt", 0.3).await.unwrap_err();
    assert!(matches!(err, ModelError::CredentialsError(_)));
}
