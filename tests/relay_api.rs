//! 中继接口集成测试
//!
//! 在本地启动模拟的 MyMemory / Cohere 上游，通过完整路由验证翻译中继、生成中继、
//! 主页重定向和静态落地页的行为。

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::Query,
    http::{header, HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use englishmate::web::build_app;
use englishmate::{
    prompts, Generator, RelayClient, SessionConfig, Translator, TutorError, TutorSession, View,
};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{relay_config, spawn_server};

const TEST_KEY: &str = "test-key";

/// 模拟 MyMemory：译文为 `<q> (<langpair>)`
async fn mock_mymemory(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    let langpair = params.get("langpair").cloned().unwrap_or_default();
    Json(json!({
        "responseData": { "translatedText": format!("{} ({})", q, langpair) },
        "responseStatus": 200
    }))
}

/// 模拟 Cohere chat
async fn mock_cohere(headers: HeaderMap, Json(body): Json<Value>) -> axum::response::Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some("Bearer test-key");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "invalid api token" })))
            .into_response();
    }

    let message = body["message"].as_str().unwrap_or_default();
    let text = if message == prompts::SCENARIO_LIST {
        "Ordering food\nAt the bank\n".to_string()
    } else if message.starts_with("Provide an English conversation") {
        "A: Hello!\nB: Hi there!".to_string()
    } else {
        format!("echo: {} ({})", message, body["model"].as_str().unwrap_or_default())
    };
    Json(json!({ "text": text, "generation_id": "abc" })).into_response()
}

fn mock_upstreams() -> Router {
    Router::new()
        .route("/get", get(mock_mymemory))
        .route(
            "/unavailable",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") })
                .post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        )
        .route(
            "/empty",
            get(|| async { Json(json!({ "responseStatus": 200 })) })
                .post(|| async { Json(json!({ "generation_id": "abc" })) }),
        )
        .route("/html", get(|| async { "<html>not json</html>" }))
        .route("/chat", post(mock_cohere))
}

/// 启动模拟上游并返回指向它的中继应用
async fn relay_app(translate_path: &str, generate_path: &str, api_key: Option<&str>) -> Router {
    let upstream = spawn_server(mock_upstreams()).await;
    build_app(&relay_config(
        &format!("{}{}", upstream, translate_path),
        &format!("{}{}", upstream, generate_path),
        api_key,
    ))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_translate_returns_upstream_translation() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    let (status, body) = post_json(
        app,
        "/api/translate",
        json!({ "text": "How are you?", "targetLang": "bn" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "translatedText": "How are you? (en|bn)" }));
}

#[tokio::test]
async fn test_translate_requires_both_fields() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    for payload in [
        json!({ "text": "Hello" }),
        json!({ "targetLang": "bn" }),
        json!({ "text": "", "targetLang": "bn" }),
        json!({}),
    ] {
        let (status, body) = post_json(app.clone(), "/api/translate", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing parameters: text and targetLang are required."
        );
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("text=Hello"))
        .unwrap();
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing parameters: text and targetLang are required."
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/cohere")
        .body(Body::from(r#"{"prompt":"Hi"}"#))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing parameter: prompt is required.");
}

#[tokio::test]
async fn test_relays_reject_other_methods() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    for (method, uri) in [
        ("GET", "/api/translate"),
        ("PUT", "/api/translate"),
        ("GET", "/api/cohere"),
        ("DELETE", "/api/cohere"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn test_translate_passes_upstream_status_through() {
    let app = relay_app("/unavailable", "/chat", Some(TEST_KEY)).await;

    let (status, body) = post_json(
        app,
        "/api/translate",
        json!({ "text": "Hello", "targetLang": "bn" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Translation API error: Service Unavailable");
}

#[tokio::test]
async fn test_translate_rejects_unexpected_upstream_shape() {
    for path in ["/empty", "/html"] {
        let app = relay_app(path, "/chat", Some(TEST_KEY)).await;

        let (status, body) = post_json(
            app,
            "/api/translate",
            json!({ "text": "Hello", "targetLang": "bn" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", path);
        assert_eq!(body["error"], "Unexpected translation response format.");
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_server_error() {
    let app = build_app(&relay_config(
        "http://127.0.0.1:1/get",
        "http://127.0.0.1:1/chat",
        Some(TEST_KEY),
    ));

    let (status, body) = post_json(
        app.clone(),
        "/api/translate",
        json!({ "text": "Hello", "targetLang": "bn" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Translation failed due to server error.");

    let (status, body) = post_json(app, "/api/cohere", json!({ "prompt": "Hi" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Generation failed due to server error.");
}

#[tokio::test]
async fn test_generate_returns_model_text() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    let (status, body) = post_json(app, "/api/cohere", json!({ "prompt": "Say hi" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": "echo: Say hi (command-r)" }));
}

#[tokio::test]
async fn test_generate_requires_prompt() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    for payload in [json!({}), json!({ "prompt": "" })] {
        let (status, body) = post_json(app.clone(), "/api/cohere", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing parameter: prompt is required.");
    }
}

#[tokio::test]
async fn test_generate_without_api_key() {
    let app = relay_app("/get", "/chat", None).await;

    let (status, body) = post_json(app, "/api/cohere", json!({ "prompt": "Say hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Generation service is not configured.");
}

#[tokio::test]
async fn test_generate_upstream_errors() {
    let app = relay_app("/get", "/unavailable", Some(TEST_KEY)).await;
    let (status, body) = post_json(app, "/api/cohere", json!({ "prompt": "Say hi" })).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Generation API error: Too Many Requests");

    let app = relay_app("/get", "/chat", Some("wrong-key")).await;
    let (status, body) = post_json(app, "/api/cohere", json!({ "prompt": "Say hi" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Generation API error: Unauthorized");

    let app = relay_app("/get", "/empty", Some(TEST_KEY)).await;
    let (status, body) = post_json(app, "/api/cohere", json!({ "prompt": "Say hi" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Unexpected generation response format.");
}

#[tokio::test]
async fn test_root_redirects_to_landing_page() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/landing.html");
}

#[tokio::test]
async fn test_landing_page_is_served_from_static_dir() {
    let mut config = relay_config("http://127.0.0.1:1/get", "http://127.0.0.1:1/chat", None);
    config.static_dir = Some(concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string());
    let app = build_app(&config);

    let request = Request::builder()
        .uri("/landing.html")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("EnglishMate"));
}

#[tokio::test]
async fn test_cors_headers_are_present() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text":"Hi","targetLang":"bn"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_relay_client_reports_relay_errors() {
    let app = relay_app("/get", "/chat", None).await;
    let server = spawn_server(app).await;
    let client = RelayClient::new(server);

    let error = client.generate("Say hi").await.unwrap_err();
    assert_eq!(
        error,
        TutorError::Api {
            status: 500,
            message: "Generation service is not configured.".to_string(),
        }
    );

    let translated = client.translate("Good morning", "bn").await.unwrap();
    assert_eq!(translated, "Good morning (en|bn)");
}

#[tokio::test]
async fn test_session_end_to_end_through_relay() {
    let app = relay_app("/get", "/chat", Some(TEST_KEY)).await;
    let server = spawn_server(app).await;
    let client = Arc::new(RelayClient::new(format!("{}/", server)));
    let mut session = TutorSession::new(client.clone(), client, SessionConfig::default());

    let outcome = session.show_help().await;
    assert_eq!(outcome.added, 2);
    assert!(outcome.has_more);

    session.select(0).await.unwrap();
    let View::Help(list) = session.view() else {
        panic!("expected help view, got {}", session.view().name());
    };
    let selection = list.selected.as_ref().unwrap();
    assert_eq!(selection.label, "Ordering food");
    let pairs: Vec<(&str, &str)> = selection
        .lines
        .iter()
        .map(|line| (line.source.as_str(), line.translated.as_deref().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("A: Hello!", "A: Hello! (en|bn)"),
            ("B: Hi there!", "B: Hi there! (en|bn)"),
        ]
    );

    // 同一提示词再次返回相同列表，不会新增条目
    let outcome = session.load_more().await;
    assert_eq!(outcome.added, 0);

    session.show_chat();
    let reply = session.send_message("Ordering coffee").await.unwrap();
    assert_eq!(reply.text, "A: Hello!\nB: Hi there! (en|bn)");
    assert_eq!(session.transcript().len(), 2);
}
