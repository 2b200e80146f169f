use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use dmcloser_backend::{
    api::openai::{MAX_REPLY_TOKENS, TEMPERATURE},
    build_router,
    config::Config,
    AppState,
};

/// Stand-in for the completion API, served on a random local port.
#[derive(Clone)]
struct FakeUpstream {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
    status: StatusCode,
    body: &'static str,
}

async fn fake_completion(
    State(upstream): State<FakeUpstream>,
    headers: HeaderMap,
    body: String,
) -> Response {
    upstream.calls.fetch_add(1, Ordering::SeqCst);
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    upstream.requests.lock().unwrap().push((headers, parsed));
    (
        upstream.status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response()
}

async fn spawn_upstream(status: StatusCode, body: &'static str) -> (FakeUpstream, SocketAddr) {
    let upstream = FakeUpstream {
        calls: Arc::new(AtomicUsize::new(0)),
        requests: Arc::new(Mutex::new(Vec::new())),
        status,
        body,
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_completion))
        .with_state(upstream.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (upstream, addr)
}

fn test_config(api_key: Option<&str>, upstream: SocketAddr) -> Config {
    Config {
        openai_api_key: api_key.map(str::to_string),
        openai_api_base: format!("http://{}/v1", upstream),
        model: "gpt-4o".to_string(),
        port: 0,
        cors_origin: "http://localhost:8080".parse().unwrap(),
        static_dir: PathBuf::from("does-not-exist"),
    }
}

fn test_state(config: Config) -> Arc<AppState> {
    // Keep proxy settings from the environment away from loopback traffic.
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Arc::new(AppState::with_client(config, client))
}

async fn post_closer(config: Config, body: Body) -> (StatusCode, Value) {
    let app = build_router(test_state(config));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/closer")
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_body(value: Value) -> Body {
    Body::from(value.to_string())
}

const GOOD_REPLY: &str = r#"{
    "id": "chatcmpl-1",
    "object": "chat.completion",
    "choices": [
        { "index": 0, "message": { "role": "assistant", "content": "\n  Only 3 spots left this week. Want Thursday at 2pm?  \n" }, "finish_reason": "stop" }
    ]
}"#;

#[tokio::test]
async fn returns_trimmed_first_choice() {
    let (upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;
    let (status, body) = post_closer(
        test_config(Some("sk-test"), addr),
        json_body(json!({ "input": "Them: maybe next month", "tone": "urgent", "goal": "book_call" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "Only 3 spots left this week. Want Thursday at 2pm?");
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sends_one_bounded_request_with_bearer_key() {
    let (upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;
    let convo = "Them: is this legit?\nMe: 200+ clients so far";
    post_closer(
        test_config(Some("sk-test"), addr),
        json_body(json!({ "input": convo, "tone": "luxury", "goal": "handle_objection" })),
    )
    .await;

    let requests = upstream.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (headers, sent) = &requests[0];
    assert_eq!(headers["authorization"], "Bearer sk-test");
    assert_eq!(sent["model"], "gpt-4o");
    assert_eq!(sent["max_tokens"], MAX_REPLY_TOKENS);
    assert_eq!(sent["temperature"].as_f64(), Some(TEMPERATURE));
    assert_eq!(sent["messages"][0]["role"], "system");
    let prompt = sent["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains(convo));
    assert!(prompt.contains("luxury"));
    assert!(prompt.contains("objection"));
}

#[tokio::test]
async fn missing_selectors_use_defaults() {
    let (upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;
    let (status, _) = post_closer(
        test_config(Some("sk-test"), addr),
        json_body(json!({ "input": "hey", "tone": "sarcastic" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let requests = upstream.requests.lock().unwrap();
    let prompt = requests[0].1["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("friendly"));
    assert!(prompt.contains("book a call"));
}

#[tokio::test]
async fn empty_input_is_rejected_without_upstream_call() {
    let (upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;

    for payload in [json!({ "input": "" }), json!({ "input": "   \n" }), json!({ "tone": "urgent" })] {
        let (status, body) = post_closer(test_config(Some("sk-test"), addr), json_body(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["output"], "No input provided.");
    }
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unparseable_body_is_a_bad_request() {
    let (upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;
    let (status, body) = post_closer(test_config(Some("sk-test"), addr), Body::from("input=hello")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["output"], "No input provided.");
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_api_key_is_a_configuration_error() {
    let (upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;

    for payload in [json!({ "input": "Them: price?" }), json!({ "input": "" })] {
        let (status, body) = post_closer(test_config(None, addr), json_body(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["output"], "OpenAI API key not set.");
    }
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_upstream_is_an_upstream_error() {
    // Grab a free port, then close it so the connection is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body) = post_closer(
        test_config(Some("sk-test"), addr),
        json_body(json!({ "input": "Them: I'll think about it" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["output"], "Error contacting OpenAI.");
}

#[tokio::test]
async fn non_json_upstream_body_is_an_upstream_error() {
    let (upstream, addr) = spawn_upstream(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").await;
    let (status, body) = post_closer(
        test_config(Some("sk-test"), addr),
        json_body(json!({ "input": "Them: send details" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["output"], "Error contacting OpenAI.");
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_choices_fall_back_with_ok_status() {
    let (_upstream, addr) = spawn_upstream(StatusCode::OK, r#"{ "choices": [] }"#).await;
    let (status, body) = post_closer(
        test_config(Some("sk-test"), addr),
        json_body(json!({ "input": "Them: ok" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "No response from AI.");
}

#[tokio::test]
async fn upstream_error_envelope_falls_back_with_ok_status() {
    let (_upstream, addr) = spawn_upstream(
        StatusCode::UNAUTHORIZED,
        r#"{ "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" } }"#,
    )
    .await;
    let (status, body) = post_closer(
        test_config(Some("sk-wrong"), addr),
        json_body(json!({ "input": "Them: ok" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "No response from AI.");
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (_upstream, addr) = spawn_upstream(StatusCode::OK, GOOD_REPLY).await;
    let app = build_router(test_state(test_config(None, addr)));
    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
