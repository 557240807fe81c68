//! Stub AgentFlow server for end-to-end runs of the benchmark.

use std::sync::{ Arc, Mutex };

use axum::extract::{ Path, State };
use axum::http::StatusCode;
use axum::routing::{ delete, post };
use axum::{ Json, Router };
use serde_json::{ json, Value };
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

#[derive(Clone)]
pub struct StubConfig {
    pub conversation_id: Option<String>,
    pub final_reply: String,
    pub chat_status: StatusCode,
    /// Replaces the `history` array in every chat reply when set.
    pub history: Option<Value>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            conversation_id: Some("conv-42".to_string()),
            final_reply: "{\"net_profit\": 150000}".to_string(),
            chat_status: StatusCode::OK,
            history: None,
        }
    }
}

#[derive(Clone)]
struct StubState {
    config: StubConfig,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubState {
    fn record(&self, method: &'static str, path: String, body: Value) -> usize {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest { method, path, body });
        requests.iter().filter(|r| r.path.ends_with("/chat")).count()
    }
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: tokio::task::JoinHandle<()>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub async fn spawn_stub(config: StubConfig) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState { config, requests: requests.clone() };

    let app = Router::new()
        .route("/api/generate", post(generate))
        .route("/api/conversations", post(create_conversation))
        .route("/api/conversations/{id}", delete(delete_conversation))
        .route("/api/conversations/{id}/chat", post(chat))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let task = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubServer {
        base_url: format!("http://{}/api", addr),
        requests,
        task,
    }
}

/// A base URL nothing is listening on.
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

async fn generate(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
    let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
    state.record("POST", "/api/generate".to_string(), body);
    Json(json!({ "response": format!(" I have no memory of earlier prompts. You said: {}\n", prompt) }))
}

async fn create_conversation(
    State(state): State<StubState>,
    Json(body): Json<Value>
) -> Json<Value> {
    state.record("POST", "/api/conversations".to_string(), body);
    match &state.config.conversation_id {
        Some(id) => Json(json!({ "conversationId": id })),
        None => Json(json!({})),
    }
}

async fn chat(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(body): Json<Value>
) -> (StatusCode, Json<Value>) {
    let turn = state.record("POST", format!("/api/conversations/{}/chat", id), body);
    let reply = if turn == 4 { state.config.final_reply.clone() } else { "{\"ack\": true}".to_string() };
    let history = state.config.history.clone().unwrap_or_else(|| json!([
        { "role": "user", "content": "..." },
        { "role": "assistant", "content": reply }
    ]));
    (
        state.config.chat_status,
        Json(json!({
            "conversationId": id,
            "response": reply,
            "history": history
        })),
    )
}

async fn delete_conversation(State(state): State<StubState>, Path(id): Path<String>) -> StatusCode {
    state.record("DELETE", format!("/api/conversations/{}", id), Value::Null);
    StatusCode::NO_CONTENT
}
