use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use buddy_core::TurnError;
use buddy_schema::{ChatMessage, TurnRequest, ValidationError, MAX_SESSION_ID_LEN};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<ChatMessage>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/{session_id}", get(get_history))
}

async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<TurnRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::BadRequest("invalid request".into()))?;
    let request = request.validate()?;

    // The turn runs detached so a dropped connection only cancels reply
    // selection; a chosen reply is still logged.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let engine = state.engine.clone();
    let turn = tokio::spawn(async move {
        engine
            .handle_turn_cancellable(&request.session_id, &request.message, cancel)
            .await
    });

    let reply = match turn.await {
        Ok(Ok(reply)) => reply,
        Ok(Err(TurnError::Cancelled)) => {
            return Err(ApiError::Internal("request cancelled".into()))
        }
        Ok(Err(err)) => return Err(ApiError::Internal(err.to_string())),
        Err(err) => {
            tracing::error!(error = %err, "chat turn task failed");
            return Err(ApiError::Internal("failed to process message".into()));
        }
    };

    Ok(Json(ChatResponse {
        response: reply.response,
        session_id: reply.session_id,
    }))
}

async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let session_id = session_id.trim();
    if session_id.is_empty() {
        return Err(ValidationError::MissingSessionId.into());
    }
    if session_id.chars().count() > MAX_SESSION_ID_LEN {
        return Err(ValidationError::SessionIdTooLong.into());
    }

    let data = state
        .engine
        .history(session_id, state.history_limit)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "failed to read chat history");
            ApiError::Internal("failed to fetch history".into())
        })?;
    Ok(Json(HistoryResponse { data }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use buddy_core::keywords::GREETINGS;
    use buddy_core::{ChatEngine, EngineConfig};
    use buddy_memory::{ChatLog, SqliteStore, StoreError, StoreResult};
    use buddy_schema::Role;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    struct DownChatLog;

    #[async_trait]
    impl ChatLog for DownChatLog {
        async fn append(
            &self,
            _session_id: &str,
            _role: Role,
            _content: &str,
        ) -> StoreResult<ChatMessage> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn read_history(
            &self,
            _session_id: &str,
            _limit: usize,
        ) -> StoreResult<Vec<ChatMessage>> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    fn setup_test_app_with(engine: ChatEngine, history_limit: usize) -> Router {
        let state = AppState {
            engine: Arc::new(engine),
            history_limit,
            allowed_origins: Vec::new(),
        };
        Router::new()
            .nest("/api/v1/chat", super::router())
            .with_state(state)
    }

    fn setup_test_app() -> Router {
        let store = Arc::new(SqliteStore::open_in_memory().expect("open store"));
        let engine = ChatEngine::new(store.clone(), store, &EngineConfig::default());
        setup_test_app_with(engine, 50)
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .expect("build request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request")
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse json")
    }

    #[tokio::test]
    async fn test_send_message_returns_greeting() {
        let app = setup_test_app();
        let response = app
            .oneshot(post_chat(r#"{"session_id":" s1 ","message":"xin chao"}"#))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["response"], GREETINGS[0].1);
        assert_eq!(body["session_id"], "s1");
    }

    #[tokio::test]
    async fn test_send_message_rejects_empty_message() {
        let app = setup_test_app();
        let response = app
            .oneshot(post_chat(r#"{"session_id":"s1","message":"   "}"#))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "message cannot be empty");
    }

    #[tokio::test]
    async fn test_send_message_rejects_long_session_id() {
        let app = setup_test_app();
        let body = format!(
            r#"{{"session_id":"{}","message":"hi"}}"#,
            "s".repeat(MAX_SESSION_ID_LEN + 1)
        );
        let response = app.oneshot(post_chat(&body)).await.expect("send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "session_id too long (max 100)");
    }

    #[tokio::test]
    async fn test_send_message_rejects_malformed_json() {
        let app = setup_test_app();
        let response = app
            .oneshot(post_chat(r#"{"session_id":"s1""#))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "invalid request");
    }

    #[tokio::test]
    async fn test_history_after_turn() {
        let app = setup_test_app();
        let response = app
            .clone()
            .oneshot(post_chat(r#"{"session_id":"s1","message":"hello"}"#))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get("/api/v1/chat/s1"))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let data = body["data"].as_array().expect("data array");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["role"], "user");
        assert_eq!(data[0]["content"], "hello");
        assert_eq!(data[1]["role"], "assistant");
    }

    #[tokio::test]
    async fn test_history_respects_limit() {
        let store = Arc::new(SqliteStore::open_in_memory().expect("open store"));
        for i in 0..4 {
            store
                .append("s1", Role::User, &format!("m{i}"))
                .await
                .expect("append");
        }
        let engine = ChatEngine::new(store.clone(), store, &EngineConfig::default());
        let app = setup_test_app_with(engine, 3);

        let response = app
            .oneshot(get("/api/v1/chat/s1"))
            .await
            .expect("send request");
        let body = read_json(response).await;
        let contents: Vec<&str> = body["data"]
            .as_array()
            .expect("data array")
            .iter()
            .filter_map(|m| m["content"].as_str())
            .collect();
        assert_eq!(contents, vec!["m1", "m2", "m3"]);
    }

    #[tokio::test]
    async fn test_history_unknown_session_is_empty() {
        let app = setup_test_app();
        let response = app
            .oneshot(get("/api/v1/chat/nobody"))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_history_store_failure_is_500() {
        let store = Arc::new(SqliteStore::open_in_memory().expect("open store"));
        let engine = ChatEngine::new(store, Arc::new(DownChatLog), &EngineConfig::default());
        let app = setup_test_app_with(engine, 50);

        let response = app
            .clone()
            .oneshot(get("/api/v1/chat/s1"))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "failed to fetch history");

        // Turns still answer with the chat log down.
        let response = app
            .oneshot(post_chat(r#"{"session_id":"s1","message":"xin chao"}"#))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
