//! Chat API endpoints
//!
//! POST /chat forwards a message to the generator and stores the exchange;
//! GET /chats returns the stored history.
//!
//! The generation call and the insert are not wrapped in a transaction: if the
//! insert fails after Gemini answered, the request reports the storage error
//! and the generated text is discarded.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::api::utils::validate_message;
use crate::chat::{ChatRecord, ChatReply, FALLBACK_RESPONSE};
use crate::error::AppError;
use crate::state::AppState;

/// Request to send a chat message
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /chat - Generate a reply for a message and store the exchange
///
/// A body that is absent, lacks the JSON content type, or is not a valid
/// `ChatRequest` is treated like a request without text. A body that cannot
/// be read at all (e.g., over the size limit) keeps its own status.
pub async fn submit_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // The body itself could not be read; this is not a missing message
        Err(JsonRejection::BytesRejection(rejection)) => {
            warn!(error = %rejection, "Failed to read chat request body");
            return Err(AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            });
        }
        Err(rejection) => {
            warn!(error = %rejection, "Rejected chat request body");
            ChatRequest::default()
        }
    };

    let message = validate_message(request.text.as_deref())?;

    info!(message_len = message.len(), "Chat request received");

    let generated = state.generator.generate(message).await.map_err(|e| {
        error!(error = %e, "Generation call failed");
        AppError::from(e)
    })?;

    let ai_response = generated.unwrap_or_else(|| {
        warn!("Generation returned no text, using fallback response");
        FALLBACK_RESPONSE.to_string()
    });

    let record = state
        .chat_db
        .insert_chat(message, &ai_response)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to save chat exchange");
            e
        })?;

    info!(
        chat_id = record.id,
        response_len = record.ai_response.len(),
        "Chat exchange stored"
    );

    Ok(Json(record.into()))
}

/// GET /chats - List all stored exchanges, most recent first
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatRecord>>, AppError> {
    let chats = state.chat_db.list_chats().await.map_err(|e| {
        error!(error = %e, "Failed to fetch chat history");
        e
    })?;

    Ok(Json(chats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::utils::MESSAGE_REQUIRED;
    use crate::chat::ChatDb;
    use crate::gemini::{GenerationError, TextGenerator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Generator that returns a canned result and counts calls
    struct StubGenerator {
        reply: Result<Option<String>, String>,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(reply: Result<Option<String>, String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<Option<String>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(|message| GenerationError::Api {
                status: 500,
                message,
            })
        }
    }

    async fn create_test_state(generator: Arc<StubGenerator>) -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let chat_db = ChatDb::new(db_path.to_str().unwrap())
            .await
            .expect("Failed to create test database");
        (AppState::new(chat_db, generator), temp_dir)
    }

    fn request(text: Option<&str>) -> Result<Json<ChatRequest>, JsonRejection> {
        Ok(Json(ChatRequest {
            text: text.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_submit_message_success() {
        let generator = StubGenerator::new(Ok(Some("Hi there!".to_string())));
        let (state, _temp_dir) = create_test_state(generator.clone()).await;

        let reply = submit_message(State(state.clone()), request(Some("Hello")))
            .await
            .unwrap()
            .0;
        assert_eq!(
            reply,
            ChatReply {
                user_message: "Hello".to_string(),
                ai_response: "Hi there!".to_string(),
            }
        );
        assert_eq!(generator.calls(), 1);

        let chats = state.chat_db.list_chats().await.unwrap();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].id, 1);
        assert_eq!(chats[0].user_message, "Hello");
        assert_eq!(chats[0].ai_response, "Hi there!");
    }

    #[tokio::test]
    async fn test_submit_message_uses_fallback_when_no_text() {
        let generator = StubGenerator::new(Ok(None));
        let (state, _temp_dir) = create_test_state(generator).await;

        let reply = submit_message(State(state.clone()), request(Some("Hello")))
            .await
            .unwrap()
            .0;
        assert_eq!(reply.ai_response, FALLBACK_RESPONSE);

        let chats = state.chat_db.list_chats().await.unwrap();
        assert_eq!(chats[0].ai_response, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_submit_message_missing_text() {
        let generator = StubGenerator::new(Ok(Some("unused".to_string())));
        let (state, _temp_dir) = create_test_state(generator.clone()).await;

        for text in [None, Some("")] {
            let result = submit_message(State(state.clone()), request(text)).await;
            match result {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MESSAGE_REQUIRED),
                other => panic!("Expected Validation error, got: {:?}", other.map(|j| j.0)),
            }
        }

        assert_eq!(generator.calls(), 0);
        assert!(state.chat_db.list_chats().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_message_generation_failure() {
        let generator = StubGenerator::new(Err("quota exceeded".to_string()));
        let (state, _temp_dir) = create_test_state(generator).await;

        let result = submit_message(State(state.clone()), request(Some("Hello"))).await;
        match result {
            Err(err @ AppError::Generation(_)) => assert_eq!(err.to_string(), "quota exceeded"),
            other => panic!("Expected Generation error, got: {:?}", other.map(|j| j.0)),
        }
        assert!(state.chat_db.list_chats().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_message_storage_failure() {
        let generator = StubGenerator::new(Ok(Some("Hi there!".to_string())));
        let (state, _temp_dir) = create_test_state(generator.clone()).await;
        state.chat_db.pool().close().await;

        let result = submit_message(State(state), request(Some("Hello"))).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
        // The generation call already happened; nothing undoes it
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_list_history_empty() {
        let generator = StubGenerator::new(Ok(None));
        let (state, _temp_dir) = create_test_state(generator).await;
        let chats = list_history(State(state)).await.unwrap().0;
        assert!(chats.is_empty());
    }

    #[tokio::test]
    async fn test_list_history_most_recent_first() {
        let generator = StubGenerator::new(Ok(Some("ok".to_string())));
        let (state, _temp_dir) = create_test_state(generator).await;

        for text in ["first", "second", "third"] {
            submit_message(State(state.clone()), request(Some(text)))
                .await
                .unwrap();
        }

        let chats = list_history(State(state)).await.unwrap().0;
        let messages: Vec<&str> = chats.iter().map(|c| c.user_message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_history_storage_failure() {
        let generator = StubGenerator::new(Ok(None));
        let (state, _temp_dir) = create_test_state(generator).await;
        state.chat_db.pool().close().await;

        let result = list_history(State(state)).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
