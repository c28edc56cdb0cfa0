//! Conversation and question/answer operations

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use jibu_core::{Chat, ChatMessage, Conversation};

use crate::error::ClientError;
use crate::http::ApiClient;

const CHATS_PATH: &str = "chats";
const ASK_PATH: &str = "ask";

/// Title prefix the UI assigns to conversations that have not been saved
/// server-side yet; such identifiers must not be sent to the backend.
const UNSAVED_CONVERSATION_PREFIX: &str = "New Chat";

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateTitleRequest<'a> {
    title: &'a str,
}

/// Chat service for the authenticated conversation endpoints
pub struct ChatService {
    client: Arc<ApiClient>,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch all conversations for the authenticated user
    pub async fn conversations(&self) -> Result<Vec<Conversation>, ClientError> {
        self.client.get(CHATS_PATH).await
    }

    /// Fetch a specific chat thread by conversation id
    pub async fn chat(&self, conversation_id: &str) -> Result<Chat, ClientError> {
        self.client
            .get(&format!("{CHATS_PATH}/{conversation_id}"))
            .await
    }

    /// Update a chat title, returning the updated thread
    pub async fn update_title(
        &self,
        conversation_id: &str,
        title: &str,
    ) -> Result<Chat, ClientError> {
        debug!(conversation_id, "updating chat title");
        self.client
            .put(
                &format!("{CHATS_PATH}/{conversation_id}"),
                &UpdateTitleRequest { title },
            )
            .await
    }

    /// Ask a question and get an answer
    ///
    /// When `conversation_id` names an existing conversation the exchange is
    /// appended to it; when it is absent, or still carries the unsaved
    /// placeholder identifier, it is omitted and the backend creates a new
    /// conversation.
    pub async fn ask(
        &self,
        question: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatMessage, ClientError> {
        let conversation_id =
            conversation_id.filter(|id| !id.starts_with(UNSAVED_CONVERSATION_PREFIX));

        debug!(saved = conversation_id.is_some(), "asking question");
        self.client
            .post(
                ASK_PATH,
                &AskRequest {
                    question,
                    conversation_id,
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_omits_absent_conversation_id() {
        let body = serde_json::to_value(&AskRequest {
            question: "Why?",
            conversation_id: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"question": "Why?"}));
    }

    #[test]
    fn test_ask_request_includes_conversation_id() {
        let body = serde_json::to_value(&AskRequest {
            question: "Why?",
            conversation_id: Some("conv-1"),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"question": "Why?", "conversation_id": "conv-1"})
        );
    }
}
