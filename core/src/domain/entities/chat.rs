//! Chat thread entity and its messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single question/answer exchange within a conversation
///
/// This is also the response shape of the `ask` endpoint: the backend echoes
/// the question together with the generated answer and the conversation the
/// exchange was filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// The question as submitted
    pub question: String,

    /// The generated answer (markdown)
    pub answer: String,

    /// When the exchange happened
    pub timestamp: DateTime<Utc>,

    /// Conversation the exchange belongs to
    pub conversation_id: String,
}

/// A full chat thread as returned by `chats/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
    /// Display title of the thread
    pub title: String,

    /// Last modification time
    pub updated_at: DateTime<Utc>,

    /// Ordered question/answer exchanges
    pub messages: Vec<ChatMessage>,
}
