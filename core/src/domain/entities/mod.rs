//! Wire entities returned by the backend

pub mod chat;
pub mod conversation;

pub use chat::{Chat, ChatMessage};
pub use conversation::Conversation;
