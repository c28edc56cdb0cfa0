//! Domain entities and value objects

pub mod entities;
pub mod value_objects;

pub use entities::{Chat, ChatMessage, Conversation};
pub use value_objects::{AuthTokens, OtpReceipt};
