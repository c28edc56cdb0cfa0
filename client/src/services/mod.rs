//! Typed services over the API client

pub mod auth;
pub mod chat;

pub use auth::AuthService;
pub use chat::ChatService;
