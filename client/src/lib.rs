//! # Jibu Client
//!
//! Authenticated HTTP request layer and typed services for the Jibu chat
//! backend. Every outbound call flows through [`ApiClient`], which owns URL
//! construction, bearer-token header injection, JSON/form request execution,
//! error normalization, and unauthorized-session handling.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use jibu_client::{ApiClient, AuthService, ChatService};
//! use jibu_core::MemoryCredentialStore;
//! use jibu_shared::ApiConfig;
//!
//! # async fn example() -> Result<(), jibu_client::ClientError> {
//! let credentials = Arc::new(MemoryCredentialStore::new());
//! let client = Arc::new(ApiClient::new(ApiConfig::from_env(), credentials.clone())?);
//!
//! let auth = AuthService::new(client.clone(), credentials);
//! auth.request_otp("0712 345 678").await?;
//! auth.verify_otp("+254712345678", "123456").await?;
//!
//! let chats = ChatService::new(client);
//! let conversations = chats.conversations().await?;
//! println!("{} conversation(s)", conversations.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod services;

pub use error::ClientError;
pub use http::{ApiClient, RequestOptions};
pub use services::{AuthService, ChatService};
