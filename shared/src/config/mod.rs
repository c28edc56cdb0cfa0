//! Configuration module
//!
//! Configuration is organized into logical areas:
//! - `api` - Backend API endpoint configuration

pub mod api;

pub use api::ApiConfig;
