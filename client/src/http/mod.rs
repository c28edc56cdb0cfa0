//! HTTP request layer

pub mod client;
pub mod options;

pub use client::ApiClient;
pub use options::RequestOptions;
