//! Session lifecycle observation

pub mod listener;

pub use listener::SessionListener;
