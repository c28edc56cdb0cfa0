//! Utility functions shared across the SDK

pub mod phone;
pub mod validation;
