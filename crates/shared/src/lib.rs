//! Shared types, errors, and configuration for the Vera hospital backend.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes supported for invoicing
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::Currency;
