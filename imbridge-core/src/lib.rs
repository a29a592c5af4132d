//! Imbridge Core Library
//!
//! This crate provides the core functionality shared by the Imbridge plugin
//! crates: configuration management and error handling.

pub mod config;
pub mod error;

pub use error::{Error, Result};

/// Imbridge version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
