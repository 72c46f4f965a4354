//! Unified error type for binaries and callers that span modules.
//!
//! Module-level errors (`CartError`, `RegistrationError`, ...) stay typed at
//! their call sites; `AppError` exists for layers that need to carry any of
//! them, like the CLI.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::menu::MenuFeedError;
use crate::session::RegistrationError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Fetching or decoding the menu feed failed.
    #[error("Menu feed error: {0}")]
    Feed(#[from] MenuFeedError),

    /// A cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Registration validation failed.
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
