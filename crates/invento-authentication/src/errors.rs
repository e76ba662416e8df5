//! Authentication failures.

use invento_core::InventoError;

/// Why a login or registration was rejected.
///
/// The `Display` text is safe to show to the person at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    /// Missing or too-short input
    #[error("{message}")]
    Validation {
        /// Human-readable explanation
        message: String,
    },

    /// No actor matches the credentials
    #[error("Invalid email or password")]
    NotFound,

    /// Registration with an email already in the directory
    #[error("User with this email already exists")]
    AlreadyRegistered,
}

impl AuthenticationError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<AuthenticationError> for InventoError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::NotFound => InventoError::not_found(err.to_string()),
            _ => InventoError::invalid(err.to_string()),
        }
    }
}
