//! Error types and handling for the Songkhla guide

use thiserror::Error;

/// Main error type for the guide
#[derive(Error, Debug)]
pub enum GuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Remote store communication errors
    #[error("Store error: {message}")]
    Store {
        message: String,
        /// HTTP status returned by the store, when one was received
        status: Option<u16>,
    },

    /// Rows that do not match the expected record shape
    #[error("Decode error in '{collection}': {message}")]
    Decode { collection: String, message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new store error without a status code
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            status: None,
        }
    }

    /// Create a new store error for a non-success HTTP status
    pub fn store_status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Store {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn decode<C: Into<String>, S: Into<String>>(collection: C, message: S) -> Self {
        Self::Decode {
            collection: collection.into(),
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GuideError::Config { .. } => {
                "Configuration error. Please check your config file and store settings.".to_string()
            }
            GuideError::Store { .. } | GuideError::Decode { .. } => {
                "Unable to load guide data. Please check your internet connection.".to_string()
            }
            GuideError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
