//! Shared Error Types
//!
//! This module defines the error taxonomy used across the application.
//!
//! # Error Categories
//!
//! - `Validation` - client-side validation failures; reported instantly and
//!   block submission, no network call is made
//! - `Network` - the request never completed (DNS, refused, TLS, ...)
//! - `Api` - the backend answered with a non-success status
//! - `Storage` - the local key-value store could not be read or written
//! - `Serialization` - JSON/TOML encode or decode failures
//!
//! No error here is fatal; every failure is surfaced as a dismissible
//! notification and returns the UI to its pre-call state.
use thiserror::Error;

/// Application error type shared by all HTTP clients and the local store
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// Client-side validation failure
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The request could not be completed at the network layer
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the backend, or the status text
        message: String,
    },

    /// The local key-value store failed
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },

    /// Serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },
}

impl AppError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Short message suitable for a toast notification
    pub fn notification_text(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Network { .. } => "Falha de conexão. Tente novamente.".to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Storage { .. } => "Não foi possível acessar as configurações locais.".to_string(),
            Self::Serialization { .. } => "Resposta inesperada do servidor.".to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::api(status.as_u16(), err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
