//! Domain Layer - Core Entity Trait and Errors
//!
//! Every entity exposes a stable identifier. Errors shared by all layers
//! live here so repositories and services speak one vocabulary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    /// Credentials for an optional subsystem were never provided
    #[error("{0}")]
    NotConfigured(String),

    /// A remote service answered with a non-success status
    #[error("{service} API error: {status}")]
    Remote { service: String, status: u16 },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// A response or file could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn remote(service: &str, status: u16) -> Self {
        DomainError::Remote {
            service: service.to_string(),
            status,
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Decode(e.to_string())
        } else {
            DomainError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Decode(e.to_string())
    }
}
