//! Error types for the wayfare catalog library.

use std::path::PathBuf;

use thiserror::Error;

use crate::{models::ResourceKind, validate::ValidationErrors};

/// Generic message shown when a failed request carries no server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Comprehensive error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Document not found for the given ID
    #[error("{} with ID {id} not found", kind.label())]
    NotFound { kind: ResourceKind, id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input for a single field
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Draft failed validation, every failing field is listed
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Network failure or a non-success HTTP response
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CatalogError {
        CatalogError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CatalogError {
        CatalogError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CatalogError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a document.
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a transport error from an HTTP status and optional server
    /// message. The server message is kept verbatim when present.
    pub fn transport(status: Option<u16>, message: Option<String>) -> Self {
        Self::Transport {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub(crate) fn join_error(e: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {e}"),
        }
    }

    /// Message suitable for showing to an administrator.
    ///
    /// Transport errors surface the server text as-is; everything else uses
    /// its display form.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Transport { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this error means the requested document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. } | CatalogError::Transport { status: Some(404), .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CatalogError::database(message).with_source(e))
    }
}

/// Extension trait mapping HTTP client failures into transport errors.
pub trait TransportResultExt<T> {
    /// Map a network failure with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CatalogError::Transport {
            status: e.status().map(|s| s.as_u16()),
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_keeps_server_message_verbatim() {
        let err = CatalogError::transport(Some(409), Some("Slug already taken".into()));
        assert_eq!(err.user_message(), "Slug already taken");
    }

    #[test]
    fn transport_falls_back_to_generic_message() {
        let err = CatalogError::transport(Some(500), None);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let blank = CatalogError::transport(None, Some("   ".into()));
        assert_eq!(blank.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn not_found_covers_http_404() {
        assert!(CatalogError::not_found(ResourceKind::Packages, "7").is_not_found());
        assert!(CatalogError::transport(Some(404), None).is_not_found());
        assert!(!CatalogError::transport(Some(500), None).is_not_found());
    }

    #[test]
    fn not_found_message_names_the_resource() {
        let err = CatalogError::not_found(ResourceKind::Itineraries, "12");
        assert_eq!(err.to_string(), "Itinerary with ID 12 not found");
    }
}
