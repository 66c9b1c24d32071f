//! Error handling for the group balancer.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading inputs or producing assignments
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening, reading, or writing a file
    #[error("{context} ({}): {source}", path.display())]
    Io {
        /// What the file operation was for
        context: String,
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error reading or writing a JSON document
    #[error("JSON error for {}: {source}", path.display())]
    Json {
        /// Path of the offending document
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Error with a tabular input schema
    #[error("Schema error in {table}: {message}")]
    Schema {
        /// Table the schema belongs to
        table: String,
        /// What did not match
        message: String,
    },

    /// Invalid component configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error reported by an assignment backend
    #[error("Solver error: {0}")]
    Solver(String),
}

impl Error {
    /// Build an IO error with path and purpose context
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// Build a JSON parse error for the given document
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Build a schema error for the given table
    pub fn schema(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            table: table.into(),
            message: message.into(),
        }
    }
}

/// Result type for group balancer operations
pub type Result<T> = std::result::Result<T, Error>;
