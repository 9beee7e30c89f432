//! Error types for strapi-postman-core
//!
//! Every failure is fatal for a generation run: nothing is retried and the
//! output file is only written after the whole collection was assembled.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for collection generation
#[derive(Debug, Error)]
pub enum Error {
    /// The content-type root (`src/api`) does not exist
    #[error("Missing Strapi api directory at {}", path.display())]
    MissingSchemaDirectory { path: PathBuf },

    /// Discovery succeeded but yielded zero content types
    #[error("No Strapi content types were found under {}", path.display())]
    NoContentTypesFound { path: PathBuf },

    /// A schema file is not a valid content-type or component document
    #[error("Malformed schema file {}: {source}", path.display())]
    MalformedSchemaFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem read, walk or write failure
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file or override is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The assembled collection could not be serialized
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Build an IO error tagged with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Exit code reported by the CLI for this error.
    ///
    /// Generation is a one-shot batch job, so every failure maps to 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSchemaDirectory { .. }
            | Self::NoContentTypesFound { .. }
            | Self::MalformedSchemaFile { .. }
            | Self::Io { .. }
            | Self::InvalidConfig(_)
            | Self::Serialize(_) => 1,
        }
    }
}

/// Result type alias for strapi-postman-core operations
pub type Result<T> = std::result::Result<T, Error>;
