//! Error types for YoYo Academy.

use std::time::Duration;

/// Top-level error type for the web front end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Database-related errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Content catalog errors, raised when a catalog fails validation.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("Duplicate module id {module_id} in path {path}")]
    DuplicateModule { path: String, module_id: String },

    #[error("Module {module_id} in path {path} references unknown trick {trick}")]
    UnknownTrick {
        path: String,
        module_id: String,
        trick: String,
    },
}

/// Navigation errors reported by a `Navigator`.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("Navigation target {route} is unreachable: {reason}")]
    Unreachable { route: String, reason: String },

    #[error("Navigator already used for {previous}, refused {route}")]
    AlreadyNavigated { previous: String, route: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
