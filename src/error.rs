//! Error types for Mealtime
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Pagination deliberately has no error variants: malformed page and limit
//! values are clamped to the nearest valid page, never rejected. Errors exist
//! only at the catalog/loader/serialization boundaries.

use thiserror::Error;

/// The main error type for Mealtime
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid configuration or unreadable input
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// YAML deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Catalog Errors
    // ============================================================================
    /// Seed-file integrity violation
    #[error("Invalid catalog: {message}")]
    Catalog {
        /// What went wrong
        message: String,
    },

    /// A menu or order references a meal id that does not exist
    #[error("Unknown meal id {meal_id} referenced by {referenced_by}")]
    UnknownMeal {
        /// The dangling meal id
        meal_id: u64,
        /// The menu or order holding the reference
        referenced_by: String,
    },

    /// A date string could not be parsed
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The missing path
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all with context attached
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create an unknown meal reference error
    pub fn unknown_meal(meal_id: u64, referenced_by: impl Into<String>) -> Self {
        Self::UnknownMeal {
            meal_id,
            referenced_by: referenced_by.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// HTTP status code this error maps to when surfaced by the API
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Catalog { .. } | Error::UnknownMeal { .. } | Error::InvalidDate { .. } => 422,
            Error::FileNotFound { .. } => 404,
            _ => 500,
        }
    }
}

/// Result type alias for Mealtime
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::catalog("meal title cannot be empty");
        assert_eq!(err.to_string(), "Invalid catalog: meal title cannot be empty");

        let err = Error::unknown_meal(7, "menu 2026-08-30");
        assert_eq!(
            err.to_string(),
            "Unknown meal id 7 referenced by menu 2026-08-30"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::catalog("bad").status_code(), 422);
        assert_eq!(Error::invalid_date("yesterday").status_code(), 422);
        assert_eq!(
            Error::FileNotFound {
                path: "catalog.yaml".into()
            }
            .status_code(),
            404
        );
        assert_eq!(Error::config("oops").status_code(), 500);
        assert_eq!(Error::Other("oops".into()).status_code(), 500);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_result_with_context_lazy() {
        let result: Result<()> = Err(Error::catalog("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Invalid catalog: inner"));
    }
}
