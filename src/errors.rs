//! Shared error types for the measure engine
//!
//! Every failure the engine can raise is a variant of [`Error`]. None of them
//! are recovered locally: repository and crawl APIs return them to the caller,
//! which decides whether to abort the analysis or re-run the crawl.

use crate::measure::ValueType;
use thiserror::Error;

/// Main error type for qualityrate operations
#[derive(Debug, Error)]
pub enum Error {
    /// A value that cannot be represented as a measure (NaN, unknown level name...)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// `add` called twice for the same (component, metric) key
    #[error("a measure of metric '{metric}' already exists for component {component_ref}")]
    AlreadyExists { component_ref: u32, metric: String },

    /// `update` called without a prior `add`
    #[error("no measure of metric '{metric}' exists for component {component_ref}")]
    NotFound { component_ref: u32, metric: String },

    /// The measure value type does not match the metric's declared type
    #[error("measure of type {actual} is incompatible with metric '{metric}' of type {expected}")]
    TypeMismatch {
        metric: String,
        expected: ValueType,
        actual: ValueType,
    },

    /// A required argument was not supplied
    #[error("argument '{0}' is required")]
    NullArgument(&'static str),

    /// Malformed rating settings or configuration file
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Metric key not present in the catalog
    #[error("unknown metric '{0}'")]
    UnknownMetric(String),

    /// Component ref not present in the tree
    #[error("unknown component ref {0}")]
    UnknownComponent(u32),

    /// A visitor callback failed while crawling a component
    #[error("visitor {visitor} failed on component {component_ref}: {source}")]
    Visitor {
        visitor: &'static str,
        component_ref: u32,
        #[source]
        source: Box<Error>,
    },

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The error under any `Visitor` and `WithContext` wrapping
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Visitor { source, .. } | Error::WithContext { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_message_names_both_types() {
        let err = Error::TypeMismatch {
            metric: "ncloc".to_string(),
            expected: ValueType::Int,
            actual: ValueType::String,
        };
        let message = err.to_string();
        assert!(message.contains("INT"));
        assert!(message.contains("STRING"));
        assert!(message.contains("ncloc"));
    }

    #[test]
    fn context_wraps_message() {
        let result: Result<()> = Err(Error::configuration("bad grid"));
        let err = result.context("loading settings").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading settings: Configuration error: bad grid"
        );
    }

    #[test]
    fn root_cause_sees_through_wrapping() {
        let err = Error::Visitor {
            visitor: "maintainability",
            component_ref: 3,
            source: Box::new(Error::AlreadyExists {
                component_ref: 3,
                metric: "development_cost".to_string(),
            }),
        }
        .with_context("computing measures");

        assert!(matches!(
            err.root_cause(),
            Error::AlreadyExists { component_ref: 3, .. }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
