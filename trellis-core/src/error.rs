//! Error types for Trellis.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`TrellisError`] - Top-level error type for all Trellis operations
//! - [`ConfigError`] - Registration-time errors; these abort startup
//! - [`ResolveError`] - Request-time errors returned to the serving layer

use crate::params::PathParameter;
use http::Method;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Trellis operations.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// The route table could not be built.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request could not be resolved to a handler.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Errors raised while building a route map.
///
/// Every variant is a configuration mistake. None of them can happen once
/// registration has completed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The same path was registered twice with different parameters.
    #[error(
        "conflicting path parameters for '{path}': registered as [{}], now [{}]",
        fmt_params(.existing),
        fmt_params(.incoming)
    )]
    ConflictingParameters {
        /// The path being registered.
        path: String,
        /// Parameters already stored on the leaf.
        existing: Vec<PathParameter>,
        /// Parameters carried by the new registration.
        incoming: Vec<PathParameter>,
    },

    /// A route kind other than `http`, `websocket` or `mount`.
    #[error("unknown route kind '{0}'")]
    UnknownRouteKind(String),

    /// A path template could not be parsed.
    #[error("invalid path template '{path}': {reason}")]
    InvalidPathTemplate {
        /// The offending path.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A route table references a handler name that was never provided.
    #[error("unknown handler '{name}' for route '{path}'")]
    UnknownHandler {
        /// The missing handler name.
        name: String,
        /// The route referencing it.
        path: String,
    },

    /// A route table lists a method that is not a valid HTTP method token.
    #[error("invalid HTTP method '{method}' for route '{path}'")]
    InvalidMethod {
        /// The rejected method string.
        method: String,
        /// The route listing it.
        path: String,
    },

    /// An HTTP route declared no methods.
    #[error("http route '{0}' declares no methods")]
    MissingMethods(String),

    /// The route table file could not be read.
    #[error("failed to read route table")]
    Io(#[from] std::io::Error),

    /// The route table could not be decoded.
    #[error("failed to parse route table")]
    Parse(#[source] BoxError),
}

impl ConfigError {
    /// Create an InvalidPathTemplate error
    #[inline]
    pub fn invalid_template(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by resolution.
///
/// These are ordinary outcomes for the serving layer to translate into a
/// response; resolution never retries.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No route matches the request path.
    #[error("no route found for path: {path}")]
    NotFound {
        /// The normalized request path.
        path: String,
    },

    /// A route matches the path but not the request method.
    #[error("method {method} not allowed for path: {path}")]
    MethodNotAllowed {
        /// The normalized request path.
        path: String,
        /// The rejected method.
        method: Method,
    },

    /// The injected parameter parser rejected the captured values.
    #[error("invalid path parameters")]
    InvalidParameters(#[source] BoxError),
}

impl ResolveError {
    /// Create a NotFound error
    #[inline]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Returns true for [`ResolveError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`ResolveError::MethodNotAllowed`].
    pub fn is_method_not_allowed(&self) -> bool {
        matches!(self, Self::MethodNotAllowed { .. })
    }
}

fn fmt_params(params: &[PathParameter]) -> String {
    params
        .iter()
        .map(|p| p.full.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_parameters_display() {
        let err = ConfigError::ConflictingParameters {
            path: "/item/{id:str}".to_string(),
            existing: vec![PathParameter::new("id", "int")],
            incoming: vec![PathParameter::new("id", "str")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/item/{id:str}"));
        assert!(msg.contains("[id:int]"));
        assert!(msg.contains("[id:str]"));
    }

    #[test]
    fn test_unknown_route_kind_display() {
        let err = ConfigError::UnknownRouteKind("grpc".to_string());
        assert_eq!(err.to_string(), "unknown route kind 'grpc'");
    }

    #[test]
    fn test_resolve_error_predicates() {
        let not_found = ResolveError::not_found("/missing");
        assert!(not_found.is_not_found());
        assert!(!not_found.is_method_not_allowed());

        let not_allowed = ResolveError::MethodNotAllowed {
            path: "/users".to_string(),
            method: Method::DELETE,
        };
        assert!(not_allowed.is_method_not_allowed());
        assert_eq!(
            not_allowed.to_string(),
            "method DELETE not allowed for path: /users"
        );
    }

    #[test]
    fn test_top_level_conversion() {
        let err: TrellisError = ResolveError::not_found("/x").into();
        assert!(matches!(err, TrellisError::Resolve(_)));

        let err: TrellisError = ConfigError::MissingMethods("/x".to_string()).into();
        assert!(matches!(err, TrellisError::Config(_)));
    }
}
