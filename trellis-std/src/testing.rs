//! Testing utilities for Trellis.
//!
//! - [`TestHandler`]: a named, comparable handler value
//! - [`RecordingParser`]: a parameter parser that records every call
//! - [`FailingParser`]: a parameter parser that always rejects
//! - [`get`] / [`websocket`]: scope shorthands

use std::sync::{Arc, Mutex, PoisonError};
use trellis_core::{BoxError, Method, ParamParser, PathParameter, PathParams, RawParams, Scope};

// ============================================================================
// Handlers
// ============================================================================

/// A handler that is just a name.
///
/// Resolution results can be compared directly:
/// `assert_eq!(map.resolve(&mut scope, &RawParams)?, &TestHandler("users"))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestHandler(pub &'static str);

// ============================================================================
// Parsers
// ============================================================================

/// One recorded parser invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCall {
    /// Descriptors passed in.
    pub parameters: Vec<PathParameter>,
    /// Captured values passed in.
    pub raw: Vec<String>,
}

/// A parser that records its inputs and binds values like [`RawParams`].
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingParser {
    calls: Arc<Mutex<Vec<ParseCall>>>,
}

impl RecordingParser {
    /// Create a new recording parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<ParseCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ParamParser for RecordingParser {
    fn parse(&self, parameters: &[PathParameter], raw: &[&str]) -> Result<PathParams, BoxError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ParseCall {
                parameters: parameters.to_vec(),
                raw: raw.iter().map(|s| s.to_string()).collect(),
            });
        RawParams.parse(parameters, raw)
    }
}

/// A parser that rejects every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingParser;

impl ParamParser for FailingParser {
    fn parse(&self, _parameters: &[PathParameter], _raw: &[&str]) -> Result<PathParams, BoxError> {
        Err("parameter rejected".into())
    }
}

// ============================================================================
// Scopes
// ============================================================================

/// An HTTP `GET` scope.
pub fn get(path: &str) -> Scope {
    Scope::http(Method::GET, path)
}

/// An HTTP scope with any method.
pub fn request(method: Method, path: &str) -> Scope {
    Scope::http(method, path)
}

/// A WebSocket scope.
pub fn websocket(path: &str) -> Scope {
    Scope::websocket(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_parser_records() {
        let parser = RecordingParser::new();
        let shared = parser.clone();
        let params = [PathParameter::new("id", "int")];

        let out = parser.parse(&params, &["5"]).unwrap();
        assert_eq!(out.get("id"), Some("5"));
        assert_eq!(shared.count(), 1);
        assert_eq!(shared.calls()[0].raw, ["5"]);

        shared.clear();
        assert_eq!(parser.count(), 0);
    }

    #[test]
    fn test_failing_parser() {
        assert!(FailingParser.parse(&[], &[]).is_err());
    }
}
