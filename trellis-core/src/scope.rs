//! The per-request context consulted and updated by resolution.

use crate::{dispatch::DispatchKey, params::PathParams};
use http::Method;

/// The protocol of an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    /// A plain HTTP request with its method.
    Http(Method),
    /// A WebSocket handshake.
    WebSocket,
}

impl ScopeKind {
    /// The handler key a routed (non-mount) leaf is consulted with.
    pub fn dispatch_key(&self) -> DispatchKey {
        match self {
            ScopeKind::Http(method) => DispatchKey::Http(method.clone()),
            ScopeKind::WebSocket => DispatchKey::WebSocket,
        }
    }

    /// The HTTP method, if any.
    pub fn method(&self) -> Option<&Method> {
        match self {
            ScopeKind::Http(method) => Some(method),
            ScopeKind::WebSocket => None,
        }
    }
}

/// A request scope.
///
/// Resolution writes the bound parameters to `path_params` and, when a mount
/// takes over the request, rewrites `path` to the part below the mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Request protocol (and method for HTTP).
    pub kind: ScopeKind,
    /// Request path.
    pub path: String,
    /// Parameters bound by the last resolution.
    pub path_params: PathParams,
}

impl Scope {
    /// Create a scope of the given kind.
    pub fn new(kind: ScopeKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            path_params: PathParams::new(),
        }
    }

    /// Create an HTTP scope.
    pub fn http(method: Method, path: impl Into<String>) -> Self {
        Self::new(ScopeKind::Http(method), path)
    }

    /// Create a WebSocket scope.
    pub fn websocket(path: impl Into<String>) -> Self {
        Self::new(ScopeKind::WebSocket, path)
    }
}
