//! # trellis-core
//!
//! Core types for the Trellis request routing engine.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by
//! the engine in `trellis-std` and by code that builds routes or consumes
//! resolution results:
//!
//! - [`PathTemplate`] / [`PathParameter`] - parsed route paths
//! - [`RouteDescriptor`] / [`RouteKind`] - routes ready for registration
//! - [`Scope`] - the per-request context resolution reads and updates
//! - [`ParamParser`] - the injected strategy that binds captured values
//! - [`Router`] / [`Resolver`] - lookup and resolution traits
//!
//! # Error Types
//!
//! - [`TrellisError`] - Top-level error type
//! - [`ConfigError`] - Registration errors (fatal at startup)
//! - [`ResolveError`] - Request-time outcomes (`NotFound`, `MethodNotAllowed`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod params;
mod router;
mod scope;

// Re-exports
pub use dispatch::{DispatchKey, RouteDescriptor, RouteKind, RouteKindTag};
pub use error::{BoxError, ConfigError, ResolveError, TrellisError};
pub use params::{
    DEFAULT_PARAM_TYPE, ParamParser, PathParameter, PathParams, PathTemplate, RawParams, WILDCARD,
};
pub use router::{Resolver, RouteResult, Router};
pub use scope::{Scope, ScopeKind};

pub use http::Method;
