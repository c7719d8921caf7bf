//! # trellis - Request Routing Engine
//!
//! `trellis` maps an inbound request's method and path to a registered
//! handler. Routes come in three shapes:
//!
//! - **plain** paths (`/health`), resolved by one hash lookup;
//! - **templated** paths (`/users/{id:int}`), resolved through a segment trie;
//! - **static mounts** (`/assets`), which receive everything below their
//!   prefix with the prefix stripped.
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let mut map = RouteMap::new();
//! map.add_static_path("/assets");
//! map.add_routes([
//!     RouteDescriptor::http("/users/{id:int}", [(Method::GET, "show_user")])?,
//!     RouteDescriptor::mount("/assets", "files")?,
//! ])?;
//!
//! let mut scope = Scope::http(Method::GET, "/users/42");
//! assert_eq!(map.resolve(&mut scope, &RawParams)?, &"show_user");
//! assert_eq!(scope.path_params.get("id"), Some("42"));
//!
//! let mut scope = Scope::http(Method::GET, "/assets/app.js");
//! assert_eq!(map.resolve(&mut scope, &RawParams)?, &"files");
//! assert_eq!(scope.path, "/app.js");
//! # Ok::<(), trellis::TrellisError>(())
//! ```
//!
//! ## Features
//!
//! - `config` (default): [`RouteTable`] for routes declared in TOML
//! - `tracing`: registration, resolution and reload events via `tracing`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use trellis_core::{
    // Errors
    BoxError,
    ConfigError,
    // Routes
    DispatchKey,
    Method,
    // Parameters
    DEFAULT_PARAM_TYPE,
    ParamParser,
    PathParameter,
    PathParams,
    PathTemplate,
    RawParams,
    ResolveError,
    // Traits
    Resolver,
    RouteDescriptor,
    RouteKind,
    RouteKindTag,
    RouteResult,
    Router,
    // Scope
    Scope,
    ScopeKind,
    TrellisError,
    WILDCARD,
};

pub use trellis_std::{
    LeafData, Node, PlainRouteIndex, RouteMap, SegmentTrie, SharedRouteMap, StaticPathRegistry,
};

#[cfg(feature = "config")]
pub use trellis_std::{HandlerSet, RouteEntry, RouteTable};

/// Path normalization and segmentation.
pub mod path {
    pub use trellis_std::path::{ROOT, normalize, segments};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use trellis_std::testing::*;
}

/// Prelude module - common imports for Trellis.
///
/// # Usage
///
/// ```rust
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ConfigError, Method, ParamParser, PathParams, RawParams, ResolveError, Resolver,
        RouteDescriptor, RouteMap, Scope, ScopeKind, SharedRouteMap,
    };
}
