//! # Lookup and Resolution Traits
//!
//! Two layers:
//!
//! - [`Router`] is a keyed lookup (`K -> V`) returning a [`RouteResult`].
//!   Index structures such as the plain-path index implement it.
//! - [`Resolver`] takes a whole request [`Scope`] to a handler, applying path
//!   normalization, parameter binding and method dispatch.
//!
//! Both are read-only: a lookup never changes the structure it reads.

use crate::{error::ResolveError, params::ParamParser, scope::Scope};

/// Result of a keyed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V>: Send + Sync {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

/// Maps a request scope to a handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve requests to handlers of type `{H}`",
    label = "missing `Resolver` implementation"
)]
pub trait Resolver<H>: Send + Sync {
    /// Resolve `scope` to a handler.
    ///
    /// On success `scope.path_params` holds the bound parameters, and
    /// `scope.path` has been rewritten if a mount took over the request.
    fn resolve(&self, scope: &mut Scope, parser: &dyn ParamParser) -> Result<&H, ResolveError>;
}
