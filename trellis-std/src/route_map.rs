//! The route map: registration and resolution.
//!
//! # Data Flow
//! ```text
//! Registration (startup, single-threaded):
//!     RouteDescriptor
//!     → classify: parameters or static path? → trie, else plain index
//!     → merge LeafData (parameter conflict check, mount marking)
//!     → insert handlers by dispatch key
//!
//! Resolution (per request, read-only):
//!     Scope.path
//!     → normalize
//!     → plain index hit? → leaf
//!     → else trie descent (literal > wildcard > mount fallback)
//!     → bind parameters, rewrite path for mounts
//!     → pick handler by dispatch key
//! ```

use crate::{
    leaf::LeafData,
    path,
    plain::PlainRouteIndex,
    static_paths::StaticPathRegistry,
    trie::SegmentTrie,
};
use trellis_core::{
    ConfigError, DispatchKey, ParamParser, PathParams, ResolveError, Resolver, RouteDescriptor,
    Scope, ScopeKind, WILDCARD,
};

/// Maps request scopes to handlers.
///
/// Build it once at startup with [`add_route`](Self::add_route) and
/// friends, then share it read-only. To change routes at runtime, build a
/// new map and publish it through [`SharedRouteMap`](crate::SharedRouteMap).
///
/// # Example
///
/// ```rust
/// use trellis_core::{Method, RawParams, RouteDescriptor, Scope};
/// use trellis_std::RouteMap;
///
/// let mut map = RouteMap::new();
/// map.add_route(RouteDescriptor::http("/users/{id:int}", [(Method::GET, "show_user")])?)?;
///
/// let mut scope = Scope::http(Method::GET, "/users/42/");
/// assert_eq!(map.resolve(&mut scope, &RawParams)?, &"show_user");
/// assert_eq!(scope.path_params.get("id"), Some("42"));
/// # Ok::<(), trellis_core::TrellisError>(())
/// ```
#[derive(Debug)]
pub struct RouteMap<H> {
    static_paths: StaticPathRegistry,
    plain: PlainRouteIndex<H>,
    trie: SegmentTrie<H>,
}

impl<H> Default for RouteMap<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteMap<H> {
    /// Create a new empty route map.
    pub fn new() -> Self {
        Self {
            static_paths: StaticPathRegistry::new(),
            plain: PlainRouteIndex::new(),
            trie: SegmentTrie::new(),
        }
    }

    /// Register every route in order, stopping at the first error.
    ///
    /// An error means the route table is unusable; callers abort startup
    /// rather than serve from a partially registered map.
    pub fn add_routes(
        &mut self,
        routes: impl IntoIterator<Item = RouteDescriptor<H>>,
    ) -> Result<(), ConfigError> {
        for route in routes {
            self.add_route(route)?;
        }
        Ok(())
    }

    /// Register a single route.
    ///
    /// Paths with parameters, and paths currently registered as static
    /// paths, go into the trie. Everything else goes into the plain index.
    ///
    /// A literal `*` segment is only allowed on plain paths; in the trie it
    /// would collide with the wildcard child.
    pub fn add_route(&mut self, route: RouteDescriptor<H>) -> Result<(), ConfigError> {
        let (template, kind) = route.into_parts();
        let static_path = self.static_paths.contains(template.path());
        let routed = template.has_parameters() || static_path;

        if routed && template.path().split('/').any(|segment| segment == WILDCARD) {
            return Err(ConfigError::invalid_template(
                template.path(),
                "'*' cannot be a literal segment on a parameterized or static path",
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %template.path(),
            kind = %kind.tag(),
            routed,
            static_path,
            "registering route"
        );

        let leaf = if routed {
            self.trie.leaf_or_insert(&template.wildcard_path())
        } else {
            self.plain.leaf_or_insert(template.path())
        };
        leaf.configure(template, kind, static_path)
    }

    /// Add a static path.
    ///
    /// Must happen before the mount route on this path is registered.
    pub fn add_static_path(&mut self, path: impl Into<String>) {
        self.static_paths.add(path);
    }

    /// Check if `path` is a registered static path.
    pub fn is_static_path(&self, path: &str) -> bool {
        self.static_paths.contains(path)
    }

    /// Remove a static path. Returns false if it was not registered.
    ///
    /// Routes already registered on the path keep their mount marking.
    pub fn remove_static_path(&mut self, path: &str) -> bool {
        self.static_paths.remove(path)
    }

    /// The registered static paths.
    pub fn static_paths(&self) -> &StaticPathRegistry {
        &self.static_paths
    }

    /// Returns true if `path` resolves through the plain index.
    pub fn is_plain_route(&self, path: &str) -> bool {
        self.plain.get(path::normalize(path)).is_some()
    }

    /// Number of distinct resolvable paths (plain entries plus trie leaves).
    pub fn len(&self) -> usize {
        self.plain.len() + self.trie.len()
    }

    /// Check if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a request scope to its handler.
    ///
    /// Once a route matches, `scope.path_params` holds the parser's output,
    /// even if dispatch then fails. Otherwise it is left empty.
    /// When the request falls through to a mount, `scope.path` loses the
    /// mount prefix (a root mount leaves it unchanged).
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] when nothing matches the path
    /// - [`ResolveError::MethodNotAllowed`] when the path matches but has no
    ///   handler for the HTTP method
    /// - [`ResolveError::InvalidParameters`] when the parser fails
    pub fn resolve(&self, scope: &mut Scope, parser: &dyn ParamParser) -> Result<&H, ResolveError> {
        scope.path_params = PathParams::new();

        let (dispatched, params, mount_prefix) = {
            let path = path::normalize(&scope.path);

            let (leaf, captured, mount_prefix) = match self.plain.get(path) {
                Some(leaf) => (leaf, Vec::new(), None),
                None => {
                    let Some(descent) = self.trie.descend(path) else {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(path, "no route");
                        return Err(ResolveError::not_found(path));
                    };
                    let leaf = descent
                        .node
                        .leaf()
                        .ok_or_else(|| ResolveError::not_found(path))?;
                    (leaf, descent.captured, descent.mount_prefix)
                }
            };

            let params = parser
                .parse(leaf.path_parameters(), &captured)
                .map_err(ResolveError::InvalidParameters)?;
            (dispatch(leaf, &scope.kind, path), params, mount_prefix)
        };

        scope.path_params = params;
        let handler = dispatched?;

        if let Some(prefix) = mount_prefix {
            strip_mount_prefix(&mut scope.path, prefix);
        }

        Ok(handler)
    }
}

impl<H: Send + Sync> Resolver<H> for RouteMap<H> {
    fn resolve(&self, scope: &mut Scope, parser: &dyn ParamParser) -> Result<&H, ResolveError> {
        RouteMap::resolve(self, scope, parser)
    }
}

/// Pick the handler for a matched leaf.
fn dispatch<'a, H>(
    leaf: &'a LeafData<H>,
    kind: &ScopeKind,
    path: &str,
) -> Result<&'a H, ResolveError> {
    if leaf.is_mount() {
        return leaf
            .handler(&DispatchKey::Mount)
            .ok_or_else(|| ResolveError::not_found(path));
    }
    match kind {
        ScopeKind::Http(method) => leaf
            .handler(&DispatchKey::Http(method.clone()))
            .ok_or_else(|| ResolveError::MethodNotAllowed {
                path: path.to_string(),
                method: method.clone(),
            }),
        ScopeKind::WebSocket => leaf
            .handler(&DispatchKey::WebSocket)
            .ok_or_else(|| ResolveError::not_found(path)),
    }
}

/// Remove a mount prefix from the front of a request path.
///
/// Matching is by segment, as in the trie, so repeated slashes in the
/// request do not defeat the rewrite. A prefix whose segments do not equal
/// the request's literally (a templated prefix) leaves the path unchanged.
fn strip_mount_prefix(request_path: &mut String, prefix: &str) {
    if prefix == path::ROOT {
        return;
    }
    let trimmed = request_path.trim();
    let mut rest = path::segments(trimmed).skip(1);
    if !path::segments(prefix)
        .skip(1)
        .all(|expected| rest.next() == Some(expected))
    {
        return;
    }

    let rest: Vec<&str> = rest.collect();
    let rewritten = if rest.is_empty() {
        path::ROOT.to_string()
    } else {
        let mut rewritten = format!("/{}", rest.join("/"));
        if trimmed.ends_with('/') {
            rewritten.push('/');
        }
        rewritten
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(from = %request_path, to = %rewritten, "rewrote path for mount");

    *request_path = rewritten;
}
