//! Declarative route tables.
//!
//! A route table describes static paths and routes in TOML and refers to
//! handlers by name. [`RouteTable::build`] binds those names against a
//! [`HandlerSet`] and registers everything into a fresh [`RouteMap`].
//!
//! ```toml
//! static_paths = ["/assets"]
//!
//! [[routes]]
//! path = "/users/{id:int}"
//! kind = "http"
//! methods = ["GET", "PUT"]
//! handler = "users"
//!
//! [[routes]]
//! path = "/assets"
//! kind = "mount"
//! handler = "files"
//! ```

use crate::route_map::RouteMap;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};
use trellis_core::{ConfigError, Method, PathTemplate, RouteDescriptor, RouteKind, RouteKindTag};

/// A whole route table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteTable {
    /// Paths registered as static mounts before any route.
    #[serde(default)]
    pub static_paths: Vec<String>,
    /// Routes in registration order.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One route in a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    /// Route path, possibly templated.
    pub path: String,
    /// `http`, `websocket` or `mount`.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// HTTP methods; only read for `http` routes.
    #[serde(default)]
    pub methods: Vec<String>,
    /// Name of the handler in the [`HandlerSet`].
    pub handler: String,
}

fn default_kind() -> String {
    RouteKindTag::Http.as_str().to_string()
}

impl RouteTable {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Register the table into a new route map.
    ///
    /// Static paths are added first so that routes on them become mounts.
    pub fn build<H: Clone>(&self, handlers: &HandlerSet<H>) -> Result<RouteMap<H>, ConfigError> {
        let mut map = RouteMap::new();
        for path in &self.static_paths {
            map.add_static_path(path.clone());
        }
        for entry in &self.routes {
            map.add_route(entry.to_descriptor(handlers)?)?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            routes = self.routes.len(),
            static_paths = self.static_paths.len(),
            "route table built"
        );

        Ok(map)
    }
}

impl RouteEntry {
    /// Bind this entry's handler and build its descriptor.
    pub fn to_descriptor<H: Clone>(
        &self,
        handlers: &HandlerSet<H>,
    ) -> Result<RouteDescriptor<H>, ConfigError> {
        let tag: RouteKindTag = self.kind.parse()?;
        let handler = handlers
            .get(&self.handler)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownHandler {
                name: self.handler.clone(),
                path: self.path.clone(),
            })?;
        let template = PathTemplate::parse(self.path.as_str())?;

        let kind = match tag {
            RouteKindTag::Http => {
                if self.methods.is_empty() {
                    return Err(ConfigError::MissingMethods(self.path.clone()));
                }
                let methods = self
                    .methods
                    .iter()
                    .map(|m| self.parse_method(m).map(|method| (method, handler.clone())))
                    .collect::<Result<Vec<_>, _>>()?;
                RouteKind::Http(methods)
            }
            RouteKindTag::WebSocket => RouteKind::WebSocket(handler),
            RouteKindTag::Mount => RouteKind::Mount(handler),
        };

        Ok(RouteDescriptor::new(template, kind))
    }

    fn parse_method(&self, method: &str) -> Result<Method, ConfigError> {
        Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes()).map_err(|_| {
            ConfigError::InvalidMethod {
                method: method.to_string(),
                path: self.path.clone(),
            }
        })
    }
}

/// Handlers available to a route table, by name.
#[derive(Debug, Clone)]
pub struct HandlerSet<H> {
    handlers: HashMap<String, H>,
}

impl<H> Default for HandlerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> HandlerSet<H> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Add a named handler, replacing any earlier one with that name.
    pub fn with(mut self, name: impl Into<String>, handler: H) -> Self {
        self.insert(name, handler);
        self
    }

    /// Add a named handler, replacing any earlier one with that name.
    pub fn insert(&mut self, name: impl Into<String>, handler: H) {
        self.handlers.insert(name.into(), handler);
    }

    /// Look up a handler by name.
    pub fn get(&self, name: &str) -> Option<&H> {
        self.handlers.get(name)
    }

    /// Get the number of handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<N: Into<String>, H> FromIterator<(N, H)> for HandlerSet<H> {
    fn from_iter<I: IntoIterator<Item = (N, H)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, handler) in iter {
            set.insert(name, handler);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{RawParams, Scope};

    const TABLE: &str = r#"
        static_paths = ["/assets"]

        [[routes]]
        path = "/users/{id:int}"
        methods = ["get", "PUT"]
        handler = "users"

        [[routes]]
        path = "/ws"
        kind = "websocket"
        handler = "chat"

        [[routes]]
        path = "/assets"
        kind = "mount"
        handler = "files"
    "#;

    fn handlers() -> HandlerSet<&'static str> {
        HandlerSet::new()
            .with("users", "users")
            .with("chat", "chat")
            .with("files", "files")
    }

    #[test]
    fn test_parse_table() {
        let table = RouteTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.static_paths, ["/assets"]);
        assert_eq!(table.routes.len(), 3);
        assert_eq!(table.routes[0].kind, "http");
        assert_eq!(table.routes[1].kind, "websocket");
    }

    #[test]
    fn test_build_and_resolve() {
        let map = RouteTable::from_toml_str(TABLE)
            .unwrap()
            .build(&handlers())
            .unwrap();

        let mut scope = Scope::http(Method::PUT, "/users/9");
        assert_eq!(map.resolve(&mut scope, &RawParams).unwrap(), &"users");

        let mut scope = Scope::websocket("/ws");
        assert_eq!(map.resolve(&mut scope, &RawParams).unwrap(), &"chat");

        let mut scope = Scope::http(Method::GET, "/assets/site.css");
        assert_eq!(map.resolve(&mut scope, &RawParams).unwrap(), &"files");
        assert_eq!(scope.path, "/site.css");
    }

    #[test]
    fn test_unknown_kind() {
        let table = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/rpc"
            kind = "grpc"
            handler = "users"
            "#,
        )
        .unwrap();

        let err = table.build(&handlers()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRouteKind(kind) if kind == "grpc"));
    }

    #[test]
    fn test_unknown_handler() {
        let table = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/x"
            methods = ["GET"]
            handler = "nope"
            "#,
        )
        .unwrap();

        let err = table.build(&handlers()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownHandler { name, .. } if name == "nope"));
    }

    #[test]
    fn test_http_route_requires_valid_methods() {
        let missing = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/x"
            handler = "users"
            "#,
        )
        .unwrap();
        assert!(matches!(
            missing.build(&handlers()),
            Err(ConfigError::MissingMethods(_))
        ));

        let invalid = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/x"
            methods = ["GE T"]
            handler = "users"
            "#,
        )
        .unwrap();
        assert!(matches!(
            invalid.build(&handlers()),
            Err(ConfigError::InvalidMethod { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = RouteTable::from_toml_str("routes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = RouteTable::from_toml_str("unexpected = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RouteTable::load("/nonexistent/trellis/routes.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
