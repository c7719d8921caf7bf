//! Route kinds and the keys handlers are stored under.

use crate::{
    error::ConfigError,
    params::{PathParameter, PathTemplate},
};
use http::Method;
use std::{fmt, str::FromStr};

/// Selects a handler from a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DispatchKey {
    /// An HTTP handler for one method.
    Http(Method),
    /// The WebSocket handler.
    WebSocket,
    /// The single handler of a mount, which does its own dispatch.
    Mount,
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchKey::Http(method) => write!(f, "{method}"),
            DispatchKey::WebSocket => f.write_str("websocket"),
            DispatchKey::Mount => f.write_str("mount"),
        }
    }
}

/// What a route does with a matched request, carrying its handler(s).
#[derive(Debug, Clone)]
pub enum RouteKind<H> {
    /// One handler per HTTP method.
    Http(Vec<(Method, H)>),
    /// A WebSocket endpoint.
    WebSocket(H),
    /// A mounted application that receives everything below its path.
    Mount(H),
}

impl<H> RouteKind<H> {
    /// The tag of this kind.
    pub fn tag(&self) -> RouteKindTag {
        match self {
            RouteKind::Http(_) => RouteKindTag::Http,
            RouteKind::WebSocket(_) => RouteKindTag::WebSocket,
            RouteKind::Mount(_) => RouteKindTag::Mount,
        }
    }

    /// Returns true for [`RouteKind::Mount`].
    pub fn is_mount(&self) -> bool {
        matches!(self, RouteKind::Mount(_))
    }

    /// Handlers keyed by the dispatch key each is stored under.
    pub fn into_handlers(self) -> Vec<(DispatchKey, H)> {
        match self {
            RouteKind::Http(handlers) => handlers
                .into_iter()
                .map(|(method, h)| (DispatchKey::Http(method), h))
                .collect(),
            RouteKind::WebSocket(h) => vec![(DispatchKey::WebSocket, h)],
            RouteKind::Mount(h) => vec![(DispatchKey::Mount, h)],
        }
    }
}

/// The textual name of a route kind, as written in route tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKindTag {
    /// `http`
    Http,
    /// `websocket`
    WebSocket,
    /// `mount`
    Mount,
}

impl RouteKindTag {
    /// The canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteKindTag::Http => "http",
            RouteKindTag::WebSocket => "websocket",
            RouteKindTag::Mount => "mount",
        }
    }
}

impl fmt::Display for RouteKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteKindTag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(RouteKindTag::Http),
            "websocket" | "ws" => Ok(RouteKindTag::WebSocket),
            "mount" | "asgi" => Ok(RouteKindTag::Mount),
            _ => Err(ConfigError::UnknownRouteKind(s.to_string())),
        }
    }
}

/// A route ready for registration.
#[derive(Debug, Clone)]
pub struct RouteDescriptor<H> {
    template: PathTemplate,
    kind: RouteKind<H>,
}

impl<H> RouteDescriptor<H> {
    /// Create a descriptor from an already parsed template.
    pub fn new(template: PathTemplate, kind: RouteKind<H>) -> Self {
        Self { template, kind }
    }

    /// An HTTP route.
    ///
    /// ```rust
    /// use http::Method;
    /// use trellis_core::RouteDescriptor;
    ///
    /// let route = RouteDescriptor::http("/users/{id:int}", [(Method::GET, "show")]).unwrap();
    /// assert_eq!(route.parameters().len(), 1);
    /// ```
    pub fn http(
        path: &str,
        handlers: impl IntoIterator<Item = (Method, H)>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            PathTemplate::parse(path)?,
            RouteKind::Http(handlers.into_iter().collect()),
        ))
    }

    /// A WebSocket route.
    pub fn websocket(path: &str, handler: H) -> Result<Self, ConfigError> {
        Ok(Self::new(PathTemplate::parse(path)?, RouteKind::WebSocket(handler)))
    }

    /// A mount route.
    pub fn mount(path: &str, handler: H) -> Result<Self, ConfigError> {
        Ok(Self::new(PathTemplate::parse(path)?, RouteKind::Mount(handler)))
    }

    /// The path as registered.
    pub fn path(&self) -> &str {
        self.template.path()
    }

    /// Declared parameters in order.
    pub fn parameters(&self) -> &[PathParameter] {
        self.template.parameters()
    }

    /// The parsed template.
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// The route kind.
    pub fn kind(&self) -> &RouteKind<H> {
        &self.kind
    }

    /// Split into template and kind.
    pub fn into_parts(self) -> (PathTemplate, RouteKind<H>) {
        (self.template, self.kind)
    }
}
