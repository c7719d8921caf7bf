//! Terminal route data shared by trie leaves and plain-index entries.

use crate::path;
use std::collections::HashMap;
use trellis_core::{ConfigError, DispatchKey, PathParameter, PathTemplate, RouteKind};

/// Everything a resolved path needs to pick a handler.
#[derive(Debug, Clone)]
pub struct LeafData<H> {
    path_parameters: Vec<PathParameter>,
    handlers: HashMap<DispatchKey, H>,
    is_mount: bool,
    mount_prefix: String,
}

impl<H> Default for LeafData<H> {
    fn default() -> Self {
        Self {
            path_parameters: Vec::new(),
            handlers: HashMap::new(),
            is_mount: false,
            mount_prefix: String::new(),
        }
    }
}

impl<H> LeafData<H> {
    /// Parameters shared by every registration that reaches this leaf.
    pub fn path_parameters(&self) -> &[PathParameter] {
        &self.path_parameters
    }

    /// All handlers by dispatch key.
    pub fn handlers(&self) -> &HashMap<DispatchKey, H> {
        &self.handlers
    }

    /// The handler for one dispatch key.
    pub fn handler(&self, key: &DispatchKey) -> Option<&H> {
        self.handlers.get(key)
    }

    /// Returns true if requests reaching this leaf are delegated to a mount.
    pub fn is_mount(&self) -> bool {
        self.is_mount
    }

    /// The prefix stripped from request paths delegated to this leaf.
    ///
    /// `None` unless the leaf was registered on a static path.
    pub fn mount_prefix(&self) -> Option<&str> {
        if self.is_mount && !self.mount_prefix.is_empty() {
            Some(&self.mount_prefix)
        } else {
            None
        }
    }

    /// Merge one registration into this leaf.
    ///
    /// `static_path` is true when the registered path is a known static
    /// path at the time of registration.
    pub(crate) fn configure(
        &mut self,
        template: PathTemplate,
        kind: RouteKind<H>,
        static_path: bool,
    ) -> Result<(), ConfigError> {
        let (path, parameters) = template.into_parts();

        if !self.path_parameters.is_empty() && self.path_parameters != parameters {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path, "conflicting path parameters");

            return Err(ConfigError::ConflictingParameters {
                path,
                existing: self.path_parameters.clone(),
                incoming: parameters,
            });
        }
        self.path_parameters = parameters;

        if static_path {
            self.is_mount = true;
            self.mount_prefix = path::normalize(&path).to_string();
        }
        if kind.is_mount() {
            self.is_mount = true;
        }

        for (key, handler) in kind.into_handlers() {
            // Re-registering a key replaces the earlier handler.
            if self.handlers.insert(key, handler).is_some() {
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path, "handler replaced by later registration");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::Method;

    fn template(path: &str) -> PathTemplate {
        PathTemplate::parse(path).unwrap()
    }

    #[test]
    fn test_configure_http_handlers() {
        let mut leaf = LeafData::default();
        leaf.configure(
            template("/users/{id:int}"),
            RouteKind::Http(vec![(Method::GET, "show"), (Method::PUT, "update")]),
            false,
        )
        .unwrap();

        assert_eq!(leaf.path_parameters().len(), 1);
        assert_eq!(leaf.handler(&DispatchKey::Http(Method::GET)), Some(&"show"));
        assert_eq!(leaf.handler(&DispatchKey::Http(Method::PUT)), Some(&"update"));
        assert!(!leaf.is_mount());
        assert_eq!(leaf.mount_prefix(), None);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut leaf = LeafData::default();
        leaf.configure(template("/a"), RouteKind::Http(vec![(Method::GET, 1)]), false)
            .unwrap();
        leaf.configure(template("/a"), RouteKind::Http(vec![(Method::GET, 2)]), false)
            .unwrap();

        assert_eq!(leaf.handlers().len(), 1);
        assert_eq!(leaf.handler(&DispatchKey::Http(Method::GET)), Some(&2));
    }

    #[test]
    fn test_conflicting_parameters() {
        let mut leaf = LeafData::default();
        leaf.configure(
            template("/item/{id:int}"),
            RouteKind::Http(vec![(Method::GET, 1)]),
            false,
        )
        .unwrap();

        let err = leaf
            .configure(
                template("/item/{id:str}"),
                RouteKind::Http(vec![(Method::POST, 2)]),
                false,
            )
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingParameters { .. }));
        // Rejected registration leaves the leaf untouched.
        assert_eq!(leaf.handler(&DispatchKey::Http(Method::POST)), None);
    }

    #[test]
    fn test_static_path_marks_mount() {
        let mut leaf = LeafData::default();
        leaf.configure(template("/assets/"), RouteKind::Mount("files"), true)
            .unwrap();

        assert!(leaf.is_mount());
        assert_eq!(leaf.mount_prefix(), Some("/assets"));
        assert_eq!(leaf.handler(&DispatchKey::Mount), Some(&"files"));
    }

    #[test]
    fn test_mount_kind_without_static_path() {
        let mut leaf = LeafData::default();
        leaf.configure(template("/app"), RouteKind::Mount("app"), false)
            .unwrap();

        assert!(leaf.is_mount());
        assert_eq!(leaf.mount_prefix(), None);
    }
}
