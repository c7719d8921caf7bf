//! Registry of static mount prefixes.

use std::collections::HashSet;

/// The set of paths registered as static mounts.
///
/// Membership is consulted when a route is registered, so a static path
/// must be added before the routes under it. Adding one later does not
/// reclassify routes that are already registered.
#[derive(Debug, Clone, Default)]
pub struct StaticPathRegistry {
    paths: HashSet<String>,
}

impl StaticPathRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static path.
    pub fn add(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Remove a static path. Returns false if it was not registered.
    pub fn remove(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    /// Check if `path` is a static path.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over all static paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Get the number of static paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
