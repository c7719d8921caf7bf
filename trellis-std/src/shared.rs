//! Atomically replaceable route maps for hot reload.
//!
//! A published [`RouteMap`] is never mutated. Reloading builds a complete
//! new map off to the side and swaps the pointer, so every resolution sees
//! one whole snapshot: the old map or the new one, never a mix.
//!
//! ```text
//! [resolve()] → [ArcSwap::load()] → RouteMap snapshot
//!                     ↓ (reload)
//!               [ArcSwap::swap(new_map)]
//!                     ↓
//!               [old snapshot dropped with its last reader]
//! ```

use crate::route_map::RouteMap;
use arc_swap::{ArcSwap, Guard};
use std::sync::Arc;
use trellis_core::{ConfigError, ParamParser, ResolveError, Scope};

/// A route map behind an atomic pointer.
pub struct SharedRouteMap<H> {
    current: ArcSwap<RouteMap<H>>,
}

impl<H> SharedRouteMap<H> {
    /// Wrap an already built map.
    pub fn new(map: RouteMap<H>) -> Self {
        Self {
            current: ArcSwap::new(Arc::new(map)),
        }
    }

    /// The current snapshot (lock-free atomic load).
    #[inline]
    pub fn load(&self) -> Guard<Arc<RouteMap<H>>> {
        self.current.load()
    }

    /// The current snapshot as an owned `Arc`, for holding across awaits.
    pub fn snapshot(&self) -> Arc<RouteMap<H>> {
        self.current.load_full()
    }

    /// Replace the current map. Returns the previous snapshot.
    pub fn publish(&self, map: RouteMap<H>) -> Arc<RouteMap<H>> {
        #[cfg(feature = "tracing")]
        let routes = map.len();

        let old = self.current.swap(Arc::new(map));

        #[cfg(feature = "tracing")]
        tracing::info!(routes, previous_routes = old.len(), "route map published");

        old
    }

    /// Build a fresh map with `build` and publish it.
    ///
    /// If `build` fails nothing is published and the current map stays in
    /// service.
    pub fn rebuild<F>(&self, build: F) -> Result<Arc<RouteMap<H>>, ConfigError>
    where
        F: FnOnce(&mut RouteMap<H>) -> Result<(), ConfigError>,
    {
        let mut map = RouteMap::new();
        if let Err(err) = build(&mut map) {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "route map rebuild failed, keeping current map");
            return Err(err);
        }
        Ok(self.publish(map))
    }
}

impl<H: Clone> SharedRouteMap<H> {
    /// Resolve against the current snapshot, returning an owned handler.
    pub fn resolve(&self, scope: &mut Scope, parser: &dyn ParamParser) -> Result<H, ResolveError> {
        self.current.load().resolve(scope, parser).cloned()
    }
}

impl<H> From<RouteMap<H>> for SharedRouteMap<H> {
    fn from(map: RouteMap<H>) -> Self {
        Self::new(map)
    }
}
