//! # trellis-std
//!
//! The Trellis route map engine.
//!
//! This crate provides:
//! - **Segmentation**: [`path::normalize`] and [`path::segments`]
//! - **Trie**: [`SegmentTrie`] of [`Node`]s for templated and mounted routes
//! - **Plain index**: [`PlainRouteIndex`] for parameterless routes
//! - **Static paths**: [`StaticPathRegistry`] of mount prefixes
//! - **Route map**: [`RouteMap`], registration and resolution
//! - **Hot reload**: [`SharedRouteMap`], atomic snapshot publication
//! - **Route tables**: [`RouteTable`] loaded from TOML (feature `config`)
//!
//! # Choosing an Entry Point
//!
//! | Type | Use Case |
//! |------|----------|
//! | `RouteMap` | Routes fixed at startup |
//! | `SharedRouteMap` | Routes replaced while serving |
//! | `RouteTable` | Routes declared in configuration files |

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use trellis_core;

// Modules
#[cfg(feature = "config")]
pub mod config;
pub mod leaf;
pub mod path;
pub mod plain;
pub mod route_map;
pub mod shared;
pub mod static_paths;
pub mod testing;
pub mod trie;

#[cfg(feature = "config")]
pub use config::{HandlerSet, RouteEntry, RouteTable};
pub use leaf::LeafData;
pub use plain::PlainRouteIndex;
pub use route_map::RouteMap;
pub use shared::SharedRouteMap;
pub use static_paths::StaticPathRegistry;
pub use trie::{Descent, Node, SegmentTrie};
