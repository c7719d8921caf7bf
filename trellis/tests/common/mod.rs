#![allow(dead_code)]

use trellis::{Method, RouteDescriptor, RouteMap, testing::TestHandler};

// ============================================================================
// Route Builders
// ============================================================================

pub fn get(path: &str, name: &'static str) -> RouteDescriptor<TestHandler> {
    RouteDescriptor::http(path, [(Method::GET, TestHandler(name))]).unwrap()
}

pub fn methods(path: &str, handlers: &[(Method, &'static str)]) -> RouteDescriptor<TestHandler> {
    RouteDescriptor::http(
        path,
        handlers
            .iter()
            .map(|(method, name)| (method.clone(), TestHandler(name))),
    )
    .unwrap()
}

pub fn websocket(path: &str, name: &'static str) -> RouteDescriptor<TestHandler> {
    RouteDescriptor::websocket(path, TestHandler(name)).unwrap()
}

pub fn mount(path: &str, name: &'static str) -> RouteDescriptor<TestHandler> {
    RouteDescriptor::mount(path, TestHandler(name)).unwrap()
}

// ============================================================================
// Maps
// ============================================================================

/// A map with a mix of plain, templated, WebSocket and mounted routes.
pub fn sample_map() -> RouteMap<TestHandler> {
    let mut map = RouteMap::new();
    map.add_static_path("/assets");
    map.add_routes([
        get("/", "index"),
        get("/health", "health"),
        methods(
            "/users",
            &[(Method::GET, "list_users"), (Method::POST, "create_user")],
        ),
        get("/users/{id:int}", "show_user"),
        get("/users/{id:int}/posts/{post_id:int}", "show_post"),
        get("/users/me", "current_user"),
        websocket("/chat/{room}", "chat"),
        mount("/assets", "assets"),
    ])
    .unwrap();
    map
}
