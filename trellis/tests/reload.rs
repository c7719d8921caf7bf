//! Hot reload through atomic snapshot publication.

use std::sync::Arc;
use trellis::{
    RawParams, RouteMap, SharedRouteMap,
    testing::{TestHandler, get},
};

mod common;

fn versioned(version: &'static str) -> RouteMap<TestHandler> {
    let mut map = RouteMap::new();
    map.add_routes([
        common::get("/version", version),
        common::get("/items/{id:int}", version),
    ])
    .unwrap();
    map
}

#[test]
fn test_rebuild_publishes_new_routes() {
    let shared = SharedRouteMap::new(versioned("v1"));

    shared
        .rebuild(|map| {
            map.add_route(common::get("/version", "v2"))?;
            map.add_route(common::get("/items/{id:int}", "v2"))
        })
        .unwrap();

    let mut scope = get("/items/3");
    assert_eq!(shared.resolve(&mut scope, &RawParams).unwrap(), TestHandler("v2"));
    assert_eq!(shared.load().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_see_whole_snapshots() {
    let shared = Arc::new(SharedRouteMap::new(versioned("v1")));

    let mut readers = Vec::new();
    for _ in 0..4 {
        let shared = shared.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..2_000 {
                // Both lookups against one snapshot must agree.
                let snapshot = shared.snapshot();
                let mut a = get("/version");
                let mut b = get("/items/7");
                let first = *snapshot.resolve(&mut a, &RawParams).unwrap();
                let second = *snapshot.resolve(&mut b, &RawParams).unwrap();
                assert_eq!(first, second);
                tokio::task::yield_now().await;
            }
        }));
    }

    for i in 0..200 {
        let version = if i % 2 == 0 { "v2" } else { "v1" };
        shared.publish(versioned(version));
        tokio::task::yield_now().await;
    }

    for reader in readers {
        reader.await.unwrap();
    }
}
