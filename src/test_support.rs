//! Helpers for tests that need a real HTTP peer.

use axum::Router;

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn spawn_server(router: Router) -> String {
    spawn_server_with(|_| router).await
}

/// Like [`spawn_server`], for routers that need to know their own base URL.
pub(crate) async fn spawn_server_with(build: impl FnOnce(String) -> Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let router = build(base.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    base
}

/// Base URL of a local port with nothing listening on it.
pub(crate) async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
