use axum::Router;
use axum_test::TestServer;
use relay_server::store::{AnyMessageStore, MemoryMessageStore};
use relay_server::{routes, AppState};
use std::sync::Arc;

/// Build a test app over the in-memory store.
pub fn create_test_app() -> Router {
    let state = Arc::new(AppState {
        store: AnyMessageStore::Memory(MemoryMessageStore::new()),
    });

    routes::build_router(state)
}

/// POST a draft through the real route and return the stored record.
pub async fn create_message(server: &TestServer, draft: serde_json::Value) -> serde_json::Value {
    let res = server.post("/api/chats/messages").json(&draft).await;
    res.assert_status_ok();
    res.json()
}
