use std::sync::Arc;

use relay_server::config::Config;
use relay_server::store::{AnyMessageStore, MongoMessageStore};
use relay_server::{db, routes, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_server=info".into()),
        )
        .init();

    let config = Config::from_env();

    // Initialize database
    let database = db::connect(&config.mongo_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let state = Arc::new(AppState {
        store: AnyMessageStore::Mongo(MongoMessageStore::new(&database)),
    });

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");

    tracing::info!("Relay server running on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
