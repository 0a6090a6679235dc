use mongodb::{Client, Database};

pub async fn connect(uri: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;

    // The driver falls back to `test` when the URI names no database.
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database("test"));

    // Client construction is lazy; ping so a dead endpoint fails startup
    // instead of the first request.
    db.run_command(bson::doc! { "ping": 1 }, None).await?;

    tracing::info!("Connected to MongoDB");
    Ok(db)
}
