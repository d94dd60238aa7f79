use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

/// The single collection this service manages.
const DATA_COLLECTION: &str = "data";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Build the client from a resolved URI. The driver connects lazily, so
    /// an unreachable host only surfaces on first use; a malformed URI fails
    /// here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Documents are caller-supplied JSON with no schema, so the collection
    /// is typed by the plain JSON value.
    pub fn data(&self) -> Collection<serde_json::Value> {
        self.db.collection(DATA_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
