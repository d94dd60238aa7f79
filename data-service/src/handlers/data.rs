use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use serde_json::{json, Value};
use service_core::error::AppError;

/// Return every stored document as a JSON array, with the store-assigned
/// `_id` projected out so callers only ever see what they inserted.
pub async fn list_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let find_options = FindOptions::builder()
        .projection(doc! { "_id": 0 })
        .build();

    let mut cursor = state
        .db
        .data()
        .find(doc! {}, find_options)
        .await
        .map_err(AppError::from)?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await.map_err(AppError::from)? {
        documents.push(document);
    }

    metrics::counter!("data_lists_total").increment(1);

    Ok((StatusCode::OK, Json(documents)))
}

/// Insert one caller-supplied JSON object. The body must be a single JSON
/// mapping; anything else is rejected before the store is touched.
pub async fn insert_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("No JSON supplied")))?;

    if !payload.is_object() {
        return Err(AppError::BadRequest(anyhow::anyhow!("No JSON supplied")));
    }

    state
        .db
        .data()
        .insert_one(&payload, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert document: {}", e);
            AppError::from(e)
        })?;

    metrics::counter!("data_inserts_total").increment(1);

    Ok((StatusCode::CREATED, Json(json!({ "status": "Data inserted" }))))
}
