use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::server::types::ApiErrorType;
use crate::server::AppState;

/// GET /health
pub async fn get_health(State(s): State<Arc<AppState>>) -> Response {
    let body = match s.lookup.store().table() {
        Ok(table) => json!({
            "status": "ok",
            "dataset": "loaded",
            "records": table.len(),
        }),
        Err(e) => json!({
            "status": "ok",
            "dataset": "unavailable",
            "records": 0,
            "error": e.to_string(),
        }),
    };

    (StatusCode::OK, Json(body)).into_response()
}

/// GET /api/dataset/warnings
///
/// Reports identity numbers shared by several rows. Lookups for these return
/// the first row.
pub async fn get_dataset_warnings(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /api/dataset/warnings");

    match s.lookup.store().table() {
        Ok(table) => {
            let duplicates = table.duplicates();
            (
                StatusCode::OK,
                Json(json!({
                    "columns": table.columns(),
                    "duplicate_identities": duplicates,
                })),
            )
                .into_response()
        }
        Err(e) => ApiErrorType::from((
            StatusCode::SERVICE_UNAVAILABLE,
            "Dataset not loaded",
            Some(e.to_string()),
        ))
        .into_response(),
    }
}
