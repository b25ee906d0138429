//! Lookup endpoints: the HTML form and the JSON API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::lookup::{DefenseRecord, LookupError};
use crate::server::render;
use crate::server::types::{status_for, ApiErrorType};
use crate::server::AppState;

/// Query parameters for the form submission.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub cedula: String,
}

fn run_lookup(s: &AppState, raw: &str) -> Result<DefenseRecord, LookupError> {
    let outcome = s.lookup.find_by_identity(raw);
    match &outcome {
        Ok(record) => info!("Lookup matched (schedule={:?})", record.schedule),
        Err(e) if e.is_user_error() => info!("Lookup rejected: {}", e),
        Err(e) => warn!("Lookup failed: {}", e),
    }
    outcome
}

/// GET /
///
/// Renders the empty lookup form.
pub async fn get_index(State(s): State<Arc<AppState>>) -> Html<String> {
    info!("GET /");
    Html(render::index_page(s.lookup.store().load_error()))
}

/// GET /consulta?cedula=...
///
/// Renders the form together with the lookup outcome.
pub async fn get_consulta(
    State(s): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Response {
    info!("GET /consulta");

    let outcome = run_lookup(&s, &params.cedula);
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    let html = render::result_page(&params.cedula, &outcome, s.lookup.store().load_error());

    (status, Html(html)).into_response()
}

/// GET /api/defense/:cedula
///
/// Returns the defense details as JSON.
pub async fn get_defense(
    Path(cedula): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /api/defense/:cedula");

    match run_lookup(&s, &cedula) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => ApiErrorType::from(&e).into_response(),
    }
}
