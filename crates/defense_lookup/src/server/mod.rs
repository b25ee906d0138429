use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::lookup::LookupService;
use crate::server::endpoints::{defense, status};

mod endpoints;
mod render;
mod types;

pub use types::{ApiError, ApiErrorType};

/// Shared state for every handler. Read-only after startup.
pub struct AppState {
    pub lookup: LookupService,
}

impl AppState {
    pub fn new(lookup: LookupService) -> Self {
        Self { lookup }
    }
}

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/defense/:cedula", get(defense::get_defense))
        .route("/dataset/warnings", get(status::get_dataset_warnings));

    Router::new()
        .route("/", get(defense::get_index))
        .route("/consulta", get(defense::get_consulta))
        .route("/health", get(status::get_health))
        .nest("/api", api_router)
        .with_state(app_state)
}
