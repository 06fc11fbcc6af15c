use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::event::EventDistributor;
use crate::keyspace::{AdminError, KeySpaceAdmin};
use crate::store::KeyValueStore;

/// Shared application state containing all dependencies
///
/// Both components hold the same injected store handle.
#[derive(Clone)]
pub struct AppState {
    pub keyspace: KeySpaceAdmin,
    pub distributor: EventDistributor,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            keyspace: KeySpaceAdmin::new(Arc::clone(&store)),
            distributor: EventDistributor::new(store),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Administrative operation failed: {0}")]
    Admin(#[from] AdminError),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Admin(e) => {
                error!(category = e.category(), error = %e, "Administrative command failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": e.to_string(),
                        "details": e.details(),
                        "category": e.category(),
                    }),
                )
            }
            AppError::StoreError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": format!("Store error: {}", msg),
                }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": msg }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
