use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
}

pub async fn read_root() -> Json<MessageResponse> {
    // Existing clients match on this exact text.
    Json(MessageResponse {
        message: "Hello from FastAPI Backend!",
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}
