use axum::{routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    calories::{
        dto::{CalculationRequest, CalculationResponse},
        services::{calculate, ensure_representable},
    },
    error::ApiError,
    extractors::ValidatedJson,
    state::AppState,
};

pub fn calculate_routes() -> Router<AppState> {
    Router::new().route("/api/calculate", post(calculate_calories))
}

#[instrument(skip_all, fields(items = payload.items.len()))]
pub async fn calculate_calories(
    ValidatedJson(payload): ValidatedJson<CalculationRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let response = calculate(&payload.items);
    ensure_representable(&response)?;
    info!(
        items = response.items.len(),
        total_calories = response.total_calories,
        "calories calculated"
    );
    Ok(Json(response))
}
