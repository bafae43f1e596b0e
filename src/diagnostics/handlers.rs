use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    diagnostics::{
        dto::DiagnosticsReport,
        services::{build_report, probe_database},
    },
    state::AppState,
};

pub fn diagnostics_routes() -> Router<AppState> {
    Router::new().route("/test", get(test_database))
}

#[instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let outcome = probe_database(&state.database).await;
    let report = build_report(outcome, &state.config);
    info!(database = %report.database, "diagnostics served");
    Json(report)
}
