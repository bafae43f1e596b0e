pub mod dto;
pub mod handlers;
pub mod services;
mod validation;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::calculate_routes())
}
