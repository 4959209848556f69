pub mod attractions;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/attractions", post(attractions::find_attractions))
        .route("/health", get(health::health_check))
        .with_state(state)
}
