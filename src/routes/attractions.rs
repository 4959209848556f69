use crate::error::{AppError, Result};
use crate::models::{AttractionsRequest, AttractionsResponse, RouteSummary};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /attractions
/// Compute the driving route and return the top attractions along it
pub async fn find_attractions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AttractionsRequest>,
) -> Result<Json<AttractionsResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;
    let params = request.params(&state.finder_config);

    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        n = params.want,
        step_km = params.step_km,
        radius_km = params.radius_km,
        corridor_km = params.corridor_km,
        "Attractions request: {} -> {}, n={}, step={}km, radius={}km, corridor={}km",
        request.origin, request.destination, params.want,
        params.step_km, params.radius_km, params.corridor_km
    );

    let route = state
        .finder
        .compute_route(&request.origin, &request.destination)
        .await?;

    let picks = state
        .finder
        .find_attractions(
            &route.path,
            params.step_km,
            params.radius_km,
            params.want,
            params.corridor_km,
        )
        .await?;

    Ok(Json(AttractionsResponse {
        route: RouteSummary::from(&route),
        picks,
    }))
}
