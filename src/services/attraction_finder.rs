use crate::config::Config;
use crate::constants::{GOOGLE_DIRECTIONS_BASE_URL, GOOGLE_PLACES_BASE_URL};
use crate::error::{AppError, Result};
use crate::geodesy::path_length_km;
use crate::models::{Coordinates, Pick, Route};
use crate::services::directions::{route_from_directions, DirectionsLookup, GoogleDirectionsClient};
use crate::services::place_aggregator::{NearbySearch, PlaceAggregator};
use crate::services::places::GooglePlacesClient;
use crate::services::{ranking, route_sampler};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Entry points of the corridor search: route lookup and ranked attractions.
#[derive(Clone)]
pub struct AttractionFinder {
    directions: Arc<dyn DirectionsLookup>,
    aggregator: PlaceAggregator,
}

impl AttractionFinder {
    pub fn new(directions: Arc<dyn DirectionsLookup>, nearby: Arc<dyn NearbySearch>) -> Self {
        AttractionFinder {
            directions,
            aggregator: PlaceAggregator::new(nearby),
        }
    }

    /// Finder backed by the Google Directions and Places APIs.
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.upstream_timeout_secs);

        let directions_url = config
            .directions_base_url
            .clone()
            .unwrap_or_else(|| GOOGLE_DIRECTIONS_BASE_URL.to_string());
        let places_url = config
            .places_base_url
            .clone()
            .unwrap_or_else(|| GOOGLE_PLACES_BASE_URL.to_string());
        tracing::debug!("Directions endpoint: {}, places endpoint: {}", directions_url, places_url);

        let directions =
            GoogleDirectionsClient::with_config(config.google_api_key.clone(), directions_url, timeout);
        let places = GooglePlacesClient::with_config(config.google_api_key.clone(), places_url, timeout);

        Self::new(Arc::new(directions), Arc::new(places))
    }

    /// Look up the best driving route between two free-text addresses.
    #[instrument(skip(self))]
    pub async fn compute_route(&self, origin: &str, destination: &str) -> Result<Route> {
        let response = self.directions.directions(origin, destination).await?;
        let route = route_from_directions(response)?;

        tracing::info!(
            "Route {} -> {}: {:.1}km, {}h, {} path points",
            route.start_label,
            route.end_label,
            route.total_km,
            route.total_hours,
            route.path.len()
        );

        Ok(route)
    }

    /// Find up to `want` attractions along `path`.
    ///
    /// Searches around points sampled every `step_km`, then ranks every
    /// distinct place against the full path. An empty candidate set yields an
    /// empty list, not an error.
    #[instrument(skip(self, path), fields(path_points = path.len()))]
    pub async fn find_attractions(
        &self,
        path: &[Coordinates],
        step_km: f64,
        radius_km: f64,
        want: usize,
        max_corridor_km: f64,
    ) -> Result<Vec<Pick>> {
        if !(step_km.is_finite() && step_km > 0.0) {
            return Err(AppError::InvalidRequest(format!(
                "step_km must be greater than 0, got {}",
                step_km
            )));
        }
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(AppError::InvalidRequest(format!(
                "radius_km must be greater than 0, got {}",
                radius_km
            )));
        }
        if max_corridor_km.is_nan() || max_corridor_km < 0.0 {
            return Err(AppError::InvalidRequest(format!(
                "corridor_km must be zero or positive, got {}",
                max_corridor_km
            )));
        }

        let samples = route_sampler::sample(path, step_km);
        tracing::debug!(
            "Sampled {} search centers every {}km over {:.1}km of path",
            samples.len(),
            step_km,
            path_length_km(path)
        );

        let candidates = self.aggregator.collect(&samples, radius_km).await?;
        let candidate_count = candidates.len();

        let picks = ranking::rank(candidates, path, max_corridor_km, want);

        tracing::info!(
            samples = samples.len(),
            candidates = candidate_count,
            picks = picks.len(),
            "Ranked {} distinct places into {} picks",
            candidate_count,
            picks.len()
        );

        Ok(picks)
    }
}
