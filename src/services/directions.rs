use crate::error::{AppError, Result};
use crate::models::place::round2;
use crate::models::Route;
use crate::polyline;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Source of raw driving directions between two free-text addresses.
#[async_trait]
pub trait DirectionsLookup: Send + Sync {
    async fn directions(&self, origin: &str, destination: &str) -> Result<DirectionsApiResponse>;
}

#[derive(Clone)]
pub struct GoogleDirectionsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleDirectionsClient {
    pub fn with_config(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        GoogleDirectionsClient {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl DirectionsLookup for GoogleDirectionsClient {
    async fn directions(&self, origin: &str, destination: &str) -> Result<DirectionsApiResponse> {
        tracing::debug!(
            origin = %origin,
            destination = %destination,
            "Directions request: {} -> {}",
            origin, destination
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("alternatives", "false"),
                ("departure_time", "now"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamLookup(format!("Directions request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "Directions API HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::RouteUnavailable(format!(
                "Directions HTTP {}: {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            AppError::UpstreamLookup(format!("Failed to parse directions response: {}", e))
        })
    }
}

/// Normalize a raw directions response into a [`Route`].
///
/// Only the first route is used. Distances and durations are summed over
/// all of its legs.
pub fn route_from_directions(response: DirectionsApiResponse) -> Result<Route> {
    if response.status != "OK" {
        let detail = match response.error_message {
            Some(ref msg) => format!("Directions status {}: {}", response.status, msg),
            None => format!("Directions status {}", response.status),
        };
        return Err(AppError::RouteUnavailable(detail));
    }

    let Some(route) = response.routes.into_iter().next() else {
        return Err(AppError::RouteUnavailable(format!(
            "Directions status {}: no routes returned",
            response.status
        )));
    };

    let (Some(first_leg), Some(last_leg)) = (route.legs.first(), route.legs.last()) else {
        return Err(AppError::RouteUnavailable(format!(
            "Directions status {}: route has no legs",
            response.status
        )));
    };

    let encoded_path = route.overview_polyline.points;
    let path = polyline::decode(&encoded_path);
    if path.len() < 2 {
        return Err(AppError::RouteUnavailable(format!(
            "Directions status {}: overview path has {} point(s)",
            response.status,
            path.len()
        )));
    }

    let total_m: f64 = route.legs.iter().map(|l| l.distance.value).sum();
    let total_s: f64 = route.legs.iter().map(|l| l.duration.value).sum();

    let route = Route {
        start_label: first_leg.start_address.clone(),
        end_label: last_leg.end_address.clone(),
        path,
        encoded_path,
        total_km: total_m / 1000.0,
        total_hours: round2(total_s / 3600.0),
    };

    tracing::debug!(
        distance_km = %format!("{:.2}", route.total_km),
        duration_h = route.total_hours,
        path_points = route.path.len(),
        "Directions response: {:.2}km, {}h, {} path points",
        route.total_km, route.total_hours, route.path.len()
    );

    Ok(route)
}

// Google Directions API response types

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsApiResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub overview_polyline: OverviewPolyline,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub distance: TextValue,
    pub duration: TextValue,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Meters for distances, seconds for durations
    pub value: f64,
}
