use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{CandidatePlace, Coordinates};
use crate::services::place_aggregator::NearbySearch;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the Places API (New) `places:searchNearby` endpoint.
#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GooglePlacesClient {
    pub fn with_config(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        GooglePlacesClient {
            client,
            api_key,
            base_url,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/places:searchNearby", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl NearbySearch for GooglePlacesClient {
    async fn search_nearby(
        &self,
        center: &Coordinates,
        radius_m: f64,
        max_results: u32,
    ) -> Result<Vec<CandidatePlace>> {
        let body = SearchNearbyRequest::new(center, radius_m, max_results);

        let response = self
            .client
            .post(self.search_url())
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", NEARBY_SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::UpstreamLookup(format!("Nearby search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                lat = center.lat,
                lng = center.lng,
                "Places API HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::UpstreamLookup(format!(
                "Nearby search HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: SearchNearbyResponse = response.json().await.map_err(|e| {
            AppError::UpstreamLookup(format!("Failed to parse nearby search response: {}", e))
        })?;

        Ok(parsed
            .places
            .into_iter()
            .filter_map(RawPlace::into_candidate)
            .collect())
    }
}

// Places API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchNearbyRequest {
    included_types: Vec<&'static str>,
    max_result_count: u32,
    rank_preference: &'static str,
    location_restriction: LocationRestriction,
}

impl SearchNearbyRequest {
    fn new(center: &Coordinates, radius_m: f64, max_results: u32) -> Self {
        SearchNearbyRequest {
            included_types: ATTRACTION_PLACE_TYPES.to_vec(),
            max_result_count: max_results,
            rank_preference: "POPULARITY",
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: LatLng {
                        latitude: center.lat,
                        longitude: center.lng,
                    },
                    radius: radius_m,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Debug, Serialize)]
struct Circle {
    center: LatLng,
    radius: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct SearchNearbyResponse {
    #[serde(default)]
    places: Vec<RawPlace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlace {
    id: Option<String>,
    /// Resource name (`places/<id>`), used when `id` is absent
    name: Option<String>,
    display_name: Option<LocalizedText>,
    location: Option<LatLng>,
    rating: Option<f64>,
    user_rating_count: Option<u64>,
    google_maps_uri: Option<String>,
    primary_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    #[serde(default)]
    text: String,
}

impl RawPlace {
    fn into_candidate(self) -> Option<CandidatePlace> {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        let Some(id) = non_empty(self.id).or_else(|| non_empty(self.name)) else {
            tracing::warn!("Skipping nearby-search result without id or resource name");
            return None;
        };
        let Some(location) = self.location else {
            tracing::warn!("Skipping place {} without a location", id);
            return None;
        };
        let location = match Coordinates::new(location.latitude, location.longitude) {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("Skipping place {}: {}", id, e);
                return None;
            }
        };

        Some(CandidatePlace {
            id,
            name: self.display_name.map(|d| d.text).unwrap_or_default(),
            location,
            rating: self.rating,
            review_count: self.user_rating_count,
            maps_uri: self.google_maps_uri,
            primary_type: self.primary_type,
        })
    }
}
