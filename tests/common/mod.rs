use async_trait::async_trait;
use roadside::config::FinderConfig;
use roadside::geodesy::haversine_km;
use roadside::models::{CandidatePlace, Coordinates};
use roadside::polyline;
use roadside::services::directions::DirectionsApiResponse;
use roadside::services::{AttractionFinder, DirectionsLookup, NearbySearch};
use roadside::{AppError, AppState, Result};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Straight-ish drive east from San Diego towards Phoenix
#[allow(dead_code)]
pub fn test_path() -> Vec<Coordinates> {
    vec![
        Coordinates { lat: 32.71574, lng: -117.16108 },
        Coordinates { lat: 32.80000, lng: -116.50000 },
        Coordinates { lat: 32.75000, lng: -115.50000 },
        Coordinates { lat: 32.70000, lng: -114.60000 },
        Coordinates { lat: 33.00000, lng: -113.50000 },
        Coordinates { lat: 33.44838, lng: -112.07404 },
    ]
}

/// A successful directions payload for `test_path()`
#[allow(dead_code)]
pub fn directions_ok() -> DirectionsApiResponse {
    serde_json::from_value(json!({
        "status": "OK",
        "routes": [{
            "overview_polyline": {"points": polyline::encode(&test_path())},
            "legs": [{
                "distance": {"text": "571 km", "value": 571234},
                "duration": {"text": "5 hours 26 mins", "value": 19560},
                "start_address": "San Diego, CA, USA",
                "end_address": "Phoenix, AZ, USA"
            }]
        }]
    }))
    .expect("valid directions fixture")
}

#[allow(dead_code)]
pub fn directions_status(status: &str) -> DirectionsApiResponse {
    serde_json::from_value(json!({"status": status, "routes": []}))
        .expect("valid directions fixture")
}

pub struct FakeDirections {
    pub response: DirectionsApiResponse,
}

#[async_trait]
impl DirectionsLookup for FakeDirections {
    async fn directions(&self, _origin: &str, _destination: &str) -> Result<DirectionsApiResponse> {
        Ok(self.response.clone())
    }
}

/// Nearby search over a fixed set of places: returns every place within the
/// radius, most reviewed first, capped at `max_results`.
pub struct FakeWorld {
    pub places: Vec<CandidatePlace>,
    pub calls: AtomicUsize,
    /// Fail the lookup with this (0-based) call index
    pub fail_on_call: Option<usize>,
}

impl FakeWorld {
    #[allow(dead_code)]
    pub fn new(places: Vec<CandidatePlace>) -> Self {
        FakeWorld {
            places,
            calls: AtomicUsize::new(0),
            fail_on_call: None,
        }
    }
}

#[async_trait]
impl NearbySearch for FakeWorld {
    async fn search_nearby(
        &self,
        center: &Coordinates,
        radius_m: f64,
        max_results: u32,
    ) -> Result<Vec<CandidatePlace>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_call == Some(call) {
            return Err(AppError::UpstreamLookup(
                "Nearby search HTTP 503 Service Unavailable: backend error".to_string(),
            ));
        }

        let mut hits: Vec<CandidatePlace> = self
            .places
            .iter()
            .filter(|p| haversine_km(center, &p.location) * 1000.0 <= radius_m)
            .cloned()
            .collect();
        hits.sort_by_key(|p| std::cmp::Reverse(p.review_count.unwrap_or(0)));
        hits.truncate(max_results as usize);
        Ok(hits)
    }
}

/// Build a place `offset_km` north of a point on the test path
#[allow(dead_code)]
pub fn place_near(
    id: &str,
    name: &str,
    on_path: Coordinates,
    offset_km: f64,
    rating: f64,
    reviews: u64,
) -> CandidatePlace {
    let location = Coordinates {
        lat: on_path.lat + offset_km / 111.195,
        lng: on_path.lng,
    };
    CandidatePlace {
        id: id.to_string(),
        name: name.to_string(),
        location,
        rating: Some(rating),
        review_count: Some(reviews),
        maps_uri: Some(format!("https://maps.google.com/?q={}", id)),
        primary_type: Some("tourist_attraction".to_string()),
    }
}

/// Seven places near the test path, two of which share a name
#[allow(dead_code)]
pub fn corridor_places() -> Vec<CandidatePlace> {
    let path = test_path();
    vec![
        place_near("p1", "Cuyamaca Rancho State Park", path[1], 2.0, 4.8, 5400),
        place_near("p2", "Desert View Tower", path[2], 1.0, 4.5, 2100),
        place_near("p3", "Imperial Sand Dunes", path[2], 5.0, 4.7, 3900),
        place_near("p4", "Yuma Territorial Prison", path[3], 3.0, 4.4, 4100),
        place_near("p5", "Painted Rock Petroglyph Site", path[4], 4.0, 4.3, 600),
        place_near("p6", "Heard Museum", path[5], 1.5, 4.7, 7200),
        place_near("p7", "heard museum", path[5], 2.0, 4.9, 15),
    ]
}

#[allow(dead_code)]
pub fn finder_with(directions: DirectionsApiResponse, world: Arc<FakeWorld>) -> AttractionFinder {
    AttractionFinder::new(Arc::new(FakeDirections { response: directions }), world)
}

#[allow(dead_code)]
pub fn app_state(directions: DirectionsApiResponse, world: Arc<FakeWorld>) -> Arc<AppState> {
    Arc::new(AppState {
        finder: finder_with(directions, world),
        finder_config: FinderConfig::default(),
    })
}
