use crate::config::FinderConfig;
use crate::models::{Coordinates, Pick};
use serde::{Deserialize, Serialize};

/// A normalized driving route between two addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Decoded overview path, at least two points
    pub path: Vec<Coordinates>,
    pub encoded_path: String,
    pub start_label: String,
    pub end_label: String,
    pub total_km: f64,
    /// Total duration in hours, rounded to 2 decimals
    pub total_hours: f64,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct AttractionsRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    /// Requested pick count, clamped to 5..=10
    #[serde(default)]
    pub n: Option<usize>,
    #[serde(default)]
    pub step_km: Option<f64>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub corridor_km: Option<f64>,
}

/// Search parameters after defaults and clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub want: usize,
    pub step_km: f64,
    pub radius_km: f64,
    pub corridor_km: f64,
}

impl AttractionsRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err("Missing 'origin' or 'destination'".to_string());
        }
        if let Some(step) = self.step_km {
            if !(step.is_finite() && step > 0.0) {
                return Err("step_km must be greater than 0".to_string());
            }
        }
        if let Some(radius) = self.radius_km {
            if !(radius.is_finite() && radius > 0.0) {
                return Err("radius_km must be greater than 0".to_string());
            }
        }
        if let Some(corridor) = self.corridor_km {
            if !(corridor.is_finite() && corridor >= 0.0) {
                return Err("corridor_km must be zero or positive".to_string());
            }
        }
        Ok(())
    }

    pub fn params(&self, defaults: &FinderConfig) -> SearchParams {
        SearchParams {
            want: defaults.pick_count(self.n),
            step_km: self.step_km.unwrap_or(defaults.step_km),
            radius_km: self.radius_km.unwrap_or(defaults.radius_km),
            corridor_km: self.corridor_km.unwrap_or(defaults.corridor_km),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    pub start: String,
    pub end: String,
    pub total_km: f64,
    pub total_hours: f64,
    pub overview_poly_encoded: String,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        RouteSummary {
            start: route.start_label.clone(),
            end: route.end_label.clone(),
            total_km: route.total_km,
            total_hours: route.total_hours,
            overview_poly_encoded: route.encoded_path.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttractionsResponse {
    pub route: RouteSummary,
    pub picks: Vec<Pick>,
}
