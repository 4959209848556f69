//! Stable application-wide constants.
//!
//! Values here are structural invariants, scoring coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Per-request tuning knobs (sampling step, search radius, corridor width)
//! live in [`FinderConfig`](crate::config::FinderConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";
/// Default per-request timeout for calls to Google APIs.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

// --- Upstream endpoints ---

pub const GOOGLE_DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const GOOGLE_PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";

// --- Geodesy ---

/// Mean Earth radius (IUGG) in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;
/// Scale between integer polyline units and degrees.
pub const POLYLINE_PRECISION: f64 = 1e5;

// --- Nearby search ---

/// Place types requested from every nearby search.
pub const ATTRACTION_PLACE_TYPES: &[&str] = &["tourist_attraction", "park", "museum", "art_gallery"];
/// Upstream cap on results per nearby search.
pub const NEARBY_SEARCH_MAX_RESULTS: u32 = 20;
pub const NEARBY_SEARCH_FIELD_MASK: &str = "places.id,places.name,places.displayName,places.location,places.rating,places.userRatingCount,places.googleMapsUri,places.primaryType";

// --- Scoring coefficients ---

/// Score lost per km beyond the corridor edge.
pub const CORRIDOR_PENALTY_PER_KM: f64 = 0.2;
/// Weight of `ln(1 + review_count)` in the composite score.
pub const REVIEW_VOLUME_WEIGHT: f64 = 0.005;

// --- Finder defaults (used when FINDER_* env vars are absent) ---

pub const DEFAULT_STEP_KM: f64 = 60.0;
pub const DEFAULT_RADIUS_KM: f64 = 12.0;
pub const DEFAULT_CORRIDOR_KM: f64 = 20.0;
pub const DEFAULT_PICK_COUNT: usize = 8;

/// Requested pick counts are clamped into `MIN_PICK_COUNT..=MAX_PICK_COUNT`
/// by the HTTP and CLI surfaces.
pub const MIN_PICK_COUNT: usize = 5;
pub const MAX_PICK_COUNT: usize = 10;
