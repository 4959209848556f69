use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_api_key: String,
    /// Overrides the Directions endpoint (proxy or local test double)
    pub directions_base_url: Option<String>,
    /// Overrides the Places endpoint (proxy or local test double)
    pub places_base_url: Option<String>,
    pub upstream_timeout_secs: u64,
    pub finder: FinderConfig,
}

/// Defaults applied to attraction searches when the caller leaves a knob unset.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    /// Arc-length spacing (km) between nearby-search centers
    pub step_km: f64,

    /// Nearby-search radius (km) around each sample point
    pub radius_km: f64,

    /// Half-width (km) of the penalty-free corridor around the route
    pub corridor_km: f64,

    /// Number of picks returned when the caller does not ask for a count
    pub default_picks: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            step_km: DEFAULT_STEP_KM,
            radius_km: DEFAULT_RADIUS_KM,
            corridor_km: DEFAULT_CORRIDOR_KM,
            default_picks: DEFAULT_PICK_COUNT,
        }
    }
}

impl FinderConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            step_km: env::var("FINDER_STEP_KM")
                .unwrap_or_else(|_| defaults.step_km.to_string())
                .parse()
                .map_err(|_| "Invalid FINDER_STEP_KM")?,

            radius_km: env::var("FINDER_RADIUS_KM")
                .unwrap_or_else(|_| defaults.radius_km.to_string())
                .parse()
                .map_err(|_| "Invalid FINDER_RADIUS_KM")?,

            corridor_km: env::var("FINDER_CORRIDOR_KM")
                .unwrap_or_else(|_| defaults.corridor_km.to_string())
                .parse()
                .map_err(|_| "Invalid FINDER_CORRIDOR_KM")?,

            default_picks: env::var("FINDER_DEFAULT_PICKS")
                .unwrap_or_else(|_| defaults.default_picks.to_string())
                .parse()
                .map_err(|_| "Invalid FINDER_DEFAULT_PICKS")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.step_km.is_finite() && self.step_km > 0.0) {
            return Err("FINDER_STEP_KM must be a positive number".to_string());
        }
        if !(self.radius_km.is_finite() && self.radius_km > 0.0) {
            return Err("FINDER_RADIUS_KM must be a positive number".to_string());
        }
        if !(self.corridor_km.is_finite() && self.corridor_km >= 0.0) {
            return Err("FINDER_CORRIDOR_KM must be zero or positive".to_string());
        }
        Ok(())
    }

    /// Clamp a requested pick count into the supported range, falling back
    /// to `default_picks` when nothing was asked for.
    pub fn pick_count(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_picks)
            .clamp(MIN_PICK_COUNT, MAX_PICK_COUNT)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let google_api_key = env::var("GOOGLE_MAPS_API_KEY")
            .map_err(|_| "GOOGLE_MAPS_API_KEY must be set")?;
        if google_api_key.trim().is_empty() {
            return Err("GOOGLE_MAPS_API_KEY must not be empty".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            google_api_key: google_api_key.trim().to_string(),
            directions_base_url: env::var("GOOGLE_DIRECTIONS_BASE_URL").ok(),
            places_base_url: env::var("GOOGLE_PLACES_BASE_URL").ok(),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid UPSTREAM_TIMEOUT_SECS")?,
            finder: FinderConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
