use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A place returned by a nearby search, keyed by its external identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlace {
    pub id: String,
    pub name: String,
    pub location: Coordinates,
    /// Average user rating, 0-5
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    pub maps_uri: Option<String>,
    pub primary_type: Option<String>,
}

#[cfg(test)]
impl CandidatePlace {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinates) -> Self {
        CandidatePlace {
            id: id.into(),
            name: name.into(),
            location,
            rating: None,
            review_count: None,
            maps_uri: None,
            primary_type: None,
        }
    }

    pub fn with_rating(mut self, rating: f64, review_count: u64) -> Self {
        self.rating = Some(rating);
        self.review_count = Some(review_count);
        self
    }
}

/// A candidate with its distance to the route and composite score.
#[derive(Debug, Clone)]
pub struct ScoredPlace {
    pub place: CandidatePlace,
    pub corridor_distance_km: f64,
    pub score: f64,
}

/// Final ranked output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: Option<f64>,
    pub reviews: u64,
    pub maps_uri: String,
    #[serde(rename = "type")]
    pub place_type: String,
    pub distance_from_route_km: f64,
}

impl From<ScoredPlace> for Pick {
    fn from(scored: ScoredPlace) -> Self {
        let place = scored.place;
        Pick {
            name: place.name,
            lat: place.location.lat,
            lng: place.location.lng,
            rating: place.rating,
            reviews: place.review_count.unwrap_or(0),
            maps_uri: place.maps_uri.unwrap_or_default(),
            place_type: place.primary_type.unwrap_or_default(),
            distance_from_route_km: round2(scored.corridor_distance_km),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
