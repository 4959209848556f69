//! Composite scoring and top-N selection of candidate places.
//!
//! ```text
//! penalty = max(0, corridor_distance_km - max_corridor_km) * 0.2
//! score   = rating + 0.005 * ln(1 + reviews) - penalty
//! ```

use crate::constants::{CORRIDOR_PENALTY_PER_KM, REVIEW_VOLUME_WEIGHT};
use crate::geodesy::min_distance_to_path_km;
use crate::models::{CandidatePlace, Coordinates, Pick, ScoredPlace};
use std::collections::HashSet;

/// Score lost for lying `corridor_distance_km` from the route.
pub fn corridor_penalty(corridor_distance_km: f64, max_corridor_km: f64) -> f64 {
    if corridor_distance_km <= max_corridor_km {
        0.0
    } else {
        (corridor_distance_km - max_corridor_km) * CORRIDOR_PENALTY_PER_KM
    }
}

pub fn score(place: &CandidatePlace, corridor_distance_km: f64, max_corridor_km: f64) -> f64 {
    let rating = place.rating.unwrap_or(0.0);
    let reviews = place.review_count.unwrap_or(0) as f64;
    rating + REVIEW_VOLUME_WEIGHT * reviews.max(0.0).ln_1p()
        - corridor_penalty(corridor_distance_km, max_corridor_km)
}

/// Distance in km from `location` to the route.
///
/// A single-point route is measured against that point, so the result is
/// always finite for a non-empty path.
pub fn corridor_distance_km(location: &Coordinates, path: &[Coordinates]) -> f64 {
    match path {
        [only] => location.distance_to(only),
        _ => min_distance_to_path_km(location, path),
    }
}

/// Measure each candidate against the full route path and score it.
pub fn score_candidates(
    candidates: Vec<CandidatePlace>,
    path: &[Coordinates],
    max_corridor_km: f64,
) -> Vec<ScoredPlace> {
    candidates
        .into_iter()
        .map(|place| {
            let corridor_distance_km = corridor_distance_km(&place.location, path);
            let score = score(&place, corridor_distance_km, max_corridor_km);
            ScoredPlace {
                place,
                corridor_distance_km,
                score,
            }
        })
        .collect()
}

/// Sort by score (descending, stable) and keep the first `want` places with
/// distinct case-insensitive names.
pub fn select_top(mut scored: Vec<ScoredPlace>, want: usize) -> Vec<Pick> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen_names = HashSet::new();
    let mut picks = Vec::with_capacity(want.min(scored.len()));

    for candidate in scored {
        if picks.len() >= want {
            break;
        }
        if !seen_names.insert(candidate.place.name.to_lowercase()) {
            continue;
        }
        picks.push(Pick::from(candidate));
    }

    picks
}

/// Score, sort, dedupe by name and truncate in one pass.
pub fn rank(
    candidates: Vec<CandidatePlace>,
    path: &[Coordinates],
    max_corridor_km: f64,
    want: usize,
) -> Vec<Pick> {
    select_top(score_candidates(candidates, path, max_corridor_km), want)
}
