//! Distances between coordinates and route paths.
//!
//! Point-to-segment distance flattens each segment with an equirectangular
//! projection scaled by the cosine of the segment's mean latitude. That is
//! accurate for the segment lengths a directions overview polyline produces
//! (up to tens of km) and degrades near the poles.

use crate::models::Coordinates;
use geo::{Distance, Haversine};

/// Great-circle distance in km on a sphere of mean Earth radius (6371.0088 km).
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    Haversine.distance(a.to_point(), b.to_point()) / 1000.0
}

/// Distance in km from `p` to the closest point of segment `a`-`b`.
pub fn point_to_segment_km(p: &Coordinates, a: &Coordinates, b: &Coordinates) -> f64 {
    let scale_x = ((a.lat + b.lat) / 2.0).to_radians().cos();

    let (ax, ay) = (a.lng.to_radians() * scale_x, a.lat.to_radians());
    let (bx, by) = (b.lng.to_radians() * scale_x, b.lat.to_radians());
    let (px, py) = (p.lng.to_radians() * scale_x, p.lat.to_radians());

    let (vx, vy) = (bx - ax, by - ay);
    let (wx, wy) = (px - ax, py - ay);
    let v2 = vx * vx + vy * vy;
    if v2 == 0.0 {
        return haversine_km(p, a);
    }

    let t = ((wx * vx + wy * vy) / v2).clamp(0.0, 1.0);
    let (proj_x, proj_y) = (ax + t * vx, ay + t * vy);
    let projected = Coordinates {
        lat: proj_y.to_degrees(),
        lng: (proj_x / scale_x).to_degrees(),
    };

    haversine_km(p, &projected)
}

/// Minimum distance in km from `p` to any segment of `path`.
///
/// Returns `f64::INFINITY` for paths with fewer than two points.
pub fn min_distance_to_path_km(p: &Coordinates, path: &[Coordinates]) -> f64 {
    path.windows(2)
        .map(|w| point_to_segment_km(p, &w[0], &w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Total arc length of `path` in km.
pub fn path_length_km(path: &[Coordinates]) -> f64 {
    path.windows(2).map(|w| haversine_km(&w[0], &w[1])).sum()
}
