use crate::geodesy::haversine_km;
use crate::models::Coordinates;

/// Emit points every `step_km` of arc length along `path`.
///
/// The first and last points of `path` are always included. Points inside a
/// segment are interpolated linearly in (lat, lng); a long segment may emit
/// several. A sample landing exactly on the final point is not deduplicated.
/// `step_km` must be positive and finite.
pub fn sample(path: &[Coordinates], step_km: f64) -> Vec<Coordinates> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    debug_assert!(step_km > 0.0 && step_km.is_finite());

    let mut out = vec![*first];
    // Arc length walked since the last emitted sample
    let mut acc = 0.0;

    for w in path.windows(2) {
        let (start, end) = (&w[0], &w[1]);
        let seg_len = haversine_km(start, end);
        if seg_len <= 0.0 {
            continue;
        }

        // Arc length already consumed within this segment
        let mut offset = 0.0;
        while acc + (seg_len - offset) >= step_km {
            offset += step_km - acc;
            out.push(start.lerp(end, (offset / seg_len).min(1.0)));
            acc = 0.0;
        }
        acc += seg_len - offset;
    }

    out.push(*last);
    out
}
