//! Encoded polyline codec (signed-delta, 5-bit varint, zig-zag, 1e5 precision).
//!
//! Directions responses carry the route overview in this form; the HTML
//! report hands the encoded string straight to the browser.

use crate::constants::POLYLINE_PRECISION;
use crate::models::Coordinates;

const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION_BIT: i64 = 0x20;
const CHAR_OFFSET: i64 = 63;

/// Decode an encoded polyline into an ordered coordinate sequence.
///
/// Input is expected to be well formed. A truncated trailing value ends
/// decoding at the last complete coordinate pair.
pub fn decode(encoded: &str) -> Vec<Coordinates> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let Some(dlat) = next_value(bytes, &mut index) else {
            break;
        };
        let Some(dlng) = next_value(bytes, &mut index) else {
            break;
        };
        lat += dlat;
        lng += dlng;

        coords.push(Coordinates {
            lat: lat as f64 / POLYLINE_PRECISION,
            lng: lng as f64 / POLYLINE_PRECISION,
        });
    }

    coords
}

/// Read one zig-zag varint starting at `index`. `None` when the input ends
/// before the value's final chunk.
fn next_value(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let b = *bytes.get(*index)? as i64 - CHAR_OFFSET;
        *index += 1;
        if shift < 64 {
            result |= (b & CHUNK_MASK) << shift;
        }
        shift += 5;
        if b < CONTINUATION_BIT {
            break;
        }
    }

    Some(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encode a coordinate sequence with 1e5 precision.
pub fn encode(coords: &[Coordinates]) -> String {
    let mut out = String::with_capacity(coords.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for c in coords {
        let lat = (c.lat * POLYLINE_PRECISION).round() as i64;
        let lng = (c.lng * POLYLINE_PRECISION).round() as i64;
        push_value(&mut out, lat - prev_lat);
        push_value(&mut out, lng - prev_lng);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn push_value(out: &mut String, value: i64) {
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };
    while v >= CONTINUATION_BIT {
        out.push((((v & CHUNK_MASK) | CONTINUATION_BIT) + CHAR_OFFSET) as u8 as char);
        v >>= 5;
    }
    out.push((v + CHAR_OFFSET) as u8 as char);
}
