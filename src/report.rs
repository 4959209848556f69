//! Standalone HTML report for a route and its picks.

use crate::error::{AppError, Result};
use crate::models::{Pick, Route};

const STYLE: &str = "body{margin:0;font-family:system-ui,Segoe UI,Roboto,Helvetica,Arial}\
#map{height:70vh;width:100%}\
.wrap{max-width:1000px;margin:12px auto;padding:0 12px}\
h1{font-size:20px;margin:12px 0}\
.card{border:1px solid #e6e8ee;border-radius:12px;padding:10px;margin:8px 0}\
.muted{color:#6b7280;font-size:14px}";

// Draws the decoded route and numbered markers. Expects `polylineEncoded`
// and `attractions` to be defined before it runs.
const MAP_SCRIPT: &str = r#"
function decodePolyline(str) {
  let index = 0, lat = 0, lng = 0, coords = [];
  while (index < str.length) {
    let b, shift = 0, result = 0;
    do { b = str.charCodeAt(index++) - 63; result |= (b & 0x1f) << shift; shift += 5; } while (b >= 0x20);
    lat += (result & 1) ? ~(result >> 1) : (result >> 1);
    shift = 0; result = 0;
    do { b = str.charCodeAt(index++) - 63; result |= (b & 0x1f) << shift; shift += 5; } while (b >= 0x20);
    lng += (result & 1) ? ~(result >> 1) : (result >> 1);
    coords.push({lat: lat / 1e5, lng: lng / 1e5});
  }
  return coords;
}
function esc(s) {
  return String(s ?? '').replace(/[&<>"']/g, c => ({'&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'})[c]);
}
function init() {
  const map = new google.maps.Map(document.getElementById('map'), {
    center: {lat: 39.5, lng: -98.35}, zoom: 5, mapTypeControl: false
  });
  const pts = decodePolyline(polylineEncoded);
  new google.maps.Polyline({path: pts, map, strokeWeight: 6});
  const bounds = new google.maps.LatLngBounds();
  pts.forEach(p => bounds.extend(p));
  attractions.forEach(a => bounds.extend({lat: a.lat, lng: a.lng}));
  map.fitBounds(bounds);
  attractions.forEach((a, i) => {
    const m = new google.maps.Marker({position: {lat: a.lat, lng: a.lng}, map, label: String(i + 1), title: a.name});
    const html = `<div><strong>${i + 1}. ${esc(a.name)}</strong><br>
      Rating: ${a.rating ?? '-'} (${a.reviews ?? 0} reviews)<br>
      ~${a.distanceFromRouteKm} km off route<br>
      <a href="${esc(a.mapsUri)}" target="_blank" rel="noopener">Open in Google Maps</a></div>`;
    const info = new google.maps.InfoWindow({content: html});
    m.addListener('click', () => info.open({map, anchor: m}));
  });
}
window.init = init;
"#;

/// Render a self-contained HTML page for `route` and `picks`.
///
/// An interactive map is embedded only when `browser_key` is provided.
pub fn render_html(route: &Route, picks: &[Pick], browser_key: Option<&str>) -> Result<String> {
    let picks_json = serde_json::to_string(picks)
        .map_err(|e| AppError::Internal(format!("Failed to serialize picks: {}", e)))?;
    let poly_json = serde_json::to_string(&route.encoded_path)
        .map_err(|e| AppError::Internal(format!("Failed to serialize polyline: {}", e)))?;

    let mut html = String::with_capacity(4096);
    html.push_str(&format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Route + Attractions</title>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <style>{}</style>\n</head>\n<body>\n",
        STYLE
    ));
    if browser_key.is_some() {
        html.push_str("<div id=\"map\"></div>\n");
    }
    html.push_str(&format!(
        "<div class=\"wrap\">\n<h1>Top attractions along: {} &rarr; {}</h1>\n\
         <div class=\"muted\">~{} km &bull; ~{} hours &bull; showing {} picks</div>\n",
        escape_html(&route.start_label),
        escape_html(&route.end_label),
        route.total_km.round(),
        route.total_hours,
        picks.len()
    ));
    html.push_str(&render_cards(picks));
    html.push_str("\n</div>\n");

    // `</` is escaped so embedded strings cannot close the script element
    html.push_str(&format!(
        "<script>\nconst polylineEncoded = {};\nconst attractions = {};\n</script>\n",
        poly_json.replace("</", "<\\/"),
        picks_json.replace("</", "<\\/")
    ));
    if let Some(key) = browser_key {
        html.push_str(&format!(
            "<script>{}</script>\n\
             <script src=\"https://maps.googleapis.com/maps/api/js?key={}&callback=init\" async defer></script>\n",
            MAP_SCRIPT,
            escape_html(key)
        ));
    }
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

/// One card per pick, numbered from 1.
pub fn render_cards(picks: &[Pick]) -> String {
    picks
        .iter()
        .enumerate()
        .map(|(i, pick)| {
            format!(
                "<div class=\"card\"><strong>{}. {}</strong><br>\
                 Rating: {} ({} reviews) &bull; ~{} km off route<br>\
                 <a href=\"{}\" target=\"_blank\" rel=\"noopener\">Open in Google Maps</a></div>",
                i + 1,
                escape_html(&pick.name),
                format_rating(pick.rating),
                pick.reviews,
                pick.distance_from_route_km,
                escape_html(&pick.maps_uri)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| r.to_string())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
