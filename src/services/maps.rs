//! Map-link helpers: decoding provider path encodings and building external
//! Google Maps links for a planned route. Display-only; nothing here feeds
//! back into candidate generation or ranking.

use crate::models::GeoPoint;

const GOOGLE_MAPS_DIR_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Precision of Google encoded polylines (5 decimal places).
const POLYLINE_PRECISION: u32 = 5;

/// Decode an encoded path into coordinates. Malformed input yields an empty
/// path rather than an error.
pub fn decode_path(path_encoding: &str) -> Vec<GeoPoint> {
    let line: geo_types::LineString<f64> =
        match polyline::decode_polyline(path_encoding, POLYLINE_PRECISION) {
            Ok(line) => line,
            Err(_) => return Vec::new(),
        };

    // Decoded coords are x = longitude, y = latitude
    line.0
        .into_iter()
        .filter_map(|coord| GeoPoint::new(coord.y, coord.x).ok())
        .collect()
}

/// Evenly spaced waypoints along a path, always ending at the final point.
/// Returns the whole path when it is already short enough.
pub fn sample_waypoints(path: &[GeoPoint], count: usize) -> Vec<GeoPoint> {
    if path.is_empty() || count == 0 {
        return Vec::new();
    }
    if path.len() <= count {
        return path.to_vec();
    }
    if count == 1 {
        return vec![path[path.len() - 1]];
    }

    let step = path.len() / (count - 1);
    let mut waypoints: Vec<GeoPoint> = (0..count - 1).map(|i| path[i * step]).collect();
    waypoints.push(path[path.len() - 1]);
    waypoints
}

/// Google Maps directions link for an origin→destination walk with optional
/// intermediate waypoints.
pub fn directions_url(origin: &GeoPoint, destination: &GeoPoint, waypoints: &[GeoPoint]) -> String {
    let mut url = format!(
        "{}&origin={},{}&destination={},{}",
        GOOGLE_MAPS_DIR_BASE_URL, origin.lat, origin.lon, destination.lat, destination.lon
    );

    if !waypoints.is_empty() {
        let joined = waypoints
            .iter()
            .map(|p| format!("{},{}", p.lat, p.lon))
            .collect::<Vec<_>>()
            .join("|");
        url.push_str("&waypoints=");
        url.push_str(&urlencoding::encode(&joined));
    }

    url.push_str("&travelmode=walking");
    url
}

/// Link for one route alternative. The destination comes from the decoded
/// path's endpoint; candidate generation only biases toward out-and-back
/// geometry, it does not guarantee the path ends at the origin.
pub fn route_link(origin: &GeoPoint, path_encoding: &str, waypoint_count: usize) -> String {
    let path = decode_path(path_encoding);
    let destination = path.last().copied().unwrap_or(*origin);

    let interior = if path.len() > 2 {
        sample_waypoints(&path[1..path.len() - 1], waypoint_count)
    } else {
        Vec::new()
    };

    directions_url(origin, &destination, &interior)
}
