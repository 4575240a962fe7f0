use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lon
            ));
        }
        Ok(GeoPoint { lat, lon })
    }

    /// Great-circle distance to another point using the Haversine formula.
    /// Returns distance in kilometers.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Destination point at `distance_km` along `bearing_deg` (degrees
    /// clockwise from true north), using the spherical forward projection.
    pub fn destination(&self, bearing_deg: f64, distance_km: f64) -> GeoPoint {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let bearing = bearing_deg.to_radians();
        let delta = distance_km / EARTH_RADIUS_KM;

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        GeoPoint {
            lat: lat2.to_degrees(),
            lon: normalize_lon(lon2.to_degrees()),
        }
    }
}

/// Wrap a longitude into `[-180, 180)`. Projections that cross the
/// antimeridian otherwise produce longitudes outside the valid range.
pub fn normalize_lon(deg: f64) -> f64 {
    (deg + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geopoint_validation() {
        assert!(GeoPoint::new(48.8566, 2.3522).is_ok());
        assert!(GeoPoint::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(GeoPoint::new(-91.0, 0.0).is_err()); // Invalid lat
        assert!(GeoPoint::new(0.0, 181.0).is_err()); // Invalid lon
        assert!(GeoPoint::new(0.0, -181.0).is_err()); // Invalid lon
    }

    #[test]
    fn test_distance_calculation() {
        let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
        let london = GeoPoint::new(51.5074, -0.1278).unwrap();

        let distance = paris.distance_to(&london);
        // Paris to London is approximately 344 km
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_destination_due_north() {
        let origin = GeoPoint::new(48.8566, 2.3522).unwrap();
        let dest = origin.destination(0.0, 10.0);

        // Due north leaves longitude unchanged
        assert!((dest.lon - origin.lon).abs() < 1e-9);
        assert!(dest.lat > origin.lat);
        // 10 km is roughly 0.09 degrees of latitude
        assert!((dest.lat - origin.lat - 0.0899).abs() < 0.001);
    }

    #[test]
    fn test_destination_roundtrip_distance() {
        let origin = GeoPoint::new(-33.8688, 151.2093).unwrap();

        for bearing in [0.0, 45.0, 137.5, 270.0] {
            let dest = origin.destination(bearing, 4.2);
            let measured = origin.distance_to(&dest);
            let relative_error = (measured - 4.2).abs() / 4.2;
            assert!(
                relative_error < 0.001,
                "bearing {}: measured {}km",
                bearing,
                measured
            );
        }
    }

    #[test]
    fn test_destination_crossing_antimeridian() {
        // Fiji-ish: heading east crosses 180 degrees longitude
        let origin = GeoPoint::new(-17.7, 179.9).unwrap();
        let dest = origin.destination(90.0, 50.0);

        assert!((-180.0..180.0).contains(&dest.lon));
        assert!(dest.lon < 0.0, "should wrap to the western hemisphere");
    }

    #[test]
    fn test_normalize_lon() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(190.0), -170.0);
        assert_eq!(normalize_lon(-190.0), 170.0);
        assert_eq!(normalize_lon(540.0), -180.0);
        assert!((normalize_lon(179.999) - 179.999).abs() < 1e-9);
    }
}
