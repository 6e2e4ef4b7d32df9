//! Place resolver — maps raw coordinates to a stable human-readable label.
//!
//! Resolution is a nearest-city lookup over a built-in table of major world
//! cities. Beyond a 500 km cutoff the nearest entry is likely not where the
//! user actually is, so the resolver falls back to a raw coordinate string
//! rather than produce a false match. Pure and deterministic.

pub mod cities;

pub use cities::{City, WORLD_CITIES};

/// Maximum distance (km) at which a city is accepted as the user's location.
pub const MAX_CITY_DISTANCE_KM: f64 = 500.0;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers (haversine).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Resolve coordinates to the nearest known city name, or a `"lat, lon"`
/// string when no city lies within [`MAX_CITY_DISTANCE_KM`].
pub fn resolve(latitude: f64, longitude: f64) -> String {
    let mut nearest: Option<&City> = None;
    let mut min_distance = f64::INFINITY;

    for city in WORLD_CITIES {
        let distance = haversine_km(latitude, longitude, city.latitude, city.longitude);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(city);
        }
    }

    match nearest {
        Some(city) if min_distance < MAX_CITY_DISTANCE_KM => city.name.to_string(),
        _ => format!("{latitude:.2}, {longitude:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_city_coordinates_resolve_to_city() {
        assert_eq!(resolve(51.5074, -0.1278), "London");
        assert_eq!(resolve(17.3850, 78.4867), "Hyderabad");
    }

    #[test]
    fn nearby_coordinates_resolve_to_nearest_city() {
        // Cambridge, UK — ~80 km from London.
        assert_eq!(resolve(52.2053, 0.1218), "London");
    }

    #[test]
    fn remote_coordinates_fall_back_to_raw_string() {
        // Middle of the South Pacific.
        assert_eq!(resolve(-48.87, -123.39), "-48.87, -123.39");
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve(35.0, 139.0);
        let b = resolve(35.0, 139.0);
        assert_eq!(a, b);
    }

    #[test]
    fn haversine_known_distance() {
        // London to Paris is roughly 344 km.
        let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d - 344.0).abs() < 10.0, "got {d}");
    }
}
