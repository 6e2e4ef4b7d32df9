//! Built-in world-city table used for mock reverse geocoding.

/// A known city with its coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        latitude,
        longitude,
    }
}

/// Major world cities, grouped roughly by region.
pub const WORLD_CITIES: &[City] = &[
    // Asia
    city("Tokyo", 35.6895, 139.6917),
    city("Delhi", 28.7041, 77.1025),
    city("Shanghai", 31.2304, 121.4737),
    city("Mumbai", 19.0760, 72.8777),
    city("Beijing", 39.9042, 116.4074),
    city("Dhaka", 23.8103, 90.4125),
    city("Karachi", 24.8607, 67.0011),
    city("Kolkata", 22.5726, 88.3639),
    city("Manila", 14.5995, 120.9842),
    city("Seoul", 37.5665, 126.9780),
    city("Jakarta", -6.2088, 106.8456),
    city("Bangkok", 13.7563, 100.5018),
    city("Hyderabad", 17.3850, 78.4867),
    city("Karimnagar", 18.4386, 79.1288),
    // Europe
    city("Istanbul", 41.0082, 28.9784),
    city("Moscow", 55.7558, 37.6173),
    city("London", 51.5074, -0.1278),
    city("Paris", 48.8566, 2.3522),
    city("Madrid", 40.4168, -3.7038),
    city("Berlin", 52.5200, 13.4050),
    city("Rome", 41.9028, 12.4964),
    // Americas
    city("Mexico City", 19.4326, -99.1332),
    city("New York", 40.7128, -74.0060),
    city("Los Angeles", 34.0522, -118.2437),
    city("Chicago", 41.8781, -87.6298),
    city("Toronto", 43.6532, -79.3832),
    city("São Paulo", -23.5505, -46.6333),
    city("Buenos Aires", -34.6037, -58.3816),
    city("Rio de Janeiro", -22.9068, -43.1729),
    city("Bogotá", 4.7110, -74.0721),
    city("Lima", -12.0464, -77.0428),
    // Africa
    city("Lagos", 6.5244, 3.3792),
    city("Cairo", 30.0444, 31.2357),
    city("Kinshasa", -4.4419, 15.2663),
    city("Johannesburg", -26.2041, 28.0473),
    city("Nairobi", -1.2921, 36.8219),
    // Oceania
    city("Sydney", -33.8688, 151.2093),
    city("Melbourne", -37.8136, 144.9631),
    city("Auckland", -36.8485, 174.7633),
];
