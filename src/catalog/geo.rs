use crate::models::Coordinates;

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A reference city the catalog can measure distances from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub coordinates: Coordinates,
}

const fn city(name: &'static str, lat: f64, lng: f64) -> City {
    City {
        name,
        coordinates: Coordinates::new(lat, lng),
    }
}

/// Main Portuguese cities
pub const PORTUGUESE_CITIES: &[City] = &[
    city("Lisboa", 38.7223, -9.1393),
    city("Porto", 41.1579, -8.6291),
    city("Braga", 41.5454, -8.4265),
    city("Coimbra", 40.2033, -8.4103),
    city("Faro", 37.0194, -7.9322),
    city("Setúbal", 38.5244, -8.8882),
    city("Aveiro", 40.6443, -8.6455),
    city("Évora", 38.5667, -7.9),
    city("Viseu", 40.6566, -7.9122),
    city("Leiria", 39.7437, -8.8071),
    city("Guimarães", 41.4416, -8.2918),
    city("Funchal", 32.6669, -16.9241),
    city("Ponta Delgada", 37.7412, -25.6756),
];

/// Look up a reference city by exact name
pub fn find_city(name: &str) -> Option<&'static City> {
    PORTUGUESE_CITIES.iter().find(|c| c.name == name)
}

/// Haversine distance between two points, rounded to the nearest kilometre
pub fn distance_km(from: Coordinates, to: Coordinates) -> u32 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u32
}
