use num_traits::Float;


/// Mean Earth diameter in kilometers, used by the haversine formula
const EARTH_DIAMETER_KM: f64 = 12742.0;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Haversine great-circle distance in kilometers
/// https://en.wikipedia.org/wiki/Haversine_formula
/// Coordinates are interpreted as degrees with x = latitude, y = longitude
pub fn haversine(p1: &Point, p2: &Point) -> f64 {

    let lat1 = p1.x.to_radians();
    let lat2 = p2.x.to_radians();
    let d_lat = (p2.x - p1.x).to_radians();
    let d_lon = (p2.y - p1.y).to_radians();

    let hav = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // 2R * asin(sqrt(hav))
    EARTH_DIAMETER_KM * hav.sqrt().asin()
}


/// 2D Point
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}


/// How distances between vertex coordinates are measured
/// The same metric must back both edge weights and the search heuristic
/// for the heuristic to stay admissible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Euclidean distance, coordinates on a flat plane
    Planar,
    /// Great-circle distance in kilometers, coordinates as (latitude, longitude) degrees
    Haversine,
}

impl DistanceMetric {

    /// Distance between two points under this metric, always non-negative
    pub fn distance(&self, p1: &Point, p2: &Point) -> f64 {
        match self {
            DistanceMetric::Planar => euclidean(p1.x, p1.y, p2.x, p2.y),
            DistanceMetric::Haversine => haversine(p1, p2),
        }
    }
}
