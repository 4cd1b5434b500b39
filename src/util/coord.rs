use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Anything that exposes a latitude/longitude pair in degrees.
///
/// Implemented for `(f64, f64)` tuples in (lat, lng) order and for
/// `geo_types::Point<f64>`, where x is longitude and y is latitude.
pub trait Position {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl Position for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lng(&self) -> f64 {
        self.1
    }
}

impl Position for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}

/// A decoded coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Converts to a `geo_types::Point` (x = lng, y = lat).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl Position for GeoPosition {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<GeoPosition> for Point<f64> {
    fn from(position: GeoPosition) -> Self {
        position.to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_trait_tuple() {
        let pair = (53.481, -2.248);
        assert_eq!(pair.lat(), 53.481);
        assert_eq!(pair.lng(), -2.248);
    }

    #[test]
    fn test_position_trait_point() {
        // geo_types points are (x, y) = (lng, lat)
        let point = Point::new(-2.248, 53.481);
        assert_eq!(point.lat(), 53.481);
        assert_eq!(point.lng(), -2.248);
    }

    #[test]
    fn test_geo_position_point_conversion() {
        let position = GeoPosition::new(53.481, -2.248);
        let point: Point<f64> = position.into();
        assert_eq!(point.x(), -2.248);
        assert_eq!(point.y(), 53.481);
        assert_eq!(point.lat(), position.lat);
    }

    #[test]
    fn test_geo_position_serde() {
        let position = GeoPosition::new(-9.622414, -55.898437);
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, r#"{"lat":-9.622414,"lng":-55.898437}"#);

        let back: GeoPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, position);
    }
}
