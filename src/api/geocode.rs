use crate::core::codec::{decode_with_precision, encode};
use crate::core::constants::DEFAULT_PRECISION;
use crate::util::coord::{GeoPosition, Position};
use crate::util::error::Geo62Error;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A coordinate pair together with its encoded form.
///
/// The `lat` and `lng` fields hold the values as they round-trip through
/// the encoding, i.e. rounded to `precision` decimal digits.
///
/// # Example
///
/// ```
/// use geo62::GeoCode;
///
/// # fn main() -> Result<(), geo62::Geo62Error> {
/// let code = GeoCode::from_latlng(-9.622414, -55.898437, 6)?;
/// assert_eq!(code.id, "6Enee_3MxJH");
///
/// let restored = GeoCode::from_encoded(&code.id)?;
/// assert_eq!(restored, code);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCode {
    /// Encoded identifier for this position.
    pub id: String,
    /// Latitude in degrees, rounded to `precision` decimal digits.
    pub lat: f64,
    /// Longitude in degrees, rounded to `precision` decimal digits.
    pub lng: f64,
    /// Decimal digits preserved by the encoding (0-9).
    pub precision: u8,
}

impl GeoCode {
    /// Encodes a latitude/longitude pair at the given precision.
    pub fn from_latlng(lat: f64, lng: f64, precision: u8) -> Result<Self, Geo62Error> {
        let id = encode(lat, lng, precision)?;
        let (position, precision) = decode_with_precision(&id)?;

        Ok(Self {
            id,
            lat: position.lat,
            lng: position.lng,
            precision,
        })
    }

    /// Encodes any [`Position`] at the given precision.
    ///
    /// # Example
    ///
    /// ```
    /// use geo62::GeoCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geo62::Geo62Error> {
    /// // From a (lat, lng) tuple
    /// let code = GeoCode::from_position(&(53.481, -2.248), 6)?;
    /// // From a Point (x = lng, y = lat)
    /// let same = GeoCode::from_position(&Point::new(-2.248, 53.481), 6)?;
    /// assert_eq!(code.id, same.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_position(position: &impl Position, precision: u8) -> Result<Self, Geo62Error> {
        Self::from_latlng(position.lat(), position.lng(), precision)
    }

    /// Reconstructs a `GeoCode` from an encoded identifier.
    pub fn from_encoded(id: &str) -> Result<Self, Geo62Error> {
        let (position, precision) = decode_with_precision(id)?;

        Ok(Self {
            id: id.to_string(),
            lat: position.lat,
            lng: position.lng,
            precision,
        })
    }

    /// Encodes coordinates given as numeric strings.
    ///
    /// An explicit parse step for callers holding textual input, such as
    /// CSV fields or query parameters. A missing precision defaults to
    /// six decimal digits.
    ///
    /// # Example
    ///
    /// ```
    /// use geo62::GeoCode;
    ///
    /// # fn main() -> Result<(), geo62::Geo62Error> {
    /// let code = GeoCode::parse("84.541361", "-174.3756743", Some("7"))?;
    /// assert_eq!(code.id, "7VdgHo-1U0CML");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(lat: &str, lng: &str, precision: Option<&str>) -> Result<Self, Geo62Error> {
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| Geo62Error::InvalidLatitude(lat.to_string()))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| Geo62Error::InvalidLongitude(lng.to_string()))?;
        let precision = match precision {
            None => DEFAULT_PRECISION,
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| Geo62Error::InvalidPrecision(p.to_string()))?,
        };

        Self::from_latlng(lat, lng, precision)
    }

    /// Returns the rounded coordinate pair.
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.lat, self.lng)
    }

    /// Converts the rounded position to a `geo_types::Point` (x = lng, y = lat).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}
