//! # geo62
//!
//! A compact, reversible base-62 textual encoding for geographic
//! coordinate pairs. A pair is quantized to a fixed decimal precision,
//! each magnitude is base-62 encoded, and the two are joined by a single
//! delimiter character that carries the sign quadrant:
//! `<precision digit><|lat|><delimiter><|lng|>`.
//!
//! There are three main entry points.
//!
//! ### 1. `encode` / `decode` - Plain Functions
//!
//! ```
//! # fn main() -> Result<(), geo62::Geo62Error> {
//! let encoded = geo62::encode(-9.622414, -55.898437, 6)?;
//! assert_eq!(encoded, "6Enee_3MxJH");
//!
//! let position = geo62::decode(&encoded)?;
//! assert_eq!((position.lat, position.lng), (-9.622414, -55.898437));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoCode` - Rich Value Type
//!
//! ```
//! use geo62::GeoCode;
//! use geo_types::Point;
//!
//! # fn main() -> Result<(), geo62::Geo62Error> {
//! let code = GeoCode::from_position(&Point::new(151.204834, -33.870416), 6)?;
//! assert_eq!(code.id, "62i7f2~aerhE");
//!
//! let restored = GeoCode::from_encoded(&code.id)?;
//! assert_eq!(restored.position(), code.position());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToGeocode` - CSV File Conversion
//!
//! Convert CSV files with latitude/longitude columns to geocoded CSVs:
//!
//! ```no_run
//! use geo62::{CsvGeocodeConfig, CsvToGeocode, PositionFormat};
//!
//! let config = CsvGeocodeConfig::new("Latitude", "Longitude", 6)
//!     .exclude(vec!["Elevation".into()])
//!     .with_position(PositionFormat::Json);
//!
//! "stations.csv".to_geocode_csv("encoded.csv", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    CsvGeocodeConfig, CsvToGeocode, EncodedToPositions, GeoCode, PositionFormat,
    PositionsToGeo62, csv_to_geocode_csv,
};
pub use crate::core::{
    DEFAULT_PRECISION, MAX_PRECISION, MIN_ENCODED_LEN, decode, decode_with_precision, encode,
    encode_default,
};
pub use util::{Geo62Error, GeoPosition, Position};

pub use geo_types;
