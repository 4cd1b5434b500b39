pub mod batch;
pub mod geo_csv;
pub mod geocode;

pub use batch::{EncodedToPositions, PositionsToGeo62};
pub use geo_csv::{CsvGeocodeConfig, CsvToGeocode, PositionFormat, csv_to_geocode_csv};
pub use geocode::GeoCode;
