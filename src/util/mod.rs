pub mod coord;
pub mod error;

pub use coord::{GeoPosition, Position};
pub use error::Geo62Error;
