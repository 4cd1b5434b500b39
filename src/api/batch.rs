use crate::api::geocode::GeoCode;
use crate::core::codec::{decode, encode};
use crate::util::coord::{GeoPosition, Position};
use crate::util::error::Geo62Error;
use rayon::prelude::*;

/// Trait for bulk-encoding collections of positions.
///
/// Implemented for slices and `Vec`s of any [`Position`] type. Encoding
/// runs in parallel; an error on any element aborts the batch.
pub trait PositionsToGeo62 {
    /// Encodes every position, returning the encoded strings in order.
    fn to_geo62(&self, precision: u8) -> Result<Vec<String>, Geo62Error>;
    /// Encodes every position into a full [`GeoCode`].
    fn to_geocodes(&self, precision: u8) -> Result<Vec<GeoCode>, Geo62Error>;
}

impl<P: Position + Sync> PositionsToGeo62 for [P] {
    fn to_geo62(&self, precision: u8) -> Result<Vec<String>, Geo62Error> {
        self.par_iter()
            .map(|p| encode(p.lat(), p.lng(), precision))
            .collect()
    }

    fn to_geocodes(&self, precision: u8) -> Result<Vec<GeoCode>, Geo62Error> {
        self.par_iter()
            .map(|p| GeoCode::from_position(p, precision))
            .collect()
    }
}

impl<P: Position + Sync> PositionsToGeo62 for Vec<P> {
    fn to_geo62(&self, precision: u8) -> Result<Vec<String>, Geo62Error> {
        self.as_slice().to_geo62(precision)
    }

    fn to_geocodes(&self, precision: u8) -> Result<Vec<GeoCode>, Geo62Error> {
        self.as_slice().to_geocodes(precision)
    }
}

/// Trait for bulk-decoding collections of encoded strings.
pub trait EncodedToPositions {
    /// Decodes every string, returning the positions in order.
    fn to_positions(&self) -> Result<Vec<GeoPosition>, Geo62Error>;
}

impl<S: AsRef<str> + Sync> EncodedToPositions for [S] {
    fn to_positions(&self) -> Result<Vec<GeoPosition>, Geo62Error> {
        self.par_iter().map(|s| decode(s.as_ref())).collect()
    }
}

impl<S: AsRef<str> + Sync> EncodedToPositions for Vec<S> {
    fn to_positions(&self) -> Result<Vec<GeoPosition>, Geo62Error> {
        self.as_slice().to_positions()
    }
}
