use crate::core::constants::MAX_SAFE_MAGNITUDE;
use crate::util::error::Geo62Error;

/// Converts a coordinate to its unsigned fixed-point magnitude at the
/// given precision: `round(|coordinate| * 10^precision)`.
///
/// Rounds half away from zero (`f64::round`). Fails with
/// `MagnitudeOverflow` if the result exceeds 2^53, past which f64
/// arithmetic can no longer represent the magnitude exactly.
pub fn quantize(coordinate: f64, precision: u8) -> Result<u64, Geo62Error> {
    let scaled = (coordinate.abs() * 10f64.powi(precision as i32)).round();
    if scaled.is_nan() || scaled > MAX_SAFE_MAGNITUDE as f64 {
        return Err(Geo62Error::MagnitudeOverflow);
    }
    Ok(scaled as u64)
}

/// Converts a fixed-point magnitude back to a non-negative coordinate:
/// `magnitude / 10^precision`. Sign is reapplied by the caller.
pub fn dequantize(magnitude: u64, precision: u8) -> f64 {
    magnitude as f64 / 10f64.powi(precision as i32)
}
