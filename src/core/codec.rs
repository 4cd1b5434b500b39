use crate::core::base62;
use crate::core::constants::{DEFAULT_PRECISION, MAX_PRECISION, MIN_ENCODED_LEN};
use crate::core::quadrant::{locate_delimiter, select_delimiter, sign_multipliers};
use crate::core::quantize::{dequantize, quantize};
use crate::util::coord::GeoPosition;
use crate::util::error::Geo62Error;

/// Encodes a coordinate pair at the given decimal precision.
///
/// The output is `<precision digit><|lat| base-62><delimiter><|lng| base-62>`,
/// where the delimiter carries the sign quadrant of the pair.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), geo62::Geo62Error> {
/// let encoded = geo62::encode(84.541361, -174.3756743, 7)?;
/// assert_eq!(encoded, "7VdgHo-1U0CML");
/// # Ok(())
/// # }
/// ```
pub fn encode(lat: f64, lng: f64, precision: u8) -> Result<String, Geo62Error> {
    if !lat.is_finite() {
        return Err(Geo62Error::InvalidLatitude(lat.to_string()));
    }
    if !lng.is_finite() {
        return Err(Geo62Error::InvalidLongitude(lng.to_string()));
    }
    if precision > MAX_PRECISION {
        return Err(Geo62Error::InvalidPrecision(precision.to_string()));
    }

    let delimiter = select_delimiter(lat, lng);
    let lat_magnitude = quantize(lat, precision)?;
    let lng_magnitude = quantize(lng, precision)?;

    Ok(format!(
        "{}{}{}{}",
        precision,
        base62::encode(lat_magnitude),
        delimiter,
        base62::encode(lng_magnitude)
    ))
}

/// Encodes a coordinate pair at the default precision of six decimal digits.
pub fn encode_default(lat: f64, lng: f64) -> Result<String, Geo62Error> {
    encode(lat, lng, DEFAULT_PRECISION)
}

/// Decodes an encoded string back to a coordinate pair.
///
/// Returns the pair rounded to the precision it was encoded with.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), geo62::Geo62Error> {
/// let position = geo62::decode("6Enee_3MxJH")?;
/// assert_eq!(position.lat, -9.622414);
/// assert_eq!(position.lng, -55.898437);
/// # Ok(())
/// # }
/// ```
pub fn decode(encoded: &str) -> Result<GeoPosition, Geo62Error> {
    let (position, _) = decode_with_precision(encoded)?;
    Ok(position)
}

/// Decodes an encoded string, also returning the precision it carries.
pub fn decode_with_precision(encoded: &str) -> Result<(GeoPosition, u8), Geo62Error> {
    let len = encoded.chars().count();
    if len < MIN_ENCODED_LEN {
        return Err(Geo62Error::EncodedTooShort(len));
    }

    let mut chars = encoded.chars();
    let precision = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| Geo62Error::InvalidPrecision(encoded.chars().take(1).collect()))?
        as u8;
    let payload = chars.as_str();

    let delimiter = locate_delimiter(payload)?;
    let (lat_mul, lng_mul) = sign_multipliers(delimiter)?;

    // locate_delimiter guarantees the delimiter occurs in the payload
    let (lat_part, lng_part) = payload
        .split_once(delimiter)
        .ok_or(Geo62Error::NoDelimiterFound)?;

    let lat_magnitude = base62::decode(lat_part)?;
    let lng_magnitude = base62::decode(lng_part)?;

    let position = GeoPosition {
        lat: dequantize(lat_magnitude, precision) * lat_mul,
        lng: dequantize(lng_magnitude, precision) * lng_mul,
    };
    Ok((position, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known-answer vectors covering all four quadrants
    const FIXTURES: [(f64, f64, u8, &str); 8] = [
        (84.541361, -174.3756743, 7, "7VdgHo-1U0CML"),
        (39.092765, -94.584045, 6, "62E1Ot-6oRD7"),
        (-9.622414, -55.898437, 6, "6Enee_3MxJH"),
        (-33.870416, 151.204834, 6, "62i7f2~aerhE"),
        (65.07213, 170.859375, 6, "64p2eu*byUkn"),
        (-81.823794, 125.859375, 6, "65xk6C~8w5LV"),
        (-80.760615, -107.578125, 6, "65sRwz_7hnZ3"),
        (0.0, 0.0, 6, "60*0"),
    ];

    #[test]
    fn test_encode_fixtures() -> Result<(), Geo62Error> {
        for (lat, lng, precision, expected) in FIXTURES {
            assert_eq!(encode(lat, lng, precision)?, expected);
        }
        Ok(())
    }

    #[test]
    fn test_decode_fixtures() -> Result<(), Geo62Error> {
        for (lat, lng, precision, encoded) in FIXTURES {
            let (position, decoded_precision) = decode_with_precision(encoded)?;
            assert!((position.lat - lat).abs() < 1e-9);
            assert!((position.lng - lng).abs() < 1e-9);
            assert_eq!(decoded_precision, precision);
        }
        Ok(())
    }

    #[test]
    fn test_roundtrip_truncates_to_precision() -> Result<(), Geo62Error> {
        let lat = 53.48082746395233;
        let lng = -2.2479699500757597;

        for precision in 0..=MAX_PRECISION {
            let scale = 10f64.powi(precision as i32);
            let position = decode(&encode(lat, lng, precision)?)?;
            assert!((position.lat - (lat * scale).round() / scale).abs() < 1e-12);
            assert!((position.lng - (lng.abs() * scale).round() / -scale).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_encode_default_precision() -> Result<(), Geo62Error> {
        assert_eq!(encode_default(0.0, 0.0)?, "60*0");
        assert_eq!(
            encode_default(-9.622414, -55.898437)?,
            encode(-9.622414, -55.898437, 6)?
        );
        Ok(())
    }

    #[test]
    fn test_encode_non_finite() {
        assert!(matches!(
            encode(f64::NAN, 10.0, 6),
            Err(Geo62Error::InvalidLatitude(_))
        ));
        assert!(matches!(
            encode(10.0, f64::INFINITY, 6),
            Err(Geo62Error::InvalidLongitude(_))
        ));
        // Latitude is checked first when both are invalid
        assert!(matches!(
            encode(f64::NAN, f64::NAN, 6),
            Err(Geo62Error::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_encode_precision_out_of_range() {
        // A two-digit precision would corrupt the single-digit header
        assert_eq!(
            encode(1.0, 1.0, 10),
            Err(Geo62Error::InvalidPrecision("10".to_string()))
        );
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(decode("tes"), Err(Geo62Error::EncodedTooShort(3)));
        assert_eq!(decode(""), Err(Geo62Error::EncodedTooShort(0)));
    }

    #[test]
    fn test_decode_bad_precision_digit() {
        assert!(matches!(
            decode("testtestetsttest"),
            Err(Geo62Error::InvalidPrecision(_))
        ));
    }

    #[test]
    fn test_decode_no_delimiter() {
        assert_eq!(
            decode("6testtestetsttest"),
            Err(Geo62Error::NoDelimiterFound)
        );
    }

    #[test]
    fn test_decode_invalid_magnitude_character() {
        assert_eq!(decode("6a!b*c"), Err(Geo62Error::InvalidCharacter('!')));
        // A second delimiter lands inside the longitude magnitude
        assert_eq!(decode("60*0*5"), Err(Geo62Error::InvalidCharacter('*')));
    }

    #[test]
    fn test_decode_empty_longitude_magnitude() -> Result<(), Geo62Error> {
        // Not producible by encode, but decodes as zero rather than erroring
        let position = decode("600*")?;
        assert_eq!(position.lat, 0.0);
        assert_eq!(position.lng, 0.0);
        Ok(())
    }
}
