use crate::core::constants::DELIMITERS;
use crate::util::error::Geo62Error;

/// Selects the delimiter character for a coordinate pair's sign quadrant.
///
/// Zero counts as non-negative for both axes.
pub fn select_delimiter(lat: f64, lng: f64) -> char {
    match (lat >= 0.0, lng >= 0.0) {
        (true, true) => '*',
        (true, false) => '-',
        (false, true) => '~',
        (false, false) => '_',
    }
}

/// Finds the delimiter present in an encoded payload.
///
/// Checks the four delimiter types in fixed order. Base-62 magnitudes
/// cannot contain a delimiter character, so a valid payload contains
/// exactly one and the check order does not matter for decodable input.
pub fn locate_delimiter(payload: &str) -> Result<char, Geo62Error> {
    for d in DELIMITERS {
        if payload.contains(d) {
            return Ok(d);
        }
    }
    Err(Geo62Error::NoDelimiterFound)
}

/// Recovers the (lat, lng) sign multipliers from a delimiter character.
pub fn sign_multipliers(delimiter: char) -> Result<(f64, f64), Geo62Error> {
    match delimiter {
        '*' => Ok((1.0, 1.0)),
        '-' => Ok((1.0, -1.0)),
        '~' => Ok((-1.0, 1.0)),
        '_' => Ok((-1.0, -1.0)),
        _ => Err(Geo62Error::NoDelimiterFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_delimiter_quadrants() {
        assert_eq!(select_delimiter(53.4, 2.2), '*');
        assert_eq!(select_delimiter(53.4, -2.2), '-');
        assert_eq!(select_delimiter(-53.4, 2.2), '~');
        assert_eq!(select_delimiter(-53.4, -2.2), '_');
    }

    #[test]
    fn test_zero_is_non_negative() {
        assert_eq!(select_delimiter(0.0, 0.0), '*');
        assert_eq!(select_delimiter(0.0, -1.0), '-');
        assert_eq!(select_delimiter(-1.0, 0.0), '~');
    }

    #[test]
    fn test_locate_delimiter() -> Result<(), Geo62Error> {
        assert_eq!(locate_delimiter("VdgHo-1U0CML")?, '-');
        assert_eq!(locate_delimiter("Enee_3MxJH")?, '_');
        assert_eq!(locate_delimiter("0*0")?, '*');
        assert_eq!(locate_delimiter("2i7f2~aerhE")?, '~');
        Ok(())
    }

    #[test]
    fn test_locate_delimiter_missing() {
        assert_eq!(
            locate_delimiter("testtestetsttest"),
            Err(Geo62Error::NoDelimiterFound)
        );
    }

    #[test]
    fn test_select_and_multipliers_are_inverse() -> Result<(), Geo62Error> {
        for (lat, lng) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
            let delimiter = select_delimiter(lat, lng);
            let (lat_mul, lng_mul) = sign_multipliers(delimiter)?;
            assert_eq!(lat_mul, lat.signum());
            assert_eq!(lng_mul, lng.signum());
        }
        Ok(())
    }

    #[test]
    fn test_unknown_delimiter() {
        assert_eq!(sign_multipliers('x'), Err(Geo62Error::NoDelimiterFound));
    }
}
