/// Error type for geo62 operations.
#[derive(Debug, PartialEq)]
pub enum Geo62Error {
    /// The latitude is not a finite number.
    InvalidLatitude(String),
    /// The longitude is not a finite number.
    InvalidLongitude(String),
    /// The precision is not a decimal digit in 0-9.
    InvalidPrecision(String),
    /// The encoded string is shorter than the minimum valid length.
    EncodedTooShort(usize),
    /// No quadrant delimiter character present in the payload.
    NoDelimiterFound,
    /// A magnitude contains a character outside the base-62 alphabet.
    InvalidCharacter(char),
    /// A quantized magnitude exceeds the safe representable range.
    MagnitudeOverflow,
    /// CSV parsing or writing error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
}

impl std::fmt::Display for Geo62Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geo62Error::InvalidLatitude(v) => write!(f, "Invalid latitude: {}", v),
            Geo62Error::InvalidLongitude(v) => write!(f, "Invalid longitude: {}", v),
            Geo62Error::InvalidPrecision(v) => write!(f, "Invalid precision: {}", v),
            Geo62Error::EncodedTooShort(len) => {
                write!(f, "Encoded value too short: {} characters", len)
            }
            Geo62Error::NoDelimiterFound => write!(f, "No delimiter found"),
            Geo62Error::InvalidCharacter(c) => write!(f, "Invalid base-62 character: '{}'", c),
            Geo62Error::MagnitudeOverflow => write!(f, "Magnitude overflow"),
            Geo62Error::CsvError(msg) => write!(f, "CSV error: {}", msg),
            Geo62Error::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for Geo62Error {}
