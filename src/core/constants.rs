/// Decimal digits retained when no precision is given.
pub const DEFAULT_PRECISION: u8 = 6;

/// Highest encodable precision. The wire format stores the precision as a
/// single leading decimal digit, so two-digit precisions cannot round-trip.
pub const MAX_PRECISION: u8 = 9;

/// Minimum length of a valid encoded string:
/// precision digit + one magnitude digit + delimiter + one magnitude digit.
pub const MIN_ENCODED_LEN: usize = 4;

/// Base-62 alphabet: digits, then lowercase, then uppercase.
pub(crate) const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Quadrant delimiters in scan order, one per (sign(lat), sign(lng)) pair:
/// `*` (+,+), `-` (+,-), `~` (-,+), `_` (-,-).
/// None of these occur in the base-62 alphabet.
pub(crate) const DELIMITERS: [char; 4] = ['*', '-', '~', '_'];

/// Largest integer exactly representable in an f64 (2^53). Quantized
/// magnitudes above this would lose digits before reaching the integer
/// codec, so quantization rejects them.
pub(crate) const MAX_SAFE_MAGNITUDE: u64 = 1 << 53;
