pub mod base62;
pub mod codec;
pub mod constants;
pub mod quadrant;
pub mod quantize;

pub use codec::{decode, decode_with_precision, encode, encode_default};
pub use constants::{DEFAULT_PRECISION, MAX_PRECISION, MIN_ENCODED_LEN};
