use std::f64::consts::LOG2_10;

use num_bigint::BigUint;

use crate::TableError;

/// Returns 10^exp as an unbounded integer.
pub fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Byte width of 10^digits estimated from log2(10), as the generator sizes its window.
pub fn estimated_byte_width(digits: u32) -> u32 {
    (LOG2_10 * f64::from(digits) / 8.0).ceil() as u32
}

/// Byte width of 10^digits computed from its exact bit length.
pub fn exact_byte_width(digits: u32) -> u32 {
    pow10(digits).bits().div_ceil(8) as u32
}

/// Byte width of 10^digits, rejecting any estimate that disagrees with the exact width.
pub fn checked_byte_width(digits: u32) -> Result<u32, TableError> {
    let estimated = estimated_byte_width(digits);
    let exact = exact_byte_width(digits);
    if estimated != exact {
        return Err(TableError::ByteWidthMismatch { digits, estimated, exact });
    }
    Ok(exact)
}
