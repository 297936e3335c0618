use thiserror::Error;

use crate::DIVPOW10_NMAX;

/// Errors raised while deriving, rendering or checking the reciprocal table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Precision {0} out of range, expected 1..={max}", max = DIVPOW10_NMAX)]
    PrecisionOutOfRange(u32),
    #[error("Byte width estimate for 10^{digits} is {estimated} bytes, exact width is {exact}")]
    ByteWidthMismatch { digits: u32, estimated: u32, exact: u32 },
    #[error("Field {field} of row {n} does not fit in {bits} bits")]
    LimbOverflow { n: u32, field: &'static str, bits: u32 },
    #[error("Reciprocal of row {n} {reason}")]
    ReciprocalBound { n: u32, reason: &'static str },
    #[error("Dividend 0x{dividend} is outside the admissible range of row {n}")]
    DividendOutOfRange { n: u32, dividend: String },
    #[error("Dividend window of row {n} does not fit its {bits}-bit layout")]
    WindowOverflow { n: u32, bits: u32 },
    #[error("Division mismatch on row {n} for dividend 0x{dividend}: {detail}")]
    VerificationFailed { n: u32, dividend: String, detail: String },
    #[error("Failed to serialize table: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        TableError::Serialize(e.to_string())
    }
}
