/// Largest decimal precision covered by the table, rows are keyed by `n` in `1..=DIVPOW10_NMAX`
pub const DIVPOW10_NMAX: u32 = 34;

/// Number of table rows
pub const DIVPOW10_ROWS: usize = DIVPOW10_NMAX as usize;

/// Decimal digits of the quotient (34 digit decimal128 coefficient)
pub const DIVPOW10_QUOTIENT_DIGITS: u32 = 34;

/// Base width of the dividend window, in bytes (128 bits)
pub const DIVPOW10_BASE_BYTES: u32 = 16;

/// Bits of the scaling modulus before the byte offset is added: 128 + 32
pub const DIVPOW10_MODULUS_BITS: u32 = 160;

/// Bit position where `mult_hi` starts
pub const DIVPOW10_MULT_HI_SHIFT: u32 = 96;

/// Bit position where `mult_mid` starts
pub const DIVPOW10_MULT_MID_SHIFT: u32 = 32;

/// Byte offset used by the consumer when the dividend fits the base window
pub const DIVPOW10_SRC_OFFS_BASE: u8 = 24;

/// Offset classes at or above this one read the dividend from `offs - 4`
pub const DIVPOW10_WIDE_OFFS: u8 = 4;

/// Dividend bits read by base rows, the low 128-bit half of the source
pub const DIVPOW10_BASE_WINDOW_BITS: u32 = 128;

/// Dividend bits read by narrow and wide rows once realigned: 16 + 4 bytes
pub const DIVPOW10_WINDOW_BITS: u32 = 160;
