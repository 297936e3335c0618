//! Byte-offset classification of a table row.
//!
//! The consumer addresses the dividend through one of three limb layouts:
//!
//! ```text
//! offs = 0        Base    low 128 bits read as is, the limb at byte 24 must be empty
//! offs = 1, 2     Narrow  lifted by shift_LL = (4 - offs) * 8 bits into a 160-bit window
//! offs = 4 ..= 13 Wide    read from byte offs - 4, the low bytes are dropped
//! ```
//!
//! The window is then multiplied by the reciprocal and shifted right by a fixed amount per
//! layout, 161 bits for base rows and 193 for the others.
//!
//! Offset 3 has no layout. Rows whose natural width lands on 3 are folded into 4, and row
//! n = 3 is forced to 1.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Serialize;

use crate::{
    TableError, DIVPOW10_BASE_BYTES, DIVPOW10_BASE_WINDOW_BITS, DIVPOW10_MODULUS_BITS,
    DIVPOW10_SRC_OFFS_BASE, DIVPOW10_WIDE_OFFS, DIVPOW10_WINDOW_BITS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OffsetKind {
    Base,
    Narrow,
    Wide,
}

impl OffsetKind {
    /// Width of the dividend window multiplied by the reciprocal.
    pub fn window_bits(self) -> u32 {
        match self {
            OffsetKind::Base => DIVPOW10_BASE_WINDOW_BITS,
            OffsetKind::Narrow | OffsetKind::Wide => DIVPOW10_WINDOW_BITS,
        }
    }

    /// Right shift applied to `window * reciprocal`, fixed per layout.
    pub fn product_shift(self) -> u32 {
        match self {
            OffsetKind::Base => DIVPOW10_MODULUS_BITS + 1,
            OffsetKind::Narrow | OffsetKind::Wide => {
                DIVPOW10_MODULUS_BITS + 8 * u32::from(DIVPOW10_WIDE_OFFS) + 1
            }
        }
    }

    /// Reads the dividend window the way the consumer does, or `None` when it does not fit.
    pub fn window(self, dividend: &BigUint, src_offs_limb: u8, shift_ll: u8) -> Option<BigUint> {
        let skip = 8 * u32::from(src_offs_limb);
        let lifted = dividend << u32::from(shift_ll);
        let window = match self {
            OffsetKind::Base => {
                if !(dividend >> skip).is_zero() {
                    return None;
                }
                lifted
            }
            OffsetKind::Narrow | OffsetKind::Wide => lifted >> skip,
        };
        (window.bits() <= u64::from(self.window_bits())).then_some(window)
    }
}

/// Number of bytes beyond the 128-bit base window, restricted to {0, 1, 2, 4, 5, ...}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OffsetClass(u8);

impl OffsetClass {
    pub const BASE: OffsetClass = OffsetClass(0);

    /// Offset implied by the byte width alone, before the exception rules.
    pub fn natural(byte_width: u32) -> u32 {
        byte_width.saturating_sub(DIVPOW10_BASE_BYTES)
    }

    /// Classifies row `n` whose 10^(n+34) needs `byte_width` bytes.
    pub fn classify(n: u32, byte_width: u32) -> Result<Self, TableError> {
        let natural = u8::try_from(Self::natural(byte_width))
            .map_err(|_| TableError::LimbOverflow { n, field: "offs", bits: 8 })?;
        let offs = if n == 3 { 1 } else { natural };
        Ok(Self::from_offs(offs).unwrap_or(OffsetClass(DIVPOW10_WIDE_OFFS)))
    }

    /// Returns the class for a raw offset, `None` for the unaddressable offset 3.
    pub fn from_offs(offs: u8) -> Option<Self> {
        match offs {
            3 => None,
            _ => Some(OffsetClass(offs)),
        }
    }

    pub fn offs(self) -> u8 {
        self.0
    }

    pub fn kind(self) -> OffsetKind {
        match self.0 {
            0 => OffsetKind::Base,
            1 | 2 => OffsetKind::Narrow,
            _ => OffsetKind::Wide,
        }
    }

    /// Byte offset into the dividend limbs where the consumer starts reading.
    pub fn src_offs_limb(self) -> u8 {
        match self.kind() {
            OffsetKind::Base => DIVPOW10_SRC_OFFS_BASE,
            OffsetKind::Narrow => 0,
            OffsetKind::Wide => self.0 - DIVPOW10_WIDE_OFFS,
        }
    }

    /// Realignment of the dividend window in bits, only used by narrow rows.
    pub fn shift_ll(self) -> u8 {
        match self.kind() {
            OffsetKind::Narrow => (DIVPOW10_WIDE_OFFS - self.0) * 8,
            OffsetKind::Base | OffsetKind::Wide => 0,
        }
    }

    /// Exponent of the scaling modulus M = 2^(160 + 8 * offs).
    pub fn modulus_bits(self) -> u32 {
        DIVPOW10_MODULUS_BITS + 8 * u32::from(self.0)
    }

    /// Low dividend bits the consumer drops when reading the window.
    pub fn dropped_bits(self) -> u32 {
        match self.kind() {
            OffsetKind::Wide => 8 * u32::from(self.src_offs_limb()),
            OffsetKind::Base | OffsetKind::Narrow => 0,
        }
    }

    /// Exponent d of the 2^d term subtracted from the divisor of row `n`.
    pub fn error_exponent(self, n: u32) -> u32 {
        match self.kind() {
            OffsetKind::Wide => {
                let slack = 8 * u32::from(self.0 - DIVPOW10_WIDE_OFFS);
                n.saturating_sub(1).min(slack)
            }
            OffsetKind::Base | OffsetKind::Narrow => 0,
        }
    }
}
