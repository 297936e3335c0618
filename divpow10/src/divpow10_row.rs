use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    checked_byte_width, pow10, OffsetClass, TableError, DIVPOW10_MULT_HI_SHIFT,
    DIVPOW10_MULT_MID_SHIFT, DIVPOW10_NMAX, DIVPOW10_QUOTIENT_DIGITS,
};

/// One row of the reciprocal table, the constants needed to divide by 10^n.
///
/// The nine emitted fields, in consumer order, are `offs`, `src_offs_limb`, `rem_offs`,
/// `shift_ll`, `mult_lo`, `mult_mid`, `mult_hi`, `half_value` and `sticky_mask`.
/// `half_value_hi` is carried alongside but is not part of the emitted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableRow {
    n: u32,
    offs: OffsetClass,
    src_offs_limb: u8,
    rem_offs: u8,
    shift_ll: u8,
    mult_lo: u32,
    mult_mid: u64,
    mult_hi: u64,
    half_value: u64,
    half_value_hi: u64,
    sticky_mask: u32,
}

/// Intermediate values of a row derivation, kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDerivation {
    pub byte_width: u32,
    pub natural_offs: u32,
    pub error_exponent: u32,
    pub modulus_bits: u32,
    pub reciprocal: BigUint,
}

fn low_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}

/// Checks that the windowed estimate never exceeds floor(x / 10^n) and falls short of it by at
/// most one, for every dividend x < 10^(n+34). The estimate is `(x * reciprocal) >> shift` with
/// the low `dropped_bits` of x cleared first.
fn check_reciprocal_bound(
    n: u32,
    reciprocal: &BigUint,
    shift: u32,
    dropped_bits: u32,
) -> Result<(), TableError> {
    let divisor = pow10(n);
    let max_dividend = pow10(n + DIVPOW10_QUOTIENT_DIGITS) - 1u32;
    let scale = BigUint::one() << shift;
    let product = reciprocal * &divisor;

    if product >= scale {
        let excess = &product - &scale;
        if &max_dividend * excess >= scale {
            return Err(TableError::ReciprocalBound { n, reason: "overestimates the quotient" });
        }
    }

    // dropped low bits and a rounded down multiplier both pull the estimate down
    let deficit = if product < scale { &scale - &product } else { BigUint::ZERO };
    let truncation = (BigUint::one() << dropped_bits) - 1u32;
    if max_dividend * deficit + truncation * &scale > scale * divisor {
        return Err(TableError::ReciprocalBound {
            n,
            reason: "undershoots the quotient by more than one",
        });
    }
    Ok(())
}

impl TableRow {
    /// Derives the row for precision `n`.
    pub fn derive(n: u32) -> Result<Self, TableError> {
        Self::derive_with_details(n).map(|(row, _)| row)
    }

    /// Derives the row for precision `n` together with its intermediate values.
    pub fn derive_with_details(n: u32) -> Result<(Self, RowDerivation), TableError> {
        if !(1..=DIVPOW10_NMAX).contains(&n) {
            return Err(TableError::PrecisionOutOfRange(n));
        }
        let digits = n + DIVPOW10_QUOTIENT_DIGITS;
        let byte_width = checked_byte_width(digits)?;
        let offs = OffsetClass::classify(n, byte_width)?;
        let modulus_bits = offs.modulus_bits();
        let error_exponent = offs.error_exponent(n);

        // div2 = (10^34 * M * 2 - 1) / (10^(n+34) - 2^d)
        let modulus = BigUint::one() << modulus_bits;
        let numerator = pow10(DIVPOW10_QUOTIENT_DIGITS) * modulus * 2u32 - 1u32;
        let denominator = pow10(digits) - (BigUint::one() << error_exponent);
        let reciprocal = numerator / denominator;

        check_reciprocal_bound(n, &reciprocal, modulus_bits + 1, offs.dropped_bits())?;

        let mult_hi = (&reciprocal >> DIVPOW10_MULT_HI_SHIFT).to_u64().ok_or(
            TableError::LimbOverflow { n, field: "mult_hi", bits: 64 },
        )?;
        let mult_mid = low_u64(&(&reciprocal >> DIVPOW10_MULT_MID_SHIFT));
        let mult_lo = low_u64(&reciprocal) as u32;

        let rem_offs = (n - 1) / 8;
        let half = pow10(n) >> (1 + 8 * rem_offs);
        let half_value = low_u64(&half);
        let half_value_hi = (&half >> 64u32).to_u64().ok_or(TableError::LimbOverflow {
            n,
            field: "half_value_hi",
            bits: 64,
        })?;
        let sticky_mask = u32::try_from((1u64 << (8 * rem_offs)) - 1).map_err(|_| {
            TableError::LimbOverflow { n, field: "sticky_mask", bits: 32 }
        })?;

        debug!(
            "Row {n}: width {byte_width} bytes, offs {}, d {error_exponent}, div2 {} bits",
            offs.offs(),
            reciprocal.bits()
        );
        if half_value_hi != 0 {
            warn!(
                "Row {n}: half threshold needs {} bits, the emitted half_value keeps the low 64",
                half.bits()
            );
        }

        let row = TableRow {
            n,
            offs,
            src_offs_limb: offs.src_offs_limb(),
            rem_offs: rem_offs as u8,
            shift_ll: offs.shift_ll(),
            mult_lo,
            mult_mid,
            mult_hi,
            half_value,
            half_value_hi,
            sticky_mask,
        };
        let details = RowDerivation {
            byte_width,
            natural_offs: OffsetClass::natural(byte_width),
            error_exponent,
            modulus_bits,
            reciprocal,
        };
        Ok((row, details))
    }

    pub fn n(&self) -> u32 {
        self.n
    }
    pub fn offset_class(&self) -> OffsetClass {
        self.offs
    }
    pub fn offs(&self) -> u8 {
        self.offs.offs()
    }
    pub fn src_offs_limb(&self) -> u8 {
        self.src_offs_limb
    }
    pub fn rem_offs(&self) -> u8 {
        self.rem_offs
    }
    pub fn shift_ll(&self) -> u8 {
        self.shift_ll
    }
    pub fn mult_lo(&self) -> u32 {
        self.mult_lo
    }
    pub fn mult_mid(&self) -> u64 {
        self.mult_mid
    }
    pub fn mult_hi(&self) -> u64 {
        self.mult_hi
    }
    pub fn half_value(&self) -> u64 {
        self.half_value
    }
    pub fn half_value_hi(&self) -> u64 {
        self.half_value_hi
    }
    pub fn sticky_mask(&self) -> u32 {
        self.sticky_mask
    }

    /// The nine emitted fields in consumer order.
    pub fn fields(&self) -> [u64; 9] {
        [
            u64::from(self.offs()),
            u64::from(self.src_offs_limb),
            u64::from(self.rem_offs),
            u64::from(self.shift_ll),
            u64::from(self.mult_lo),
            self.mult_mid,
            self.mult_hi,
            self.half_value,
            u64::from(self.sticky_mask),
        ]
    }

    /// Reassembles the multiplier from its limbs: hi * 2^96 + mid * 2^32 + lo.
    pub fn reciprocal(&self) -> BigUint {
        (BigUint::from(self.mult_hi) << DIVPOW10_MULT_HI_SHIFT)
            + (BigUint::from(self.mult_mid) << DIVPOW10_MULT_MID_SHIFT)
            + self.mult_lo
    }

    /// Right shift applied to the full `dividend * reciprocal` to estimate the quotient.
    pub fn shift(&self) -> u32 {
        self.offs.modulus_bits() + 1
    }

    pub fn divisor(&self) -> BigUint {
        pow10(self.n)
    }

    /// Exclusive upper bound of the dividends this row divides, 10^(n+34).
    pub fn dividend_limit(&self) -> BigUint {
        pow10(self.n + DIVPOW10_QUOTIENT_DIGITS)
    }

    /// Half of the divisor with the low `rem_offs` bytes dropped, all 128 bits of it.
    pub fn half_threshold(&self) -> BigUint {
        (BigUint::from(self.half_value_hi) << 64u32) + self.half_value
    }
}

#[cfg(test)]
impl TableRow {
    /// Copy of the row with its dividend layout overwritten.
    pub(crate) fn with_layout(&self, src_offs_limb: u8, shift_ll: u8) -> Self {
        Self { src_offs_limb, shift_ll, ..self.clone() }
    }
}
