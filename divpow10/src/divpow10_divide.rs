//! Exact models of the table consumer.
//!
//! [`divide`] follows the consumer contract of a [`TableRow`]: read the dividend window given by
//! `src_offs_limb` and `shift_ll`, estimate the quotient by multiply and a fixed shift, fix a
//! one-off undershoot from the remainder, then classify the remainder with `rem_offs`,
//! `sticky_mask` and the half threshold. [`divide_reference`] divides by ten
//! one digit at a time and shares nothing with the table.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use serde::Serialize;

use crate::{TableError, TableRow};

/// Position of the discarded remainder relative to half of the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoundingClass {
    Exact = 0,
    BelowHalf = 1,
    Half = 2,
    AboveHalf = 3,
}

impl RoundingClass {
    /// Return code used by the division routine, 0 to 3.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RoundingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingClass::Exact => "exact",
            RoundingClass::BelowHalf => "below half",
            RoundingClass::Half => "half",
            RoundingClass::AboveHalf => "above half",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotient {
    pub value: BigUint,
    pub rounding: RoundingClass,
    /// Set when the multiply-shift estimate fell one short and was corrected.
    pub corrected: bool,
}

/// Divides `dividend` by 10^n using only the constants of `row`.
pub fn divide(row: &TableRow, dividend: &BigUint) -> Result<Quotient, TableError> {
    let n = row.n();
    if *dividend >= row.dividend_limit() {
        return Err(TableError::DividendOutOfRange { n, dividend: dividend.to_str_radix(16) });
    }
    let divisor = row.divisor();

    let kind = row.offset_class().kind();
    let window = kind
        .window(dividend, row.src_offs_limb(), row.shift_ll())
        .ok_or(TableError::WindowOverflow { n, bits: kind.window_bits() })?;
    let mut value = (window * row.reciprocal()) >> kind.product_shift();
    let estimate = &value * &divisor;
    if estimate > *dividend {
        return Err(TableError::VerificationFailed {
            n,
            dividend: dividend.to_str_radix(16),
            detail: "quotient estimate exceeds the exact quotient".to_string(),
        });
    }

    let mut remainder = dividend - estimate;
    let mut corrected = false;
    if remainder >= divisor {
        remainder -= &divisor;
        value += 1u32;
        corrected = true;
    }
    if remainder >= divisor {
        return Err(TableError::VerificationFailed {
            n,
            dividend: dividend.to_str_radix(16),
            detail: "quotient estimate is more than one short".to_string(),
        });
    }

    let rounding = classify_remainder(row, &remainder);
    Ok(Quotient { value, rounding, corrected })
}

fn classify_remainder(row: &TableRow, remainder: &BigUint) -> RoundingClass {
    let reduced = remainder >> (8 * u32::from(row.rem_offs()));
    let low = remainder & &BigUint::from(row.sticky_mask());
    let sticky = !low.is_zero();

    match reduced.cmp(&row.half_threshold()) {
        Ordering::Less if reduced.is_zero() && !sticky => RoundingClass::Exact,
        Ordering::Less => RoundingClass::BelowHalf,
        Ordering::Equal if sticky => RoundingClass::AboveHalf,
        Ordering::Equal => RoundingClass::Half,
        Ordering::Greater => RoundingClass::AboveHalf,
    }
}

/// Divides `dividend` by 10^n one decimal digit at a time.
pub fn divide_reference(dividend: &BigUint, n: u32) -> Quotient {
    let ten = BigUint::from(10u32);
    let mut value = dividend.clone();
    let mut digit = 0u32;
    let mut sticky = false;

    for _ in 0..n {
        sticky |= digit != 0;
        let (q, r) = value.div_rem(&ten);
        value = q;
        digit = r.to_u32().unwrap_or_default();
    }

    let rounding = match (digit.cmp(&5), sticky) {
        (Ordering::Less, false) if digit == 0 => RoundingClass::Exact,
        (Ordering::Less, _) => RoundingClass::BelowHalf,
        (Ordering::Equal, false) => RoundingClass::Half,
        _ => RoundingClass::AboveHalf,
    };
    Quotient { value, rounding, corrected: false }
}
