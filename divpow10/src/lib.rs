//! Generator of the reciprocal table used to divide wide unsigned integers by 10^n, n = 1..=34,
//! without a runtime division.
//!
//! Each row turns "divide by 10^n" into "multiply by a fixed reciprocal, shift and mask", and
//! carries the byte-alignment and rounding constants the consumer needs for round-half-to-even:
//!
//! ```text
//! n --> byte width of 10^(n+34) --> OffsetClass (offs, src_offs_limb, shift_LL)
//!   \                                   |
//!    \                                  v
//!     \--> div2 = (10^34 * 2M - 1) / (10^(n+34) - 2^d) --> mult_hi | mult_mid | mult_lo
//!      \
//!       \--> rem_offs --> half_value, sticky_mask
//! ```
//!
//! Every step runs on unbounded integers; only the emitted fields are narrowed, with checks.
//! [`divide`] models the consumer contract on a row and [`verify_table`] checks it against a
//! digit-by-digit reference division.

mod divpow10_constants;
mod divpow10_divide;
mod divpow10_errors;
mod divpow10_offset;
mod divpow10_render;
mod divpow10_row;
mod divpow10_table;
mod divpow10_verify;
mod divpow10_width;

pub use divpow10_constants::*;
pub use divpow10_divide::*;
pub use divpow10_errors::*;
pub use divpow10_offset::*;
pub use divpow10_render::*;
pub use divpow10_row::*;
pub use divpow10_table::*;
pub use divpow10_verify::*;
pub use divpow10_width::*;
