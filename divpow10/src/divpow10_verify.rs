use num_bigint::BigUint;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    divide, divide_reference, pow10, ReciprocalTable, TableError, TableRow,
    DIVPOW10_QUOTIENT_DIGITS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Random quotients drawn per row, each expanding to five dividends
    pub samples: usize,
    pub seed: u64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self { samples: 1000, seed: 0 }
    }
}

impl VerifyOptions {
    /// Generator for row `n`, so that any single row can be replayed on its own.
    pub fn rng_for(&self, n: u32) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(u64::from(n)))
    }
}

/// Outcome of checking one row against the reference division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowReport {
    pub n: u32,
    pub checked: usize,
    /// Dividends whose quotient estimate needed the one-off correction
    pub corrected: usize,
    /// Count per rounding class, indexed by its code
    pub rounding: [usize; 4],
}

fn random_below<R: Rng>(rng: &mut R, bound: &BigUint) -> BigUint {
    let words = bound.bits().div_ceil(32) as usize;
    let digits: Vec<u32> = (0..words).map(|_| rng.random()).collect();
    BigUint::from_slice(&digits) % bound
}

/// Builds the dividends checked for `row`: range edges, then per sample the four rounding
/// boundaries around a random quotient and one uniformly random dividend.
fn dividends<R: Rng>(row: &TableRow, samples: usize, rng: &mut R) -> Vec<BigUint> {
    let divisor = row.divisor();
    let half = &divisor / 2u32;
    let limit = row.dividend_limit();
    let quotient_limit = pow10(DIVPOW10_QUOTIENT_DIGITS);

    let mut out = Vec::with_capacity(4 + 5 * samples);
    out.push(BigUint::ZERO);
    out.push(&divisor - 1u32);
    out.push(divisor.clone());
    out.push(&limit - 1u32);
    for _ in 0..samples {
        let base = random_below(rng, &quotient_limit) * &divisor;
        out.push(&base + &half - 1u32);
        out.push(&base + &half);
        out.push(&base + &divisor - 1u32);
        out.push(base);
        out.push(random_below(rng, &limit));
    }
    out
}

/// Checks the model division of `row` against the digit-by-digit reference.
pub fn verify_row<R: Rng>(row: &TableRow, samples: usize, rng: &mut R) -> Result<RowReport, TableError> {
    let n = row.n();
    let mut report = RowReport { n, checked: 0, corrected: 0, rounding: [0; 4] };

    for dividend in dividends(row, samples, rng) {
        let model = divide(row, &dividend)?;
        let reference = divide_reference(&dividend, n);
        if model.value != reference.value || model.rounding != reference.rounding {
            return Err(TableError::VerificationFailed {
                n,
                dividend: dividend.to_str_radix(16),
                detail: format!(
                    "table gives {} ({}), reference gives {} ({})",
                    model.value, model.rounding, reference.value, reference.rounding
                ),
            });
        }
        report.checked += 1;
        report.corrected += usize::from(model.corrected);
        report.rounding[usize::from(model.rounding.code())] += 1;
    }

    debug!(
        "Row {n}: {} dividends checked, {} corrected estimates",
        report.checked, report.corrected
    );
    Ok(report)
}

/// Verifies every row of `table`, each row with its own generator from [`VerifyOptions::rng_for`].
pub fn verify_table(
    table: &ReciprocalTable,
    options: &VerifyOptions,
) -> Result<Vec<RowReport>, TableError> {
    table
        .rows()
        .par_iter()
        .map(|row| verify_row(row, options.samples, &mut options.rng_for(row.n())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DIVPOW10_ROWS;

    #[test]
    fn test_random_below_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = pow10(35);
        for _ in 0..256 {
            assert!(random_below(&mut rng, &bound) < bound);
        }
    }

    #[test]
    fn test_verify_table() {
        let table = ReciprocalTable::build().unwrap();
        let options = VerifyOptions { samples: 64, seed: 0x5eed };
        let reports = verify_table(&table, &options).unwrap();
        assert_eq!(reports.len(), DIVPOW10_ROWS);
        for (index, report) in reports.iter().enumerate() {
            assert_eq!(report.n as usize, index + 1);
            assert_eq!(report.checked, 4 + 5 * options.samples);
            assert_eq!(report.rounding.iter().sum::<usize>(), report.checked);
            // every sample contributes one exact dividend and one exact half
            assert!(report.rounding[0] >= options.samples);
            assert!(report.rounding[2] >= options.samples);
        }
    }

    #[test]
    fn test_verify_is_reproducible() {
        let table = ReciprocalTable::build_parallel().unwrap();
        let options = VerifyOptions { samples: 16, seed: 42 };
        let reports = verify_table(&table, &options).unwrap();
        assert_eq!(Ok(reports.clone()), verify_table(&table, &options));

        // a single row replays the same dividends as the full run
        let row = table.row(20).unwrap();
        let single = verify_row(row, options.samples, &mut options.rng_for(20)).unwrap();
        assert_eq!(single, reports[19]);
    }

    #[test]
    fn test_corrections_only_on_rounded_down_rows() {
        let table = ReciprocalTable::build().unwrap();
        let reports = verify_table(&table, &VerifyOptions { samples: 32, seed: 1 }).unwrap();
        for report in reports.iter().filter(|r| r.n <= 12) {
            assert_eq!(report.corrected, 0, "row {}", report.n);
        }
        // exact multiples of 10^n always need the correction once the multiplier rounds down
        for report in reports.iter().filter(|r| r.n > 12) {
            assert!(report.corrected > 0, "row {}", report.n);
        }
    }
}
