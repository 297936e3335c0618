use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::{TableError, TableRow, DIVPOW10_NMAX, DIVPOW10_ROWS};

/// The full reciprocal table, one row per precision n = 1..=34 in increasing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReciprocalTable {
    rows: Vec<TableRow>,
}

impl ReciprocalTable {
    /// Builds the table one row after the other.
    pub fn build() -> Result<Self, TableError> {
        let rows = (1..=DIVPOW10_NMAX).map(TableRow::derive).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(rows))
    }

    /// Builds the table deriving rows concurrently; the result is identical to [`Self::build`].
    pub fn build_parallel() -> Result<Self, TableError> {
        let rows =
            (1..=DIVPOW10_NMAX).into_par_iter().map(TableRow::derive).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: Vec<TableRow>) -> Self {
        debug_assert_eq!(rows.len(), DIVPOW10_ROWS);
        let truncated = rows.iter().filter(|row| row.half_value_hi() != 0).count();
        info!(
            "Reciprocal table built: {} rows, {} with a half threshold wider than 64 bits",
            rows.len(),
            truncated
        );
        Self { rows }
    }

    /// Returns the row for precision `n`, addressed as the consumer does (index n - 1).
    pub fn row(&self, n: u32) -> Result<&TableRow, TableError> {
        n.checked_sub(1)
            .and_then(|index| self.rows.get(index as usize))
            .ok_or(TableError::PrecisionOutOfRange(n))
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }
}
