use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use divpow10_table::{
    verify_row, verify_table, ReciprocalTable, RowReport, TableRow, VerifyOptions,
};
use std::fmt;
use std::time::Instant;
use tracing::info;

use crate::commands::print_command;

/// Checks the table against a digit-by-digit reference division
#[derive(Parser, Debug, Clone)]
#[command(about = "Verify the reciprocal table against a reference division")]
pub struct VerifyCmd {
    /// Random quotients drawn per row
    #[clap(short = 's', long, env = "DIVPOW10_SAMPLES", default_value_t = 1000)]
    pub samples: usize,

    /// Seed of the per-row random generators
    #[clap(long, env = "DIVPOW10_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Verify a single row instead of the whole table
    #[clap(short = 'n', long)]
    pub precision: Option<u32>,
}

impl fmt::Display for VerifyCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{: <12} {}", "samples", self.samples)?;
        writeln!(f, "{: <12} {}", "seed", self.seed)?;
        match self.precision {
            Some(n) => write!(f, "{: <12} {}", "precision", n),
            None => write!(f, "{: <12} all", "precision"),
        }
    }
}

fn log_report(report: &RowReport) {
    let [exact, below, half, above] = report.rounding;
    info!(
        "n={:2} checked={} corrected={} exact={} below={} half={} above={}",
        report.n, report.checked, report.corrected, exact, below, half, above
    );
}

impl VerifyCmd {
    pub fn run(&self) -> Result<()> {
        print_command("Verify");
        info!("Options:\n{self}");

        let options = VerifyOptions { samples: self.samples, seed: self.seed };
        let start = Instant::now();

        let reports = match self.precision {
            Some(n) => {
                let row =
                    TableRow::derive(n).with_context(|| format!("Failed to derive row {n}"))?;
                let report = verify_row(&row, options.samples, &mut options.rng_for(n))
                    .with_context(|| format!("Row {n} failed verification"))?;
                vec![report]
            }
            None => {
                let table = ReciprocalTable::build_parallel()
                    .context("Failed to build the reciprocal table")?;
                verify_table(&table, &options).context("Table failed verification")?
            }
        };

        reports.iter().for_each(log_report);

        let checked: usize = reports.iter().map(|r| r.checked).sum();
        info!(
            "{} {} rows, {} dividends verified in {:.2?}",
            "[OK]".green().bold(),
            reports.len(),
            checked,
            start.elapsed()
        );
        Ok(())
    }
}
