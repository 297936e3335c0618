use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use divpow10_table::{render, verify_table, ReciprocalTable, TableFormat, VerifyOptions};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

use crate::commands::{print_command, write_output};

/// Builds the reciprocal table and renders it
#[derive(Parser, Debug, Clone)]
#[command(about = "Generate the reciprocal table for division by 10^n")]
pub struct GenerateCmd {
    /// Output format: c, rust or json
    #[clap(short = 'f', long, env = "DIVPOW10_FORMAT", default_value = "c")]
    pub format: TableFormat,

    /// Output file, stdout when omitted
    #[clap(short = 'o', long, env = "DIVPOW10_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Derive rows one after another instead of in parallel
    #[clap(long, default_value_t = false)]
    pub sequential: bool,

    /// Verify the table with this many random quotients per row before writing it
    #[clap(long, value_name = "SAMPLES")]
    pub verify: Option<usize>,
}

impl fmt::Display for GenerateCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{: <12} {}", "format", self.format)?;
        match &self.output {
            Some(path) => writeln!(f, "{: <12} {}", "output", path.display())?,
            None => writeln!(f, "{: <12} stdout", "output")?,
        }
        writeln!(f, "{: <12} {}", "sequential", self.sequential)?;
        match self.verify {
            Some(samples) => write!(f, "{: <12} {} samples", "verify", samples),
            None => write!(f, "{: <12} off", "verify"),
        }
    }
}

impl GenerateCmd {
    pub fn run(&self) -> Result<()> {
        print_command("Generate");
        info!("Options:\n{self}");

        let table = if self.sequential {
            ReciprocalTable::build()
        } else {
            ReciprocalTable::build_parallel()
        }
        .context("Failed to build the reciprocal table")?;

        if let Some(samples) = self.verify {
            let reports = verify_table(&table, &VerifyOptions { samples, ..Default::default() })
                .context("Generated table failed verification")?;
            let checked: usize = reports.iter().map(|r| r.checked).sum();
            info!("{} {} dividends verified", "[OK]".green().bold(), checked);
        }

        let content = render(&table, self.format).context("Failed to render the table")?;
        write_output(&content, self.output.as_deref())
    }
}
