use anyhow::{Context, Result};
use clap::Parser;
use divpow10_table::{render_c_row, TableRow};

use crate::commands::print_command;

/// Prints one row together with the intermediate values of its derivation
#[derive(Parser, Debug, Clone)]
#[command(about = "Show how a single table row is derived")]
pub struct ShowCmd {
    /// Power of ten divided by, 1 to 34
    #[clap(short = 'n', long)]
    pub precision: u32,
}

impl ShowCmd {
    pub fn run(&self) -> Result<()> {
        print_command("Show");

        let n = self.precision;
        let (row, details) = TableRow::derive_with_details(n)
            .with_context(|| format!("Failed to derive row {n}"))?;

        println!("{: <16} {}", "n", n);
        println!("{: <16} {}", "byte width", details.byte_width);
        println!("{: <16} {}", "natural offs", details.natural_offs);
        println!("{: <16} {} ({:?})", "offs", row.offs(), row.offset_class().kind());
        println!("{: <16} {}", "d", details.error_exponent);
        println!("{: <16} {}", "modulus bits", details.modulus_bits);
        println!("{: <16} {}", "shift", row.shift());
        println!("{: <16} {}", "window bits", row.offset_class().kind().window_bits());
        println!("{: <16} {}", "dropped bits", row.offset_class().dropped_bits());
        println!("{: <16} {}", "product shift", row.offset_class().kind().product_shift());
        println!("{: <16} 0x{}", "div2", details.reciprocal.to_str_radix(16));
        println!("{: <16} {}", "rem_offs", row.rem_offs());
        println!("{: <16} 0x{:x}", "half_value_hi", row.half_value_hi());
        println!();
        println!("{}", render_c_row(&row));
        Ok(())
    }
}
