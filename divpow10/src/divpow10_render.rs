use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{ReciprocalTable, TableError, TableRow, DIVPOW10_ROWS};

const FIELD_NAMES: &str =
    "offs, src_offs_limb, rem_offs, shift_ll, mult_lo, mult_mid, mult_hi, half_value, sticky_mask";

/// Output format of the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TableFormat {
    /// Bare C initializer rows, one per line
    #[default]
    C,
    /// Self-contained Rust module with an entry struct and a const array
    Rust,
    /// JSON array of rows, including `n` and `half_value_hi`
    Json,
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" => Ok(TableFormat::C),
            "rust" | "rs" => Ok(TableFormat::Rust),
            "json" => Ok(TableFormat::Json),
            _ => Err(format!("'{s}' is not a valid table format, expected c, rust or json")),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::C => write!(f, "c"),
            TableFormat::Rust => write!(f, "rust"),
            TableFormat::Json => write!(f, "json"),
        }
    }
}

/// Formats one row as a C initializer: ` {offs, src, rem, shift, lo, mid, hi, half, mask }, // n`
pub fn render_c_row(row: &TableRow) -> String {
    format!(
        " {{{:2}, {:2}, {}, {:2}, 0x{:08x}, 0x{:016x}, 0x{:016x}, 0x{:016x}, 0x{:08x} }}, // {:2}",
        row.offs(),
        row.src_offs_limb(),
        row.rem_offs(),
        row.shift_ll(),
        row.mult_lo(),
        row.mult_mid(),
        row.mult_hi(),
        row.half_value(),
        row.sticky_mask(),
        row.n()
    )
}

fn render_c(table: &ReciprocalTable) -> String {
    table.iter().map(|row| render_c_row(row) + "\n").collect()
}

fn render_rust(table: &ReciprocalTable) -> String {
    let mut out = String::from("// code generated by divpow10-gen\n//\n");
    out += "// reciprocal table for dividing by 10^n, row n at index n - 1\n";
    out += &format!("// fields: {FIELD_NAMES}\n");
    out += "// rows whose half threshold exceeds 64 bits list half_value_hi in their comment\n\n";

    out += "#[derive(Clone, Copy, Debug, PartialEq, Eq)]\npub struct DivPow10Entry {\n";
    for (name, ty) in [
        ("offs", "u8"),
        ("src_offs_limb", "u8"),
        ("rem_offs", "u8"),
        ("shift_ll", "u8"),
        ("mult_lo", "u32"),
        ("mult_mid", "u64"),
        ("mult_hi", "u64"),
        ("half_value", "u64"),
        ("sticky_mask", "u32"),
    ] {
        out += &format!("    pub {name}: {ty},\n");
    }
    out += "}\n\n";

    out += &format!("pub const DIVPOW10_TABLE: [DivPow10Entry; {DIVPOW10_ROWS}] = [\n");
    for row in table.iter() {
        out += &format!(
            "    DivPow10Entry {{ offs: {}, src_offs_limb: {}, rem_offs: {}, shift_ll: {}, \
             mult_lo: 0x{:08x}, mult_mid: 0x{:016x}, mult_hi: 0x{:016x}, half_value: 0x{:016x}, \
             sticky_mask: 0x{:08x} }}, // {}",
            row.offs(),
            row.src_offs_limb(),
            row.rem_offs(),
            row.shift_ll(),
            row.mult_lo(),
            row.mult_mid(),
            row.mult_hi(),
            row.half_value(),
            row.sticky_mask(),
            row.n()
        );
        if row.half_value_hi() != 0 {
            out += &format!(" half_value_hi 0x{:x}", row.half_value_hi());
        }
        out += "\n";
    }
    out += "];\n";
    out
}

/// Renders the whole table in the requested format.
pub fn render(table: &ReciprocalTable, format: TableFormat) -> Result<String, TableError> {
    match format {
        TableFormat::C => Ok(render_c(table)),
        TableFormat::Rust => Ok(render_rust(table)),
        TableFormat::Json => Ok(serde_json::to_string_pretty(table)? + "\n"),
    }
}
