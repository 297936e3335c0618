use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Prints the command banner to stderr, keeping stdout for the generated table.
pub fn print_command(name: &str) {
    eprintln!("{} {}", format!("{: >12}", "Command").bright_green().bold(), name);
    eprintln!();
}

/// Writes `content` to `output`, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write table to {}", path.display()))?;
            info!("{} Table written to {}", "[OK]".green().bold(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes()).context("Failed to write table to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
