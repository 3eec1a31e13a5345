use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{GenerateResult, IoWarning};

pub fn print_summary<W: Write>(writer: &mut W, result: &GenerateResult) -> io::Result<()> {
    debug!("Printing summary for {} classes", result.class_count);
    writeln!(
        writer,
        "{} Generated safelist with {} classes from {}",
        "✓".green().bold(),
        result.class_count.to_string().cyan(),
        result.root.display()
    )?;
    writeln!(writer, "  Wrote {}", result.output.display().to_string().blue())?;

    if !result.warnings.is_empty() {
        print_skipped(writer, &result.warnings)?;
    }

    writer.flush()?;
    Ok(())
}

fn print_skipped<W: Write>(writer: &mut W, warnings: &[IoWarning]) -> io::Result<()> {
    writeln!(
        writer,
        "\n{} Skipped {} unreadable {}:",
        "⚠".yellow().bold(),
        warnings.len().to_string().yellow(),
        if warnings.len() == 1 { "entry" } else { "entries" }
    )?;
    for (idx, warning) in warnings.iter().enumerate() {
        let prefix = if idx == warnings.len() - 1 { "└──" } else { "├──" };
        writeln!(writer, "{}  {}", prefix.dimmed(), warning)?;
    }
    Ok(())
}
