use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use safelist_core::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

const LONG_VERSION: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ", ", env!("GIT_TAG"), ")");

#[derive(Parser)]
#[command(name = "safelist")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Generate a Tailwind CSS safelist from Rust sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a source tree and write the class names it uses to a JSON safelist
    Generate(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Generate(cfg) => {
            info!("Generating safelist from {} into {}", cfg.root.display(), cfg.output.display());

            let result = match safelist_core::run_safelist_generation(&cfg) {
                Ok(result) => result,
                Err(err) if err.is_configuration() => {
                    eprintln!("{} {}", "✗".red().bold(), err);
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            };
            debug!("Skipped {} entries", result.warnings.len());

            let elapsed_ms = start.elapsed().as_millis();

            safelist_core::print_summary(&mut stdout, &result)?;
            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files_scanned.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
