//! pngsweep - PNG integrity sweep for game asset directories
//!
//! Recursively scans a directory tree and reports every `.png` file that
//! fails structural verification (truncated or otherwise corrupt).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use pngsweep::commands;

/// Sweep a directory tree for corrupt or truncated PNG files
#[derive(Parser)]
#[command(name = "pngsweep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::scan::run(&cli.dir) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
