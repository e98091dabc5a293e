//! Scan command implementation
//!
//! Recursively sweeps a directory tree and prints one line for every `.png`
//! file that fails structural verification, followed by a count of the
//! files examined.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

use crate::verify;

/// Run the scan command.
///
/// # Arguments
/// * `root` - Directory to sweep for `.png` files
///
/// # Returns
/// Exit code: always 0 once the sweep completes; corrupt files are reported
/// on stdout, not through the exit code.
pub fn run(root: &Path) -> Result<ExitCode> {
    if !root.is_dir() {
        anyhow::bail!("Input path is not a directory: {}", root.display());
    }

    let root = logical_absolute(root);
    println!("{} {}", "Directory:".cyan().bold(), root.display());

    let mut count = 0usize;
    for entry in WalkDir::new(&root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if !has_png_suffix(entry.path()) {
            continue;
        }
        // Counted before verification: the summary reports files examined,
        // failures included.
        count += 1;
        if verify::verify_png(entry.path()).is_err() {
            println!(
                "File {} failed verification!",
                entry.path().display().to_string().red()
            );
        }
    }

    println!("Verified {} png files", count);
    Ok(ExitCode::SUCCESS)
}

/// Returns true if the file name ends with the literal suffix `.png`.
///
/// Exact, case-sensitive suffix match on the name: `.PNG` does not count,
/// a bare `.png` does.
fn has_png_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(b".png"))
        .unwrap_or(false)
}

/// Absolute form of `path` without resolving symlinks (cwd-join only).
fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
