//! Nucleotide database construction via `makeblastdb`.

use crate::binary_finder::find_makeblastdb;
use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Builds a nucleotide database from an assembly FASTA.
///
/// Runs `makeblastdb -in <fasta> -dbtype nucl -out <db_path>`. The index
/// files land next to `db_path`, which is also what the search tool takes
/// as its `-db` argument. A non-zero exit is fatal; no partial database is
/// reused.
pub fn build_database(fasta: &Path, db_path: &Path) -> Result<PathBuf> {
    if !fasta.exists() {
        return Err(ScanError::FileNotFound(fasta.to_path_buf()));
    }

    let makeblastdb = find_makeblastdb()?;

    let mut cmd = Command::new(&makeblastdb);
    cmd.arg("-in")
        .arg(fasta)
        .arg("-dbtype")
        .arg("nucl")
        .arg("-out")
        .arg(db_path);

    debug!("executing: {cmd:?}");

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(ScanError::CommandFailed {
            tool: "makeblastdb".to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(db_path.to_path_buf())
}
