//! Alignment search via `blastn`.

use crate::binary_finder::find_blastn;
use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// The 12-column tabular output format requested from the search tool.
///
/// Column order must stay in sync with `Hit::from_tab_line`.
pub const OUTFMT: &str =
    "6 qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore";

/// Searches the query sequences against a built nucleotide database.
///
/// Runs `blastn` with the fixed tabular [`OUTFMT`], writing one hit per line
/// to `out_path`. Parallelism is internal to the search tool and controlled
/// by `num_threads`. A non-zero exit is fatal and leaves no usable output.
pub fn run_search(
    query: &Path,
    db_path: &Path,
    out_path: &Path,
    num_threads: usize,
) -> Result<PathBuf> {
    if !query.exists() {
        return Err(ScanError::FileNotFound(query.to_path_buf()));
    }

    let blastn = find_blastn()?;

    let mut cmd = Command::new(&blastn);
    cmd.arg("-query")
        .arg(query)
        .arg("-db")
        .arg(db_path)
        .arg("-out")
        .arg(out_path)
        .arg("-outfmt")
        .arg(OUTFMT)
        .arg("-num_threads")
        .arg(num_threads.to_string());

    debug!("executing: {cmd:?}");

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(ScanError::CommandFailed {
            tool: "blastn".to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(out_path.to_path_buf())
}
