//! Conversion of plain-text sequence lists into FASTA.
//!
//! hsdM reference sequences may arrive as a bare text file with one sequence
//! per line. The search tool only accepts FASTA, so each line becomes a
//! record with a synthesized `hsdM_gene_<n>` identifier.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Returns true if the path looks like a plain-text sequence list.
pub fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Converts a one-sequence-per-line text file into a FASTA file.
///
/// Record `i` (1-indexed) gets the header `hsdM_gene_<i>`; the body is the
/// trimmed line content. Sequence alphabets are not validated, and any
/// existing file at `fasta_path` is overwritten.
///
/// Returns the number of records written.
pub fn txt_to_fasta(txt_path: &Path, fasta_path: &Path) -> Result<usize> {
    let reader = BufReader::new(File::open(txt_path)?);
    let mut writer = BufWriter::new(File::create(fasta_path)?);

    let mut count = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        writeln!(writer, ">hsdM_gene_{}", i + 1)?;
        writeln!(writer, "{}", line.trim())?;
        count += 1;
    }
    writer.flush()?;

    Ok(count)
}
