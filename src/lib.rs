//! # hsdscan: Assembly Screening for hsdM Gene Matches
//!
//! This library scans a genome assembly for matches to hsdM reference
//! sequences using the NCBI BLAST+ toolchain, filters the hits by identity
//! and query coverage, and persists the survivors to CSV.
//!
//! ## Overview
//!
//! hsdscan allows you to:
//! - Convert plain-text sequence lists into query FASTA files
//! - Build a nucleotide database from an assembly and search it
//! - Filter tabular hits by identity and coverage thresholds
//! - Persist the filtered hits to a headered CSV
//!
//! The alignment and database-indexing algorithms themselves are external:
//! `makeblastdb` and `blastn` must be installed next to the hsdscan
//! executable or on `PATH`.
//!
//! ## Example Usage
//!
//! ```no_run
//! # use anyhow::Result;
//! # fn main() -> Result<()> {
//! use hsdscan::{Config, Scanner};
//! use std::path::Path;
//!
//! // Create a scanner with default thresholds (90% identity, 80% coverage)
//! let scanner = Scanner::new(Config::default())?;
//!
//! // Scan an assembly for hsdM sequences
//! let report = scanner.scan(
//!     Path::new("assembly.fasta"),
//!     Path::new("hsdM_genes.txt"),
//! )?;
//!
//! println!("{} of {} hits kept", report.kept(), report.total_hits);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is structured in several modules:
//! - `convert`: plain-text to FASTA conversion
//! - `makedb` / `search`: subprocess runners for the BLAST+ tools
//! - `hit`: tabular hit parsing and derived metrics
//! - `report`: summary logging and CSV persistence
//! - `pipeline`: the fixed-order orchestration of the above
//! - `config` / `error`: scan parameters and error types

pub mod binary_finder;
pub mod config;
pub mod convert;
pub mod error;
pub mod hit;
pub mod makedb;
pub mod pipeline;
pub mod report;
pub mod search;

use error::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub use config::Config;
pub use error::ScanError;
pub use hit::{FilteredHit, Hit, Hits};
pub use pipeline::{Pipeline, ScanReport};

/// Main interface to the assembly screen.
///
/// Wraps the pipeline behind a validated configuration; the BLAST+ tools
/// run as separate processes.
#[derive(Debug)]
pub struct Scanner {
    config: Config,
}

impl Scanner {
    /// Creates a new Scanner with the given configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a threshold falls outside 0-100 or the
    /// thread count is zero.
    pub fn new(config: Config) -> Result<Self> {
        if !(0.0..=100.0).contains(&config.min_identity) {
            return Err(ScanError::InvalidConfig(format!(
                "min_identity {} outside 0-100",
                config.min_identity
            )));
        }
        if !(0.0..=100.0).contains(&config.min_coverage) {
            return Err(ScanError::InvalidConfig(format!(
                "min_coverage {} outside 0-100",
                config.min_coverage
            )));
        }
        if config.num_threads == 0 {
            return Err(ScanError::InvalidConfig(
                "num_threads must be positive".to_string(),
            ));
        }

        Ok(Scanner { config })
    }

    /// Scans an assembly FASTA for the hsdM sequences in `hsdm_input`
    /// (FASTA, or plain text with one sequence per line).
    ///
    /// Runs the full pipeline: optional format conversion, database build,
    /// search, filtering, reporting and CSV persistence.
    ///
    /// # Errors
    /// Returns an error if:
    /// - An input file doesn't exist
    /// - A BLAST+ tool is missing or exits non-zero
    /// - The search output cannot be parsed
    pub fn scan(&self, assembly: &Path, hsdm_input: &Path) -> Result<ScanReport> {
        Pipeline::new(self.config.clone()).run(assembly, hsdm_input)
    }

    /// Scans sequences provided as byte arrays.
    ///
    /// Writes the inputs to a temporary directory, points every
    /// intermediate and output file into it, and returns the filtered hits.
    /// Nothing is left in the working directory.
    pub fn scan_bytes(&self, assembly: &[u8], hsdm: &[u8]) -> Result<Vec<FilteredHit>> {
        let temp_dir = TempDir::new()?;

        let assembly_path = temp_dir.path().join("assembly.fasta");
        let hsdm_path = temp_dir.path().join("hsdM_input.fasta");
        fs::write(&assembly_path, assembly)?;
        fs::write(&hsdm_path, hsdm)?;

        let mut config = self.config.clone();
        config.db_path = temp_dir.path().join("assembly_db");
        config.query_fasta = temp_dir.path().join("hsdM.fasta");
        config.search_output = temp_dir.path().join("blast_results.txt");
        config.csv_output = temp_dir.path().join("filtered_results.csv");

        let report = Pipeline::new(config).run(&assembly_path, &hsdm_path)?;
        Ok(report.filtered)
    }
}
