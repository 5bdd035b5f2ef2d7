//! The fixed scan pipeline: convert, build, search, filter.
//!
//! Stages run in a fixed order with no retries; the first failure aborts
//! the whole run. Each stage is also callable on its own.

use crate::config::Config;
use crate::convert;
use crate::error::{Result, ScanError};
use crate::hit::{FilteredHit, Hits};
use crate::makedb;
use crate::report;
use crate::search;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one pipeline run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Rows parsed from the raw search output
    pub total_hits: usize,

    /// Rows surviving the identity/coverage thresholds, in input order
    pub filtered: Vec<FilteredHit>,

    /// Where the filtered rows were persisted
    pub csv_output: PathBuf,
}

impl ScanReport {
    /// Number of hits that survived filtering.
    pub fn kept(&self) -> usize {
        self.filtered.len()
    }
}

/// Runs the scan stages in their fixed order.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Checks that both inputs exist before any tool is spawned.
    pub fn validate_inputs(&self, assembly: &Path, hsdm_input: &Path) -> Result<()> {
        if !assembly.exists() {
            return Err(ScanError::FileNotFound(assembly.to_path_buf()));
        }
        if !hsdm_input.exists() {
            return Err(ScanError::FileNotFound(hsdm_input.to_path_buf()));
        }
        Ok(())
    }

    /// Resolves the hsdM input to a FASTA path.
    ///
    /// A plain-text sequence list is converted to the configured query FASTA
    /// path (overwriting any previous file there); anything else is taken to
    /// be FASTA already and used in place.
    pub fn resolve_query(&self, hsdm_input: &Path) -> Result<PathBuf> {
        if convert::is_plain_text(hsdm_input) {
            info!("Converting TXT to FASTA...");
            let records = convert::txt_to_fasta(hsdm_input, &self.config.query_fasta)?;
            info!(
                "Wrote {} query records to {}",
                records,
                self.config.query_fasta.display()
            );
            Ok(self.config.query_fasta.clone())
        } else {
            Ok(hsdm_input.to_path_buf())
        }
    }

    /// Runs the full pipeline against an assembly FASTA and an hsdM input
    /// (FASTA or plain-text sequence list).
    pub fn run(&self, assembly: &Path, hsdm_input: &Path) -> Result<ScanReport> {
        self.validate_inputs(assembly, hsdm_input)?;

        let query = self.resolve_query(hsdm_input)?;

        info!("Creating BLAST database...");
        let db = makedb::build_database(assembly, &self.config.db_path)?;

        info!("Running BLAST search...");
        let table = search::run_search(
            &query,
            &db,
            &self.config.search_output,
            self.config.num_threads,
        )?;

        info!("Filtering and saving results...");
        self.filter_and_save(&table)
    }

    /// The filter/report stage on its own: parses a tabular search output,
    /// applies the thresholds, logs the summary and persists the CSV.
    pub fn filter_and_save(&self, table: &Path) -> Result<ScanReport> {
        let hits = Hits::from_file(table)?;
        let filtered = hits.filter(self.config.min_identity, self.config.min_coverage);

        report::log_summary(&filtered);
        report::write_csv(&filtered, &self.config.csv_output)?;
        info!("Full results saved to: {}", self.config.csv_output.display());

        Ok(ScanReport {
            total_hits: hits.len(),
            filtered,
            csv_output: self.config.csv_output.clone(),
        })
    }
}
