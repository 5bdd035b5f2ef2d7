//! Configuration options for assembly scan operations.
//!
//! This module provides a builder pattern for configuring scan parameters,
//! covering the filtering thresholds, the search thread count, and the file
//! names the pipeline writes.

use std::path::PathBuf;

/// Configuration for an assembly scan.
///
/// This struct contains all parameters that control how the pipeline builds
/// the database, runs the search, and filters the resulting hits. Use the
/// builder pattern to construct configurations with non-default values.
///
/// # Default Values
/// - `min_identity`: 90.0 %
/// - `min_coverage`: 80.0 %
/// - `num_threads`: 4
/// - `db_path`: `assembly_db`
/// - `query_fasta`: `hsdM.fasta`
/// - `search_output`: `blast_results.txt`
/// - `csv_output`: `filtered_results.csv`
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum percent identity (0.0-100.0) a hit must reach
    pub min_identity: f64,

    /// Minimum query coverage percentage (0.0-100.0) a hit must reach
    pub min_coverage: f64,

    /// Number of threads handed to the search tool
    pub num_threads: usize,

    /// Path prefix of the nucleotide database built from the assembly
    pub db_path: PathBuf,

    /// Where a converted plain-text query list is written as FASTA
    pub query_fasta: PathBuf,

    /// Where the raw tabular search output is written
    pub search_output: PathBuf,

    /// Where the filtered hits are persisted as CSV
    pub csv_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_identity: 90.0,
            min_coverage: 80.0,
            num_threads: 4,
            db_path: PathBuf::from("assembly_db"),
            query_fasta: PathBuf::from("hsdM.fasta"),
            search_output: PathBuf::from("blast_results.txt"),
            csv_output: PathBuf::from("filtered_results.csv"),
        }
    }
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Example
    /// ```
    /// use hsdscan::Config;
    ///
    /// let config = Config::builder()
    ///     .min_identity(95.0)
    ///     .min_coverage(90.0)
    ///     .num_threads(8)
    ///     .build();
    /// ```
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for constructing Config instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the minimum percent identity.
    ///
    /// Hits below this identity are filtered out.
    /// Default: 90.0
    pub fn min_identity(mut self, identity: f64) -> Self {
        assert!(
            (0.0..=100.0).contains(&identity),
            "Identity must be between 0.0 and 100.0"
        );
        self.config.min_identity = identity;
        self
    }

    /// Sets the minimum query coverage percentage.
    ///
    /// Hits below this coverage are filtered out.
    /// Default: 80.0
    pub fn min_coverage(mut self, coverage: f64) -> Self {
        assert!(
            (0.0..=100.0).contains(&coverage),
            "Coverage must be between 0.0 and 100.0"
        );
        self.config.min_coverage = coverage;
        self
    }

    /// Sets the number of threads handed to the search tool.
    ///
    /// Default: 4
    pub fn num_threads(mut self, threads: usize) -> Self {
        assert!(threads > 0, "Number of threads must be positive");
        self.config.num_threads = threads;
        self
    }

    /// Sets the path prefix of the nucleotide database.
    ///
    /// Default: `assembly_db`
    pub fn db_path(mut self, path: PathBuf) -> Self {
        self.config.db_path = path;
        self
    }

    /// Sets where a converted query list is written as FASTA.
    ///
    /// Default: `hsdM.fasta`
    pub fn query_fasta(mut self, path: PathBuf) -> Self {
        self.config.query_fasta = path;
        self
    }

    /// Sets where the raw tabular search output is written.
    ///
    /// Default: `blast_results.txt`
    pub fn search_output(mut self, path: PathBuf) -> Self {
        self.config.search_output = path;
        self
    }

    /// Sets where the filtered hits are persisted as CSV.
    ///
    /// Default: `filtered_results.csv`
    pub fn csv_output(mut self, path: PathBuf) -> Self {
        self.config.csv_output = path;
        self
    }

    /// Builds the final Config instance.
    pub fn build(self) -> Config {
        self.config
    }
}

/// Preset configurations for common use cases.
impl Config {
    /// Strict thresholds for near-exact gene copies.
    ///
    /// - 95% minimum identity
    /// - 90% minimum query coverage
    pub fn strict() -> Self {
        Config {
            min_identity: 95.0,
            min_coverage: 90.0,
            ..Default::default()
        }
    }

    /// Permissive thresholds for divergent homologs.
    ///
    /// - 80% minimum identity
    /// - 50% minimum query coverage
    pub fn permissive() -> Self {
        Config {
            min_identity: 80.0,
            min_coverage: 50.0,
            ..Default::default()
        }
    }
}
