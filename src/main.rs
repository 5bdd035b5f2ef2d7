use clap::Parser;
use hsdscan::{Config, Scanner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hsdscan")]
#[command(version)]
#[command(about = "Scan an assembly FASTA file for hsdM sequences")]
#[command(
    long_about = "hsdscan builds a nucleotide database from an assembly, searches it for hsdM gene sequences with blastn, filters the hits by identity and query coverage, and saves the survivors to CSV.\n\nRequires the NCBI BLAST+ tools (makeblastdb, blastn) on PATH."
)]
struct Cli {
    /// Path to the assembly FASTA file
    assembly: PathBuf,

    /// Path to the hsdM gene sequences FASTA or TXT file
    #[arg(value_name = "HSDM")]
    hsdm: PathBuf,

    /// Number of BLAST threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Minimum identity percentage
    #[arg(long = "min_identity", default_value_t = 90.0)]
    min_identity: f64,

    /// Minimum query coverage percentage
    #[arg(long = "min_coverage", default_value_t = 80.0)]
    min_coverage: f64,

    /// BLAST database path prefix
    #[arg(long, default_value = "assembly_db")]
    db: PathBuf,

    /// Raw search output path
    #[arg(long, default_value = "blast_results.txt")]
    out: PathBuf,

    /// Filtered CSV output path
    #[arg(long, default_value = "filtered_results.csv")]
    csv: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hsdscan=debug")
    } else {
        EnvFilter::new("hsdscan=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Scanner::new validates the CLI-supplied values.
    let config = Config {
        min_identity: cli.min_identity,
        min_coverage: cli.min_coverage,
        num_threads: cli.threads,
        db_path: cli.db,
        search_output: cli.out,
        csv_output: cli.csv,
        ..Config::default()
    };

    let scanner = Scanner::new(config)?;
    scanner.scan(&cli.assembly, &cli.hsdm)?;

    Ok(())
}
