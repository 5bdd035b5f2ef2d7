//! Integration tests for the filter/report stage, driven by synthetic
//! search output so no BLAST+ install is needed.

use anyhow::Result;
use hsdscan::{Config, Pipeline, Scanner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_in(dir: &Path) -> Config {
    Config {
        db_path: dir.join("assembly_db"),
        query_fasta: dir.join("hsdM.fasta"),
        search_output: dir.join("blast_results.txt"),
        csv_output: dir.join("filtered_results.csv"),
        ..Config::default()
    }
}

#[test]
fn test_filter_and_save_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(temp_dir.path());
    let table = config.search_output.clone();
    let csv = config.csv_output.clone();

    // Four hits: kept, low identity, low coverage, kept.
    fs::write(
        &table,
        "hsdM_gene_1\tcontig_1\t98.5\t100\t1\t0\t1\t100\t5000\t5099\t1e-50\t185.0\n\
         hsdM_gene_1\tcontig_2\t85.0\t100\t15\t0\t1\t100\t200\t299\t1e-20\t90.0\n\
         hsdM_gene_2\tcontig_1\t95.0\t100\t3\t1\t1\t70\t800\t870\t1e-30\t120.0\n\
         hsdM_gene_2\tcontig_3\t92.0\t200\t16\t0\t1\t180\t40\t239\t1e-60\t210.0\n",
    )?;

    let report = Pipeline::new(config).filter_and_save(&table)?;

    assert_eq!(report.total_hits, 4);
    assert_eq!(report.kept(), 2);

    // CSV keeps the surviving rows in their original order.
    let content = fs::read_to_string(&csv)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("qseqid,sseqid,pident"));
    assert!(lines[1].starts_with("hsdM_gene_1,contig_1,98.5,"));
    assert!(lines[2].starts_with("hsdM_gene_2,contig_3,92.0,"));

    Ok(())
}

#[test]
fn test_exact_threshold_hits_are_retained() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(temp_dir.path());
    let table = config.search_output.clone();

    // pident exactly 90.0, coverage exactly (80 / 100) * 100 = 80.0
    fs::write(
        &table,
        "hsdM_gene_1\tcontig_1\t90.0\t100\t8\t1\t1\t80\t100\t179\t1e-25\t95.0\n",
    )?;

    let report = Pipeline::new(config).filter_and_save(&table)?;
    assert_eq!(report.kept(), 1);

    Ok(())
}

#[test]
fn test_empty_search_output_still_writes_header() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(temp_dir.path());
    let table = config.search_output.clone();
    let csv = config.csv_output.clone();

    fs::write(&table, "")?;

    let report = Pipeline::new(config).filter_and_save(&table)?;
    assert_eq!(report.total_hits, 0);
    assert_eq!(report.kept(), 0);

    let content = fs::read_to_string(&csv)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("query_length,coverage"));

    Ok(())
}

#[test]
fn test_malformed_row_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(temp_dir.path());
    let table = config.search_output.clone();

    fs::write(&table, "not\tenough\tcolumns\n")?;

    let err = Pipeline::new(config).filter_and_save(&table).unwrap_err();
    assert!(err.to_string().contains("expected 12"));

    Ok(())
}

#[test]
fn test_txt_query_conversion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(temp_dir.path());
    let fasta = config.query_fasta.clone();

    let txt = temp_dir.path().join("hsdM_genes.txt");
    fs::write(&txt, "ACGT\nTTTT\n")?;

    let resolved = Pipeline::new(config).resolve_query(&txt)?;

    assert_eq!(resolved, fasta);
    assert_eq!(
        fs::read_to_string(&fasta)?,
        ">hsdM_gene_1\nACGT\n>hsdM_gene_2\nTTTT\n"
    );

    Ok(())
}

#[test]
fn test_config_presets() {
    // Preset configurations can always back a scanner
    let _strict = Scanner::new(Config::strict()).unwrap();
    let _permissive = Scanner::new(Config::permissive()).unwrap();
}

#[test]
fn test_scan_rejects_missing_inputs() {
    let scanner = Scanner::new(Config::default()).unwrap();

    assert!(scanner
        .scan(
            Path::new("nonexistent_assembly.fasta"),
            Path::new("nonexistent_hsdM.txt"),
        )
        .is_err());
}
