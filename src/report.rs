//! Filter-result reporting and CSV persistence.

use crate::error::Result;
use crate::hit::FilteredHit;
use std::path::Path;
use tracing::info;

/// Number of top-ranked hits echoed to the log.
const TOP_HITS: usize = 5;

/// CSV header: the 12 original columns plus the two derived ones.
const CSV_HEADER: [&str; 14] = [
    "qseqid",
    "sseqid",
    "pident",
    "length",
    "mismatch",
    "gapopen",
    "qstart",
    "qend",
    "sstart",
    "send",
    "evalue",
    "bitscore",
    "query_length",
    "coverage",
];

/// Ranks hits by identity, then coverage, both descending.
///
/// The sort is stable: ties keep their original row order.
pub fn rank(filtered: &[FilteredHit]) -> Vec<&FilteredHit> {
    let mut ranked: Vec<&FilteredHit> = filtered.iter().collect();
    ranked.sort_by(|a, b| {
        b.pident
            .total_cmp(&a.pident)
            .then(b.coverage.total_cmp(&a.coverage))
    });
    ranked
}

/// Logs a summary of the filtered hits.
///
/// Zero survivors is reported informationally, not as an error. Otherwise
/// the surviving count is logged along with the top 5 ranked hits.
pub fn log_summary(filtered: &[FilteredHit]) {
    if filtered.is_empty() {
        info!("No significant matches found based on filtering criteria.");
        return;
    }

    info!(
        "Search completed, found {} matching sequences.",
        filtered.len()
    );
    info!("Top {} matches:", TOP_HITS.min(filtered.len()));
    for (i, hit) in rank(filtered).iter().take(TOP_HITS).enumerate() {
        info!(
            "  {}. Query: {} | Match: {} | Identity: {:.1}% | Coverage: {:.1}%",
            i + 1,
            hit.qseqid,
            hit.sseqid,
            hit.pident,
            hit.coverage
        );
    }
}

/// Persists the filtered hits to CSV.
///
/// The header row is always written, so an empty result set still produces
/// a header-bearing file. No index column is emitted.
pub fn write_csv(filtered: &[FilteredHit], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for hit in filtered {
        writer.serialize(hit)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::Hit;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn filtered(qseqid: &str, pident: f64, qend: i64) -> FilteredHit {
        Hit {
            qseqid: qseqid.to_string(),
            sseqid: "contig_1".to_string(),
            pident,
            length: 100,
            mismatch: 0,
            gapopen: 0,
            qstart: 1,
            qend,
            sstart: 1,
            send: 100,
            evalue: 1e-30,
            bitscore: 150.0,
        }
        .into()
    }

    #[test]
    fn test_rank_orders_by_identity_then_coverage() {
        let hits = vec![
            filtered("a", 92.0, 100),
            filtered("b", 98.0, 90),
            filtered("c", 98.0, 100),
        ];

        let ranked = rank(&hits);
        let order: Vec<&str> = ranked.iter().map(|h| h.qseqid.as_str()).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_rank_ties_keep_original_order() {
        let hits = vec![
            filtered("first", 98.0, 100),
            filtered("second", 98.0, 100),
            filtered("third", 98.0, 100),
        ];

        let ranked = rank(&hits);
        let order: Vec<&str> = ranked.iter().map(|h| h.qseqid.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_result_writes_header_only_csv() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("filtered.csv");

        write_csv(&[], &csv_path).unwrap();

        let content = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(
            content,
            "qseqid,sseqid,pident,length,mismatch,gapopen,qstart,qend,sstart,send,\
             evalue,bitscore,query_length,coverage\n"
        );
    }

    #[test]
    fn test_csv_rows_match_filtered_hits() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("filtered.csv");
        let hits = vec![filtered("a", 98.0, 100), filtered("b", 92.0, 80)];

        write_csv(&hits, &csv_path).unwrap();

        let content = fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("a,contig_1,98.0,100,"));
        assert!(lines[1].ends_with(",100,100.0"));
        assert!(lines[2].starts_with("b,contig_1,92.0,100,"));
        assert!(lines[2].ends_with(",80,80.0"));
    }
}
