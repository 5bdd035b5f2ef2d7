//! Alignment hit representation and tabular parsing.
//!
//! This module provides structures for the 12-column tabular rows emitted
//! by the search tool and for the filtered rows carrying derived metrics.

use crate::error::{Result, ScanError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A single alignment hit, one row of 12-column tabular search output.
#[derive(Debug, Clone)]
pub struct Hit {
    /// Query sequence id
    pub qseqid: String,

    /// Subject (assembly contig) sequence id
    pub sseqid: String,

    /// Percent identity of the aligned region
    pub pident: f64,

    /// Alignment length, including gaps
    pub length: i64,

    /// Number of mismatched bases
    pub mismatch: i64,

    /// Number of gap openings
    pub gapopen: i64,

    /// Query start position (1-based)
    pub qstart: i64,

    /// Query end position (1-based, inclusive)
    pub qend: i64,

    /// Subject start position (1-based)
    pub sstart: i64,

    /// Subject end position (1-based, inclusive)
    pub send: i64,

    /// Expect value of the hit
    pub evalue: f64,

    /// Bit score of the hit
    pub bitscore: f64,
}

impl Hit {
    /// Number of query bases spanned by the alignment.
    pub fn query_length(&self) -> i64 {
        self.qend - self.qstart + 1
    }

    /// Query coverage as a percentage of the alignment length.
    ///
    /// A zero-length alignment yields 0.0 rather than dividing by zero.
    pub fn coverage(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.query_length() as f64 / self.length as f64 * 100.0
    }

    /// Returns true if the hit meets both filtering thresholds (inclusive).
    pub fn passes(&self, min_identity: f64, min_coverage: f64) -> bool {
        self.pident >= min_identity && self.coverage() >= min_coverage
    }

    /// Parses one tab-separated line into a Hit.
    pub fn from_tab_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() != 12 {
            return Err(ScanError::TabParse(format!(
                "row has {} fields, expected 12",
                fields.len()
            )));
        }

        Ok(Hit {
            qseqid: fields[0].to_string(),
            sseqid: fields[1].to_string(),
            pident: parse_field(fields[2], "pident")?,
            length: parse_field(fields[3], "length")?,
            mismatch: parse_field(fields[4], "mismatch")?,
            gapopen: parse_field(fields[5], "gapopen")?,
            qstart: parse_field(fields[6], "qstart")?,
            qend: parse_field(fields[7], "qend")?,
            sstart: parse_field(fields[8], "sstart")?,
            send: parse_field(fields[9], "send")?,
            evalue: parse_field(fields[10], "evalue")?,
            bitscore: parse_field(fields[11], "bitscore")?,
        })
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| ScanError::TabParse(format!("invalid {name} value {raw:?}")))
}

/// Collection of hits parsed from a tabular search output.
#[derive(Debug, Clone, Default)]
pub struct Hits {
    /// Vector of individual hits, in the order emitted by the search tool
    pub hits: Vec<Hit>,
}

impl Hits {
    /// Creates a new empty hit collection.
    pub fn new() -> Self {
        Hits { hits: Vec::new() }
    }

    /// Creates hits from tab-separated text, one row per line.
    ///
    /// Blank lines are skipped; a malformed row is fatal and names the
    /// offending line number.
    pub fn from_tab(text: &str) -> Result<Self> {
        let mut hits = Vec::new();

        for (i, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let hit = Hit::from_tab_line(line).map_err(|e| match e {
                ScanError::TabParse(msg) => {
                    ScanError::TabParse(format!("line {}: {msg}", i + 1))
                }
                other => other,
            })?;
            hits.push(hit);
        }

        Ok(Hits { hits })
    }

    /// Reads and parses a tabular search output file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanError::FileNotFound(path.to_path_buf()));
        }
        Self::from_tab(&fs::read_to_string(path)?)
    }

    /// Applies the identity and coverage thresholds, keeping input order.
    pub fn filter(&self, min_identity: f64, min_coverage: f64) -> Vec<FilteredHit> {
        self.hits
            .iter()
            .filter(|h| h.passes(min_identity, min_coverage))
            .cloned()
            .map(FilteredHit::from)
            .collect()
    }

    /// Returns an iterator over the hits.
    pub fn iter(&self) -> impl Iterator<Item = &Hit> {
        self.hits.iter()
    }

    /// Returns the number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if there are no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// A hit that survived filtering, with the derived metrics attached.
///
/// Field order matches the persisted CSV column order.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredHit {
    pub qseqid: String,
    pub sseqid: String,
    pub pident: f64,
    pub length: i64,
    pub mismatch: i64,
    pub gapopen: i64,
    pub qstart: i64,
    pub qend: i64,
    pub sstart: i64,
    pub send: i64,
    pub evalue: f64,
    pub bitscore: f64,
    pub query_length: i64,
    pub coverage: f64,
}

impl From<Hit> for FilteredHit {
    fn from(hit: Hit) -> Self {
        let query_length = hit.query_length();
        let coverage = hit.coverage();
        FilteredHit {
            qseqid: hit.qseqid,
            sseqid: hit.sseqid,
            pident: hit.pident,
            length: hit.length,
            mismatch: hit.mismatch,
            gapopen: hit.gapopen,
            qstart: hit.qstart,
            qend: hit.qend,
            sstart: hit.sstart,
            send: hit.send,
            evalue: hit.evalue,
            bitscore: hit.bitscore,
            query_length,
            coverage,
        }
    }
}
