use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use serde::Serialize;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SummaryFormat {
    Csv,
    Tsv,
    Json,
}

/// One record per finished experiment, for the optional machine-readable
/// dump next to the per-experiment files.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentSummary {
    pub algorithm: String,
    pub mode: String,
    pub svdm: String,
    pub k: usize,
    pub objects: usize,
    pub attributes: usize,
    pub accuracy_standard: f64,
    pub accuracy_normalized: f64,
    pub balanced_f1_standard: f64,
    pub balanced_f1_normalized: f64,
    pub classify_ms: f64,
}

#[derive(Debug, Default)]
pub struct SummaryLog {
    entries: Vec<ExperimentSummary>,
}

impl SummaryLog {
    pub fn push(&mut self, summary: ExperimentSummary) {
        self.entries.push(summary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, format: SummaryFormat) -> Result<(), Error> {
        match format {
            SummaryFormat::Csv => self.export_with_delimiter(path, ','),
            SummaryFormat::Tsv => self.export_with_delimiter(path, '\t'),
            SummaryFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(
        &self,
        path: P,
        delimiter: char,
    ) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(
            w,
            "algorithm{d}mode{d}svdm{d}k{d}objects{d}attributes{d}accuracy_standard{d}accuracy_normalized{d}balanced_f1_standard{d}balanced_f1_normalized{d}classify_ms",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{:.6}{d}{:.6}{d}{:.6}{d}{:.6}{d}{:.3}",
                s.algorithm,
                s.mode,
                s.svdm,
                s.k,
                s.objects,
                s.attributes,
                s.accuracy_standard,
                s.accuracy_normalized,
                s.balanced_f1_standard,
                s.balanced_f1_normalized,
                s.classify_ms,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}
