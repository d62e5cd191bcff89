use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use crate::classifiers::{Algorithm, Neighbor};
use crate::core::{AttributeKind, Dataset};
use crate::evaluation::{ConfusionMatrix, balanced_metrics, per_class_metrics};
use crate::metric::{Stats, SvdmVariant};
use crate::tasks::StatsMode;

/// CPU time spent in the four measured phases, in milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimes {
    pub read_ms: f64,
    pub preprocess_ms: f64,
    pub classify_ms: f64,
    pub write_ms: f64,
}

impl PhaseTimes {
    pub fn total_ms(&self) -> f64 {
        self.read_ms + self.preprocess_ms + self.classify_ms + self.write_ms
    }
}

/// One line per row: id, original tokens (missing echoed as the missing
/// token), true label and both predictions.
pub fn write_predictions_file(
    path: &Path,
    dataset: &Dataset,
    predicted_standard: &[String],
    predicted_normalized: &[String],
    missing_token: &str,
) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    for (i, row) in dataset.rows.iter().enumerate() {
        write!(w, "{}", row.id)?;
        for cell in &row.values {
            if cell.missing {
                write!(w, ",{missing_token}")?;
            } else {
                write!(w, ",{}", cell.raw)?;
            }
        }
        writeln!(
            w,
            ",{},{},{}",
            row.decision, predicted_standard[i], predicted_normalized[i]
        )?;
    }
    w.flush()
}

/// One line per fold: `i+1,len,(idx+1,dist),…` with 1-based row ids.
pub fn write_neighbors_file(path: &Path, lists: &[Vec<Neighbor>]) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    for (i, list) in lists.iter().enumerate() {
        write!(w, "{},{}", i + 1, list.len())?;
        for nb in list {
            write!(w, ",({},{})", nb.index + 1, nb.dist)?;
        }
        writeln!(w)?;
    }
    w.flush()
}

/// The human-readable statistics report of one experiment.
#[allow(clippy::too_many_arguments)]
pub fn write_report_file(
    path: &Path,
    dataset: &Dataset,
    global_stats: &Stats,
    input_file: &Path,
    algorithm: Algorithm,
    mode: StatsMode,
    svdm: SvdmVariant,
    k: usize,
    times: &PhaseTimes,
    conf_standard: &ConfusionMatrix,
    conf_normalized: &ConfusionMatrix,
) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(w, "InputFile: {}", input_file.display())?;
    writeln!(w, "Attributes: {}", dataset.number_of_attributes())?;
    writeln!(w, "Objects: {}", dataset.rows.len())?;
    writeln!(w, "Algorithm: {algorithm}")?;
    writeln!(w, "Mode: {mode}")?;
    writeln!(w, "k: {k}")?;
    writeln!(w, "NominalDistance: {svdm}")?;
    writeln!(
        w,
        "Times(ms): read={}, preprocess={}, classify={}, write={}, total={}",
        times.read_ms,
        times.preprocess_ms,
        times.classify_ms,
        times.write_ms,
        times.total_ms()
    )?;

    writeln!(w, "d (number of classes): {}", dataset.number_of_labels())?;
    let all: Vec<usize> = (0..dataset.rows.len()).collect();
    let class_counts = dataset.class_sizes(&all);
    write!(w, "ClassCounts:")?;
    for (label, count) in dataset.labels().iter().zip(&class_counts) {
        write!(w, " {label}={count}")?;
    }
    writeln!(w)?;

    if mode == StatsMode::Local {
        writeln!(w, "Note: Local mode recomputes statistics per test object.")?;
        writeln!(w, "Global stats below are provided for reference.")?;
    }

    writeln!(w, "NumericStats (global):")?;
    for (a, kind) in dataset.kinds.iter().enumerate() {
        if *kind != AttributeKind::Numeric {
            continue;
        }
        let ns = &global_stats.numeric[a];
        writeln!(
            w,
            "  attr[{a}] {}: min={}, max={}, range={}",
            dataset.attribute_names[a], ns.min, ns.max, ns.range
        )?;
    }

    writeln!(w, "NominalSVDM (global):")?;
    for (a, kind) in dataset.kinds.iter().enumerate() {
        if *kind != AttributeKind::Nominal {
            continue;
        }
        let ns = &global_stats.nominal[a];
        write!(w, "  attr[{a}] {} values:", dataset.attribute_names[a])?;
        for v in &ns.values {
            write!(w, " {v}")?;
        }
        writeln!(w)?;
        for (i, v) in ns.values.iter().enumerate() {
            write!(w, "    {v}:")?;
            for j in 0..ns.values.len() {
                write!(w, " {}", ns.dist[i][j])?;
            }
            writeln!(w)?;
        }
    }

    write_confusion(&mut w, "Standard", dataset, conf_standard)?;
    write_confusion(&mut w, "Normalized", dataset, conf_normalized)?;

    let metrics_std = per_class_metrics(conf_standard);
    let metrics_norm = per_class_metrics(conf_normalized);
    writeln!(w, "PerClassMetrics (standard / normalized):")?;
    for (i, label) in dataset.labels().iter().enumerate() {
        writeln!(
            w,
            "  {label} Precision={} Recall={} F1={} | NPrecision={} NRecall={} NF1={}",
            metrics_std[i].precision,
            metrics_std[i].recall,
            metrics_std[i].f1,
            metrics_norm[i].precision,
            metrics_norm[i].recall,
            metrics_norm[i].f1
        )?;
    }

    let bal_std = balanced_metrics(&metrics_std);
    let bal_norm = balanced_metrics(&metrics_norm);
    writeln!(w, "BalancedMetrics:")?;
    writeln!(
        w,
        "  Bal_Precision={} Bal_Recall={} Bal_F1={}",
        bal_std.precision, bal_std.recall, bal_std.f1
    )?;
    writeln!(
        w,
        "  NBal_Precision={} NBal_Recall={} NBal_F1={}",
        bal_norm.precision, bal_norm.recall, bal_norm.f1
    )?;

    w.flush()
}

fn write_confusion(
    w: &mut impl Write,
    name: &str,
    dataset: &Dataset,
    conf: &ConfusionMatrix,
) -> Result<(), Error> {
    writeln!(w, "ConfusionMatrix {name} (rows=true, cols=pred):")?;
    write!(w, "  labels:")?;
    for label in dataset.labels() {
        write!(w, " {label}")?;
    }
    writeln!(w)?;
    for (i, label) in dataset.labels().iter().enumerate() {
        write!(w, "  {label}:")?;
        for j in 0..conf.size() {
            write!(w, " {}", conf.count(i, j))?;
        }
        writeln!(w)?;
    }
    Ok(())
}
