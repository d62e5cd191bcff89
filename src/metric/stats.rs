use std::collections::HashMap;

use crate::core::{AttributeKind, Dataset};
use crate::metric::DistanceConfig;

/// Observed min/max/range of a numeric attribute over a row subset. All
/// zeros with `has_value = false` when the subset held no usable value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericStat {
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub has_value: bool,
}

/// SVDM statistics of a nominal attribute over a row subset: the observed
/// value tokens (first-appearance order) and the symmetric distance matrix.
#[derive(Debug, Clone, Default)]
pub struct NominalStat {
    pub values: Vec<String>,
    pub index: HashMap<String, usize>,
    pub dist: Vec<Vec<f64>>,
}

/// Per-attribute statistics induced from a chosen row subset. Both vectors
/// span every attribute; the slot of the other kind stays at its inert
/// default.
#[derive(Debug, Clone)]
pub struct Stats {
    pub numeric: Vec<NumericStat>,
    pub nominal: Vec<NominalStat>,
}

impl Stats {
    /// Derives statistics exclusively from the rows addressed by `indices`.
    /// Total over its inputs: an empty subset yields empty statistics.
    pub fn build(dataset: &Dataset, indices: &[usize], config: &DistanceConfig) -> Stats {
        let m = dataset.number_of_attributes();
        let mut numeric = vec![NumericStat::default(); m];
        let mut nominal: Vec<NominalStat> = (0..m).map(|_| NominalStat::default()).collect();

        for (a, kind) in dataset.kinds.iter().enumerate() {
            match kind {
                AttributeKind::Numeric => numeric[a] = numeric_stat(dataset, indices, a),
                AttributeKind::Nominal => nominal[a] = nominal_stat(dataset, indices, a, config),
            }
        }

        Stats { numeric, nominal }
    }
}

fn numeric_stat(dataset: &Dataset, indices: &[usize], attr: usize) -> NumericStat {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut has_value = false;

    for &idx in indices {
        let cell = &dataset.rows[idx].values[attr];
        if cell.missing {
            continue;
        }
        has_value = true;
        min = min.min(cell.num);
        max = max.max(cell.num);
    }

    if !has_value {
        return NumericStat::default();
    }
    NumericStat {
        min,
        max,
        range: max - min,
        has_value,
    }
}

fn nominal_stat(
    dataset: &Dataset,
    indices: &[usize],
    attr: usize,
    config: &DistanceConfig,
) -> NominalStat {
    let d = dataset.number_of_labels();

    let mut values: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<Vec<usize>> = Vec::new();
    let mut totals: Vec<usize> = Vec::new();

    for &idx in indices {
        let row = &dataset.rows[idx];
        let cell = &row.values[attr];
        if cell.missing {
            continue;
        }
        let v = match index.get(&cell.raw) {
            Some(&v) => v,
            None => {
                let v = values.len();
                index.insert(cell.raw.clone(), v);
                values.push(cell.raw.clone());
                counts.push(vec![0; d]);
                totals.push(0);
                v
            }
        };
        counts[v][row.decision_idx] += 1;
        totals[v] += 1;
    }

    // L1 distance between the class-conditional value distributions.
    let vcount = values.len();
    let mut dist = vec![vec![0.0f64; vcount]; vcount];
    for i in 0..vcount {
        for j in i..vcount {
            let mut sum = 0.0;
            for c in 0..d {
                let pi = ratio(counts[i][c], totals[i]);
                let pj = ratio(counts[j][c], totals[j]);
                sum += (pi - pj).abs();
            }
            if config.svdm_prime {
                sum *= 0.5;
            }
            dist[i][j] = sum;
            dist[j][i] = sum;
        }
    }

    NominalStat {
        values,
        index,
        dist,
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
