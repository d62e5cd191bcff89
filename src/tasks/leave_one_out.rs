use crate::classifiers::{
    Algorithm, Neighbor, classify_kplus_nn, classify_ria, classify_riona,
};
use crate::core::Dataset;
use crate::error::ExperimentError;
use crate::evaluation::ConfusionMatrix;
use crate::metric::{DistanceConfig, Stats};
use crate::tasks::StatsMode;

/// Outcome of one (algorithm, mode, k) experiment across all folds.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRun {
    pub algorithm: Algorithm,
    pub mode: StatsMode,
    pub k: usize,
    pub predicted_standard: Vec<String>,
    pub predicted_normalized: Vec<String>,
    pub neighbor_lists: Vec<Vec<Neighbor>>,
    pub conf_standard: ConfusionMatrix,
    pub conf_normalized: ConfusionMatrix,
}

/// Leave-one-out driver. Owns the global statistics (built once over every
/// row) and runs one experiment per call; in local mode the per-fold
/// statistics are re-induced from each training fold instead.
#[derive(Debug)]
pub struct LeaveOneOut<'a> {
    dataset: &'a Dataset,
    config: DistanceConfig,
    global_stats: Stats,
}

impl<'a> LeaveOneOut<'a> {
    pub fn new(dataset: &'a Dataset, config: DistanceConfig) -> Result<Self, ExperimentError> {
        if dataset.rows.len() < 2 {
            return Err(ExperimentError::DatasetTooSmall);
        }
        let all: Vec<usize> = (0..dataset.rows.len()).collect();
        let global_stats = Stats::build(dataset, &all, &config);
        Ok(LeaveOneOut {
            dataset,
            config,
            global_stats,
        })
    }

    pub fn global_stats(&self) -> &Stats {
        &self.global_stats
    }

    /// `k` clamped to the training-fold size. `None` means the triple
    /// cannot run at all and should be skipped.
    pub fn effective_k(&self, k: usize) -> Option<usize> {
        let k_eff = k.min(self.dataset.rows.len() - 1);
        if k_eff < 1 { None } else { Some(k_eff) }
    }

    /// Runs every fold of one experiment. `n_for_kplus_nn` of `None` means
    /// "use the training-fold size" (the CLI's −1).
    pub fn run(
        &self,
        algorithm: Algorithm,
        mode: StatsMode,
        k: usize,
        n_for_kplus_nn: Option<usize>,
    ) -> ExperimentRun {
        let rows = self.dataset.rows.len();
        let d = self.dataset.number_of_labels();

        let mut predicted_standard = Vec::with_capacity(rows);
        let mut predicted_normalized = Vec::with_capacity(rows);
        let mut neighbor_lists = Vec::with_capacity(rows);
        let mut conf_standard = ConfusionMatrix::new(d);
        let mut conf_normalized = ConfusionMatrix::new(d);

        for test_idx in 0..rows {
            let training_idx: Vec<usize> = (0..rows).filter(|&j| j != test_idx).collect();

            let local_stats;
            let base_stats = match mode {
                StatsMode::Global => &self.global_stats,
                StatsMode::Local => {
                    local_stats = Stats::build(self.dataset, &training_idx, &self.config);
                    &local_stats
                }
            };

            let result = match algorithm {
                Algorithm::Riona => classify_riona(
                    self.dataset,
                    &self.config,
                    base_stats,
                    &training_idx,
                    test_idx,
                    k,
                ),
                Algorithm::Ria => classify_ria(
                    self.dataset,
                    &self.config,
                    base_stats,
                    &training_idx,
                    test_idx,
                    k,
                ),
                Algorithm::Knn => {
                    let n_local = n_for_kplus_nn.unwrap_or(training_idx.len()).max(k);
                    classify_kplus_nn(
                        self.dataset,
                        &self.config,
                        base_stats,
                        &training_idx,
                        test_idx,
                        k,
                        n_local,
                    )
                }
            };

            let true_idx = self.dataset.rows[test_idx].decision_idx;
            let std_idx = self
                .dataset
                .label_index_of(&result.predicted_standard)
                .expect("prediction is a known label");
            let norm_idx = self
                .dataset
                .label_index_of(&result.predicted_normalized)
                .expect("prediction is a known label");
            conf_standard.record(true_idx, std_idx);
            conf_normalized.record(true_idx, norm_idx);

            predicted_standard.push(result.predicted_standard);
            predicted_normalized.push(result.predicted_normalized);
            neighbor_lists.push(result.knn_list);
        }

        ExperimentRun {
            algorithm,
            mode,
            k,
            predicted_standard,
            predicted_normalized,
            neighbor_lists,
            conf_standard,
            conf_normalized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeKind;
    use crate::testing::dataset_from_rows;

    fn colors_ds() -> Dataset {
        dataset_from_rows(
            &[AttributeKind::Nominal],
            &[
                (&["red"], "A"),
                (&["red"], "A"),
                (&["blue"], "B"),
                (&["blue"], "B"),
            ],
        )
    }

    #[test]
    fn too_small_dataset_is_rejected() {
        let ds = dataset_from_rows(&[AttributeKind::Nominal], &[(&["x"], "A")]);
        let err = LeaveOneOut::new(&ds, DistanceConfig::default()).unwrap_err();
        assert!(matches!(err, ExperimentError::DatasetTooSmall));
    }

    #[test]
    fn effective_k_clamps_and_skips() {
        let ds = colors_ds();
        let driver = LeaveOneOut::new(&ds, DistanceConfig::default()).unwrap();
        assert_eq!(driver.effective_k(1), Some(1));
        assert_eq!(driver.effective_k(99), Some(3));
        assert_eq!(driver.effective_k(0), None);
    }

    #[test]
    fn knn_on_two_pure_clusters_is_perfect() {
        let ds = colors_ds();
        let driver = LeaveOneOut::new(&ds, DistanceConfig::default()).unwrap();
        let run = driver.run(Algorithm::Knn, StatsMode::Global, 1, None);

        assert_eq!(run.predicted_standard, ["A", "A", "B", "B"]);
        assert_eq!(run.predicted_normalized, ["A", "A", "B", "B"]);
        for conf in [&run.conf_standard, &run.conf_normalized] {
            assert_eq!(conf.count(0, 0), 2);
            assert_eq!(conf.count(1, 1), 2);
            assert_eq!(conf.count(0, 1), 0);
            assert_eq!(conf.count(1, 0), 0);
        }
    }

    #[test]
    fn confusion_rows_sum_to_class_counts() {
        let ds = dataset_from_rows(
            &[AttributeKind::Numeric],
            &[
                (&["0"], "A"),
                (&["1"], "B"),
                (&["2"], "A"),
                (&["3"], "B"),
                (&["4"], "B"),
            ],
        );
        let driver = LeaveOneOut::new(&ds, DistanceConfig::default()).unwrap();
        for algorithm in [Algorithm::Riona, Algorithm::Ria, Algorithm::Knn] {
            let run = driver.run(algorithm, StatsMode::Local, 2, None);
            assert_eq!(run.conf_standard.row_total(0), 2, "{algorithm}");
            assert_eq!(run.conf_standard.row_total(1), 3, "{algorithm}");
            assert_eq!(run.conf_normalized.total(), 5, "{algorithm}");
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let ds = dataset_from_rows(
            &[AttributeKind::Numeric, AttributeKind::Nominal],
            &[
                (&["0", "red"], "A"),
                (&["1", "red"], "B"),
                (&["2", "blue"], "A"),
                (&["3", "?"], "B"),
                (&["?", "blue"], "A"),
            ],
        );
        let driver = LeaveOneOut::new(&ds, DistanceConfig::default()).unwrap();
        for algorithm in [Algorithm::Riona, Algorithm::Ria, Algorithm::Knn] {
            let first = driver.run(algorithm, StatsMode::Global, 2, None);
            let second = driver.run(algorithm, StatsMode::Global, 2, None);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn neighbor_lists_cover_every_fold() {
        let ds = colors_ds();
        let driver = LeaveOneOut::new(&ds, DistanceConfig::default()).unwrap();
        let run = driver.run(Algorithm::Riona, StatsMode::Global, 2, None);
        assert_eq!(run.neighbor_lists.len(), 4);
        for (test_idx, list) in run.neighbor_lists.iter().enumerate() {
            assert_eq!(list.len(), 2);
            assert!(list.iter().all(|n| n.index != test_idx));
        }
    }
}
