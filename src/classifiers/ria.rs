use crate::classifiers::ClassificationResult;
use crate::classifiers::grule::is_consistent_g_rule;
use crate::classifiers::neighbors::nearest_neighbors;
use crate::classifiers::voting::choose_class;
use crate::core::Dataset;
use crate::metric::{DistanceConfig, Stats};

/// RIA: every training example votes for its decision iff its g-rule is
/// consistent on the whole training set. `k_for_report` only sizes the
/// attached neighbor list; the decision rule does not consume it.
pub fn classify_ria(
    dataset: &Dataset,
    config: &DistanceConfig,
    stats: &Stats,
    training_idx: &[usize],
    test_idx: usize,
    k_for_report: usize,
) -> ClassificationResult {
    let test = &dataset.rows[test_idx];

    let mut support = vec![0usize; dataset.number_of_labels()];
    for &idx in training_idx {
        let training = &dataset.rows[idx];
        if is_consistent_g_rule(dataset, stats, config, test, training, training_idx) {
            support[training.decision_idx] += 1;
        }
    }

    let class_sizes = dataset.class_sizes(training_idx);
    ClassificationResult {
        predicted_standard: choose_class(dataset.labels(), &support, &class_sizes, false),
        predicted_normalized: choose_class(dataset.labels(), &support, &class_sizes, true),
        knn_list: nearest_neighbors(dataset, stats, config, test, training_idx, k_for_report),
    }
}
