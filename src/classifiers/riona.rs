use crate::classifiers::ClassificationResult;
use crate::classifiers::grule::is_consistent_g_rule;
use crate::classifiers::neighbors::nearest_neighbors;
use crate::classifiers::voting::choose_class;
use crate::core::Dataset;
use crate::metric::{DistanceConfig, Stats};

/// RIONA: every neighbor votes for its decision iff its g-rule is
/// consistent on the neighborhood itself.
pub fn classify_riona(
    dataset: &Dataset,
    config: &DistanceConfig,
    stats: &Stats,
    training_idx: &[usize],
    test_idx: usize,
    k: usize,
) -> ClassificationResult {
    let test = &dataset.rows[test_idx];

    let neighbors = nearest_neighbors(dataset, stats, config, test, training_idx, k);
    let neighborhood: Vec<usize> = neighbors.iter().map(|n| n.index).collect();

    let mut support = vec![0usize; dataset.number_of_labels()];
    for &idx in &neighborhood {
        let training = &dataset.rows[idx];
        if is_consistent_g_rule(dataset, stats, config, test, training, &neighborhood) {
            support[training.decision_idx] += 1;
        }
    }

    let class_sizes = dataset.class_sizes(training_idx);
    ClassificationResult {
        predicted_standard: choose_class(dataset.labels(), &support, &class_sizes, false),
        predicted_normalized: choose_class(dataset.labels(), &support, &class_sizes, true),
        knn_list: neighbors,
    }
}
