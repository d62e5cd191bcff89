use crate::classifiers::ClassificationResult;
use crate::classifiers::neighbors::nearest_neighbors;
use crate::classifiers::voting::choose_class;
use crate::core::Dataset;
use crate::metric::{DistanceConfig, Stats};

/// Two-stage k+NN: pick a preliminary neighborhood of `n_local` rows under
/// the supplied base metric, re-induce the statistics from that
/// neighborhood alone, then choose the final k neighbors under the local
/// metric. The clamp order matters: `n_local` is raised to `k` before it is
/// capped at the training size, so the final selection never has fewer than
/// `min(k, |training|)` candidates.
pub fn classify_kplus_nn(
    dataset: &Dataset,
    config: &DistanceConfig,
    base_stats: &Stats,
    training_idx: &[usize],
    test_idx: usize,
    k: usize,
    n_local: usize,
) -> ClassificationResult {
    let test = &dataset.rows[test_idx];
    let n_local = n_local.max(k).min(training_idx.len());

    let preliminary = nearest_neighbors(dataset, base_stats, config, test, training_idx, n_local);
    let preliminary_idx: Vec<usize> = preliminary.iter().map(|n| n.index).collect();

    let local_stats = Stats::build(dataset, &preliminary_idx, config);
    let neighbors = nearest_neighbors(dataset, &local_stats, config, test, &preliminary_idx, k);

    let mut support = vec![0usize; dataset.number_of_labels()];
    for nb in &neighbors {
        support[dataset.rows[nb.index].decision_idx] += 1;
    }

    let class_sizes = dataset.class_sizes(training_idx);
    ClassificationResult {
        predicted_standard: choose_class(dataset.labels(), &support, &class_sizes, false),
        predicted_normalized: choose_class(dataset.labels(), &support, &class_sizes, true),
        knn_list: neighbors,
    }
}
