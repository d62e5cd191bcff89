use std::cmp::Ordering;

use crate::core::{Dataset, Instance};
use crate::metric::{DistanceConfig, Stats, instance_distance};

/// Candidate row ranked by distance to a test instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub dist: f64,
}

/// Ranks `candidates` by distance to `test` and returns the first `k`.
/// Ties on distance break on the lower dataset index, which keeps the
/// ordering deterministic. `k` beyond the candidate count is clamped.
pub fn nearest_neighbors(
    dataset: &Dataset,
    stats: &Stats,
    config: &DistanceConfig,
    test: &Instance,
    candidates: &[usize],
    k: usize,
) -> Vec<Neighbor> {
    let mut neighbors: Vec<Neighbor> = candidates
        .iter()
        .map(|&index| Neighbor {
            index,
            dist: instance_distance(dataset, stats, config, test, &dataset.rows[index]),
        })
        .collect();

    neighbors.sort_unstable_by(|a, b| match a.dist.partial_cmp(&b.dist) {
        Some(Ordering::Equal) | None => a.index.cmp(&b.index),
        Some(order) => order,
    });

    neighbors.truncate(k);
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeKind;
    use crate::testing::dataset_from_rows;

    fn line_ds() -> Dataset {
        dataset_from_rows(
            &[AttributeKind::Numeric],
            &[
                (&["0"], "A"),
                (&["9"], "B"),
                (&["1"], "A"),
                (&["4"], "B"),
                (&["1"], "B"),
            ],
        )
    }

    #[test]
    fn distances_are_weakly_increasing() {
        let ds = line_ds();
        let candidates = [1, 2, 3, 4];
        let stats = Stats::build(&ds, &candidates, &DistanceConfig::default());
        let got = nearest_neighbors(
            &ds,
            &stats,
            &DistanceConfig::default(),
            &ds.rows[0],
            &candidates,
            4,
        );
        assert_eq!(got.len(), 4);
        for pair in got.windows(2) {
            assert!(pair[0].dist <= pair[1].dist);
        }
    }

    #[test]
    fn ties_break_on_the_lower_index() {
        let ds = line_ds();
        let candidates = [4, 2, 1];
        let stats = Stats::build(&ds, &candidates, &DistanceConfig::default());
        let got = nearest_neighbors(
            &ds,
            &stats,
            &DistanceConfig::default(),
            &ds.rows[0],
            &candidates,
            3,
        );
        // Rows 2 and 4 are both at x = 1; index order decides.
        assert_eq!(
            got.iter().map(|n| n.index).collect::<Vec<_>>(),
            vec![2, 4, 1]
        );
    }

    #[test]
    fn k_is_clamped_to_the_candidate_count() {
        let ds = line_ds();
        let candidates = [1, 2];
        let stats = Stats::build(&ds, &candidates, &DistanceConfig::default());
        let got = nearest_neighbors(
            &ds,
            &stats,
            &DistanceConfig::default(),
            &ds.rows[0],
            &candidates,
            10,
        );
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn empty_candidate_set_yields_empty_list() {
        let ds = line_ds();
        let stats = Stats::build(&ds, &[], &DistanceConfig::default());
        let got = nearest_neighbors(
            &ds,
            &stats,
            &DistanceConfig::default(),
            &ds.rows[0],
            &[],
            3,
        );
        assert!(got.is_empty());
    }
}
