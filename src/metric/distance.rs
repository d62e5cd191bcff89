use crate::core::{AttributeKind, Dataset, Instance};
use crate::metric::{DistanceConfig, NominalStat, Stats};

/// SVDM distance between two nominal tokens. A token absent from the stats
/// (missing or never observed in the inducing subset) costs the configured
/// missing-nominal penalty.
pub fn nominal_distance(stat: &NominalStat, a: &str, b: &str, config: &DistanceConfig) -> f64 {
    match (stat.index.get(a), stat.index.get(b)) {
        (Some(&i), Some(&j)) => stat.dist[i][j],
        _ => config.missing_nominal,
    }
}

/// Unweighted sum of per-attribute contributions. Not normalized by the
/// attribute count; callers must not assume it lies in [0, 1].
pub fn instance_distance(
    dataset: &Dataset,
    stats: &Stats,
    config: &DistanceConfig,
    x: &Instance,
    y: &Instance,
) -> f64 {
    let mut sum = 0.0;
    for (a, kind) in dataset.kinds.iter().enumerate() {
        let vx = &x.values[a];
        let vy = &y.values[a];
        match kind {
            AttributeKind::Numeric => {
                if vx.missing || vy.missing {
                    sum += config.missing_numeric;
                    continue;
                }
                let stat = &stats.numeric[a];
                if stat.has_value && stat.range != 0.0 {
                    sum += (vx.num - vy.num).abs() / stat.range;
                }
            }
            AttributeKind::Nominal => {
                if vx.missing || vy.missing {
                    sum += config.missing_nominal;
                    continue;
                }
                sum += nominal_distance(&stats.nominal[a], &vx.raw, &vy.raw, config);
            }
        }
    }
    sum
}
