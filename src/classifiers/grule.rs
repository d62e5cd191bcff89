use crate::core::{AttributeKind, Dataset, Instance};
use crate::metric::{DistanceConfig, Stats, nominal_distance};

/// Slack on the nominal radius check. SVDM entries are sums of floating
/// ratios; exact equality would be brittle.
const RULE_EPSILON: f64 = 1e-12;

/// Whether `candidate` is covered by the generalized rule induced by the
/// (test, training) pair. Numeric attributes constrain the candidate to the
/// closed interval spanned by test and training; nominal attributes require
/// the candidate to be no farther from the test value than the training
/// value is. A missing value on any of the three sides lifts the
/// attribute's constraint.
pub fn satisfies_g_rule(
    dataset: &Dataset,
    stats: &Stats,
    config: &DistanceConfig,
    candidate: &Instance,
    test: &Instance,
    training: &Instance,
) -> bool {
    for (a, kind) in dataset.kinds.iter().enumerate() {
        let v_tst = &test.values[a];
        let v_trn = &training.values[a];
        let v_cand = &candidate.values[a];

        if v_tst.missing || v_trn.missing || v_cand.missing {
            continue;
        }

        match kind {
            AttributeKind::Numeric => {
                let lo = v_tst.num.min(v_trn.num);
                let hi = v_tst.num.max(v_trn.num);
                if v_cand.num < lo || v_cand.num > hi {
                    return false;
                }
            }
            AttributeKind::Nominal => {
                let stat = &stats.nominal[a];
                let radius = nominal_distance(stat, &v_tst.raw, &v_trn.raw, config);
                let reach = nominal_distance(stat, &v_tst.raw, &v_cand.raw, config);
                if reach > radius + RULE_EPSILON {
                    return false;
                }
            }
        }
    }
    true
}

/// A g-rule is consistent on `verify_set` iff no row with a decision
/// different from the training example's satisfies it.
pub fn is_consistent_g_rule(
    dataset: &Dataset,
    stats: &Stats,
    config: &DistanceConfig,
    test: &Instance,
    training: &Instance,
    verify_set: &[usize],
) -> bool {
    for &idx in verify_set {
        let candidate = &dataset.rows[idx];
        if candidate.decision_idx != training.decision_idx
            && satisfies_g_rule(dataset, stats, config, candidate, test, training)
        {
            return false;
        }
    }
    true
}
