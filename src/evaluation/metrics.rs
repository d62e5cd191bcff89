use crate::evaluation::ConfusionMatrix;

/// Precision/recall/F1 triple. Undefined (0/0) ratios collapse to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// One `ClassMetrics` per decision label, in label order.
pub fn per_class_metrics(conf: &ConfusionMatrix) -> Vec<ClassMetrics> {
    let d = conf.size();
    (0..d)
        .map(|i| {
            let tp = conf.count(i, i);
            let mut fp = 0usize;
            let mut fn_ = 0usize;
            for r in 0..d {
                if r != i {
                    fp += conf.count(r, i);
                    fn_ += conf.count(i, r);
                }
            }

            let precision = safe_ratio(tp, tp + fp);
            let recall = safe_ratio(tp, tp + fn_);
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };
            ClassMetrics {
                precision,
                recall,
                f1,
            }
        })
        .collect()
}

/// Arithmetic mean of the per-class metrics.
pub fn balanced_metrics(per_class: &[ClassMetrics]) -> ClassMetrics {
    if per_class.is_empty() {
        return ClassMetrics::default();
    }
    let d = per_class.len() as f64;
    let mut balanced = ClassMetrics::default();
    for m in per_class {
        balanced.precision += m.precision;
        balanced.recall += m.recall;
        balanced.f1 += m.f1;
    }
    balanced.precision /= d;
    balanced.recall /= d;
    balanced.f1 /= d;
    balanced
}

fn safe_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
