mod confusion;
mod metrics;

pub use confusion::ConfusionMatrix;
pub use metrics::{ClassMetrics, balanced_metrics, per_class_metrics};
