mod config;
mod distance;
mod stats;

pub use config::{DistanceConfig, SvdmVariant};
pub use distance::{instance_distance, nominal_distance};
pub use stats::{NominalStat, NumericStat, Stats};
