mod grule;
mod kplus_nn;
mod neighbors;
mod ria;
mod riona;
mod voting;

pub use grule::{is_consistent_g_rule, satisfies_g_rule};
pub use kplus_nn::classify_kplus_nn;
pub use neighbors::{Neighbor, nearest_neighbors};
pub use ria::classify_ria;
pub use riona::classify_riona;
pub use voting::choose_class;

use strum_macros::{Display, EnumString};

/// Classifier selector, displayed the way experiment files are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[strum(to_string = "RIONA", serialize = "riona")]
    Riona,
    #[strum(to_string = "RIA", serialize = "ria")]
    Ria,
    #[strum(to_string = "KNN", serialize = "knn")]
    Knn,
}

/// Predictions under both voting rules plus the neighbor list the variant
/// actually used (for RIA the list is reporting-only).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub predicted_standard: String,
    pub predicted_normalized: String,
    pub knn_list: Vec<Neighbor>,
}
