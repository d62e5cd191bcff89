mod leave_one_out;

pub use leave_one_out::{ExperimentRun, LeaveOneOut};

use strum_macros::{Display, EnumString};

/// Which subset induces the distance statistics a classifier sees: the whole
/// dataset, or each fold's training set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StatsMode {
    #[strum(to_string = "g", serialize = "global")]
    Global,
    #[strum(to_string = "l", serialize = "local")]
    Local,
}
