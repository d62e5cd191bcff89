mod paths;
mod summary;
mod writers;

pub use paths::{ExperimentPaths, sanitize_path_part};
pub use summary::{ExperimentSummary, SummaryFormat, SummaryLog};
pub use writers::{
    PhaseTimes, write_neighbors_file, write_predictions_file, write_report_file,
};
