use std::path::{Path, PathBuf};

use crate::classifiers::Algorithm;
use crate::metric::SvdmVariant;
use crate::tasks::StatsMode;

/// Replaces characters that are unsafe in path components.
pub fn sanitize_path_part(part: &str) -> String {
    part.chars()
        .map(|ch| match ch {
            ' ' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\\' | '/' => '_',
            other => other,
        })
        .collect()
}

/// File locations of one experiment:
/// `<outdir>/<stem>/EXP_<suffix>/{OUT,kNN,STAT}_<suffix>.{csv,csv,txt}`.
#[derive(Debug, Clone)]
pub struct ExperimentPaths {
    pub directory: PathBuf,
    pub predictions: PathBuf,
    pub neighbors: PathBuf,
    pub report: PathBuf,
}

impl ExperimentPaths {
    #[allow(clippy::too_many_arguments)]
    pub fn compose(
        outdir: &Path,
        input_stem: &str,
        algorithm: Algorithm,
        mode: StatsMode,
        svdm: SvdmVariant,
        attributes: usize,
        objects: usize,
        k: usize,
    ) -> ExperimentPaths {
        let suffix =
            format!("{algorithm}_{input_stem}_D{attributes}_R{objects}_k{k}_{svdm}_{mode}");
        let directory = outdir
            .join(sanitize_path_part(input_stem))
            .join(format!("EXP_{}", sanitize_path_part(&suffix)));
        ExperimentPaths {
            predictions: directory.join(format!("OUT_{suffix}.csv")),
            neighbors: directory.join(format!("kNN_{suffix}.csv")),
            report: directory.join(format!("STAT_{suffix}.txt")),
            directory,
        }
    }
}
