pub mod arff;

pub use arff::ArffReader;

use std::path::Path;

use crate::core::{AttributeKind, Dataset};
use crate::error::ExperimentError;

/// Reads a dataset and makes it ready for classification. The optional kind
/// override is applied *before* numeric cells are parsed, so `--types` can
/// turn a declared-nominal column into a numeric one and vice versa.
pub fn load_dataset(
    path: &Path,
    missing_token: &str,
    kinds_override: Option<Vec<AttributeKind>>,
) -> Result<Dataset, ExperimentError> {
    let mut dataset = ArffReader::new(missing_token).read(path)?;
    if let Some(kinds) = kinds_override {
        dataset.override_kinds(kinds)?;
    }
    dataset.finalize();
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_arff(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_finalizes_numeric_cells_and_labels() {
        let tf = write_arff("@attribute x numeric\n@attribute c {a, b}\n@data\n2.5,b\n1,a\n");
        let ds = load_dataset(tf.path(), "?", None).unwrap();
        assert_eq!(ds.rows[0].values[0].num, 2.5);
        assert_eq!(ds.labels(), ["b", "a"]);
        assert_eq!(ds.rows[1].decision_idx, 1);
    }

    #[test]
    fn kind_override_happens_before_numeric_parse() {
        let tf = write_arff("@attribute x {1, 2}\n@attribute c {a}\n@data\n1,a\n2,a\n");
        let ds = load_dataset(tf.path(), "?", Some(vec![AttributeKind::Numeric])).unwrap();
        assert_eq!(ds.kinds, vec![AttributeKind::Numeric]);
        assert_eq!(ds.rows[1].values[0].num, 2.0);
    }

    #[test]
    fn mismatched_override_is_rejected() {
        let tf = write_arff("@attribute x numeric\n@attribute c {a}\n@data\n1,a\n");
        let err = load_dataset(
            tf.path(),
            "?",
            Some(vec![AttributeKind::Numeric, AttributeKind::Nominal]),
        )
        .unwrap_err();
        assert!(matches!(err, ExperimentError::KindOverrideMismatch { .. }));
    }
}
