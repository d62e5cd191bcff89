//! In-code dataset fixtures shared by the unit tests.

use crate::core::{AttributeKind, AttributeValue, Dataset, Instance};

/// Builds a finalized dataset from `(cells, decision)` tuples. Cells are raw
/// tokens; `?` marks a missing value. Row ids are 1-based in input order,
/// matching what the ARFF reader would assign.
pub fn dataset_from_rows(kinds: &[AttributeKind], rows: &[(&[&str], &str)]) -> Dataset {
    let names = (0..kinds.len()).map(|i| format!("a{i}")).collect();
    let mut dataset = Dataset::new(names, kinds.to_vec());
    for (i, (cells, decision)) in rows.iter().enumerate() {
        assert_eq!(cells.len(), kinds.len(), "fixture row arity");
        let values = cells
            .iter()
            .map(|token| AttributeValue::from_token(token, "?"))
            .collect();
        dataset
            .rows
            .push(Instance::new(i + 1, values, (*decision).to_string()));
    }
    dataset.finalize();
    dataset
}
