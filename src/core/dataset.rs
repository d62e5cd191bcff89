use std::collections::HashMap;

use crate::core::attribute::AttributeKind;
use crate::core::instance::Instance;
use crate::error::ExperimentError;

/// The realized dataset: ordered rows, the kind of every conditional
/// attribute and a dense, insertion-ordered enumeration of decision labels.
///
/// The label order determines support-count slots and confusion-matrix
/// rows/columns, so it must follow first appearance in the data.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<Instance>,
    pub kinds: Vec<AttributeKind>,
    pub attribute_names: Vec<String>,
    labels: Vec<String>,
    label_index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new(attribute_names: Vec<String>, kinds: Vec<AttributeKind>) -> Dataset {
        Dataset {
            rows: Vec::new(),
            kinds,
            attribute_names,
            labels: Vec::new(),
            label_index: HashMap::new(),
        }
    }

    pub fn number_of_attributes(&self) -> usize {
        self.kinds.len()
    }

    /// Decision labels in first-appearance order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn number_of_labels(&self) -> usize {
        self.labels.len()
    }

    pub fn label_index_of(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Replaces the attribute kinds with a CLI-provided override. The
    /// override must cover every conditional attribute.
    pub fn override_kinds(&mut self, kinds: Vec<AttributeKind>) -> Result<(), ExperimentError> {
        if kinds.len() != self.kinds.len() {
            return Err(ExperimentError::KindOverrideMismatch {
                given: kinds.len(),
                expected: self.kinds.len(),
            });
        }
        self.kinds = kinds;
        Ok(())
    }

    /// Parses numeric cells against the current kinds and rebuilds the label
    /// table. Must run once, after the kinds are final: a token that fails
    /// to parse on a numeric attribute marks the cell missing.
    pub fn finalize(&mut self) {
        for row in &mut self.rows {
            for (a, kind) in self.kinds.iter().enumerate() {
                if *kind != AttributeKind::Numeric {
                    continue;
                }
                let cell = &mut row.values[a];
                if cell.missing {
                    continue;
                }
                match cell.raw.parse::<f64>() {
                    Ok(num) => cell.num = num,
                    Err(_) => cell.missing = true,
                }
            }
        }

        self.labels.clear();
        self.label_index.clear();
        for row in &self.rows {
            if !self.label_index.contains_key(&row.decision) {
                self.label_index
                    .insert(row.decision.clone(), self.labels.len());
                self.labels.push(row.decision.clone());
            }
        }
        for row in &mut self.rows {
            row.decision_idx = self.label_index[&row.decision];
        }
    }

    /// Number of rows per decision label among `indices`, in label order.
    pub fn class_sizes(&self, indices: &[usize]) -> Vec<usize> {
        let mut sizes = vec![0usize; self.labels.len()];
        for &idx in indices {
            sizes[self.rows[idx].decision_idx] += 1;
        }
        sizes
    }
}
