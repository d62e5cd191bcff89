/// Square confusion matrix; rows are true labels, columns predictions,
/// both in dataset label order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    size: usize,
    cells: Vec<usize>,
}

impl ConfusionMatrix {
    pub fn new(size: usize) -> ConfusionMatrix {
        ConfusionMatrix {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn record(&mut self, true_idx: usize, predicted_idx: usize) {
        self.cells[true_idx * self.size + predicted_idx] += 1;
    }

    pub fn count(&self, true_idx: usize, predicted_idx: usize) -> usize {
        self.cells[true_idx * self.size + predicted_idx]
    }

    /// Number of rows whose true label is `true_idx`.
    pub fn row_total(&self, true_idx: usize) -> usize {
        (0..self.size).map(|j| self.count(true_idx, j)).sum()
    }

    pub fn total(&self) -> usize {
        self.cells.iter().sum()
    }

    pub fn correct(&self) -> usize {
        (0..self.size).map(|i| self.count(i, i)).sum()
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.correct() as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate_per_cell() {
        let mut conf = ConfusionMatrix::new(2);
        conf.record(0, 0);
        conf.record(0, 1);
        conf.record(0, 1);
        conf.record(1, 1);

        assert_eq!(conf.count(0, 1), 2);
        assert_eq!(conf.row_total(0), 3);
        assert_eq!(conf.row_total(1), 1);
        assert_eq!(conf.total(), 4);
        assert_eq!(conf.correct(), 2);
        assert_eq!(conf.accuracy(), 0.5);
    }

    #[test]
    fn empty_matrix_has_zero_accuracy() {
        let conf = ConfusionMatrix::new(3);
        assert_eq!(conf.total(), 0);
        assert_eq!(conf.accuracy(), 0.0);
    }
}
