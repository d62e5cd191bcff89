/// Picks the winning label from per-class support counts.
///
/// Normalized scoring divides each count by the class size over the
/// training set (a zero class size scores 0). The starting best score is
/// negative so that a class with zero support can still win when every
/// class has zero support; ties go to the lexicographically smallest label.
pub fn choose_class(
    labels: &[String],
    support: &[usize],
    class_sizes: &[usize],
    normalized: bool,
) -> String {
    let mut best_score = -1.0f64;
    let mut best_idx = 0usize;

    for (i, &count) in support.iter().enumerate() {
        let score = if normalized {
            if class_sizes[i] > 0 {
                count as f64 / class_sizes[i] as f64
            } else {
                0.0
            }
        } else {
            count as f64
        };

        if score > best_score {
            best_score = score;
            best_idx = i;
        } else if score == best_score && labels[i] < labels[best_idx] {
            best_idx = i;
        }
    }

    labels[best_idx].clone()
}
