//! Image-level ROC curve and AUC.

use crate::types::RocCurve;

/// Floor applied to the positive/negative count denominators.
pub const RATE_EPS: f32 = f32::EPSILON;

/// Build a ROC curve from per-sample scores and binary labels.
///
/// Samples are swept in descending-score order; tied scores collapse into
/// a single operating point. The curve starts at `(0, 0)` and, whenever
/// both classes are present, ends at `(1, 1)`. The AUC is the trapezoidal
/// area under the curve.
///
/// Degenerate inputs (all-positive or all-negative labels) produce a
/// well-defined curve with the absent class's rate pinned at 0 rather
/// than an error.
///
/// # Panics
///
/// Panics in debug builds if the two slices differ in length.
pub fn roc_curve(scores: &[f32], labels: &[bool]) -> RocCurve {
    debug_assert_eq!(scores.len(), labels.len());

    let num_pos = labels.iter().filter(|&&l| l).count();
    let num_neg = labels.len() - num_pos;
    let pos = (num_pos as f32).max(RATE_EPS);
    let neg = (num_neg as f32).max(RATE_EPS);

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut fpr = vec![0.0f32];
    let mut tpr = vec![0.0f32];
    let mut tp = 0usize;
    let mut fp = 0usize;

    for (rank, &idx) in order.iter().enumerate() {
        if labels[idx] {
            tp += 1;
        } else {
            fp += 1;
        }
        // Emit one point per distinct score value.
        let next_is_tie = order
            .get(rank + 1)
            .is_some_and(|&next| scores[next] == scores[idx]);
        if !next_is_tie {
            fpr.push(fp as f32 / neg);
            tpr.push(tp as f32 / pos);
        }
    }

    let auc = trapezoid_area(&fpr, &tpr);
    RocCurve { fpr, tpr, auc }
}

fn trapezoid_area(x: &[f32], y: &[f32]) -> f32 {
    let mut area = 0.0f32;
    for i in 0..x.len().saturating_sub(1) {
        area += (x[i + 1] - x[i]) * (y[i] + y[i + 1]) * 0.5;
    }
    area
}
