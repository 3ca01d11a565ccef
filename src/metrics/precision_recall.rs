//! Precision/recall curve construction from accumulated match labels.

use crate::types::PrecisionRecallCurve;

/// Floor applied to the `tp + fp` denominator of precision.
pub const PRECISION_EPS: f32 = f32::EPSILON;

/// Cumulative true-positive and false-positive counts in descending-score
/// order.
///
/// `hits` and `scores` are parallel arrays covering every detection of
/// one class across all images. The relative order of equal scores is
/// unspecified; callers must not rely on tie order.
///
/// # Panics
///
/// Panics in debug builds if the two slices differ in length.
pub fn cumulative_counts(hits: &[bool], scores: &[f32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert_eq!(hits.len(), scores.len());

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut cum_tp = Vec::with_capacity(hits.len());
    let mut cum_fp = Vec::with_capacity(hits.len());
    let mut tp = 0u32;
    let mut fp = 0u32;
    for &idx in &order {
        if hits[idx] {
            tp += 1;
        } else {
            fp += 1;
        }
        cum_tp.push(tp);
        cum_fp.push(fp);
    }

    (cum_tp, cum_fp)
}

/// Build a precision/recall curve from cumulative counts.
///
/// `recall[i] = cum_tp[i] / num_gt_boxes` and
/// `precision[i] = cum_tp[i] / max(cum_tp[i] + cum_fp[i], eps)`.
///
/// Callers are expected to have handled the `num_gt_boxes == 0` case
/// already (the curve is not defined there); this function does not
/// divide by zero regardless.
pub fn curve_from_counts(cum_tp: &[u32], cum_fp: &[u32], num_gt_boxes: usize) -> PrecisionRecallCurve {
    let num_gt = (num_gt_boxes as f32).max(PRECISION_EPS);
    let recall = cum_tp.iter().map(|&tp| tp as f32 / num_gt).collect();
    let precision = cum_tp
        .iter()
        .zip(cum_fp.iter())
        .map(|(&tp, &fp)| tp as f32 / ((tp + fp) as f32).max(PRECISION_EPS))
        .collect();

    PrecisionRecallCurve { recall, precision }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sorted_by_score() {
        // Dataset order: fp(0.2), tp(0.9), tp(0.5).
        let hits = vec![false, true, true];
        let scores = vec![0.2, 0.9, 0.5];
        let (cum_tp, cum_fp) = cumulative_counts(&hits, &scores);
        assert_eq!(cum_tp, vec![1, 2, 2]);
        assert_eq!(cum_fp, vec![0, 0, 1]);
    }

    #[test]
    fn test_counts_monotonic() {
        let hits = vec![true, false, true, false, false, true];
        let scores = vec![0.9, 0.8, 0.7, 0.6, 0.5, 0.4];
        let (cum_tp, cum_fp) = cumulative_counts(&hits, &scores);
        assert!(cum_tp.windows(2).all(|w| w[0] <= w[1]));
        assert!(cum_fp.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*cum_tp.last().unwrap(), 3);
        assert_eq!(*cum_fp.last().unwrap(), 3);
    }

    #[test]
    fn test_curve_values() {
        let cum_tp = vec![1, 2, 2];
        let cum_fp = vec![0, 0, 1];
        let curve = curve_from_counts(&cum_tp, &cum_fp, 4);
        assert_eq!(curve.recall, vec![0.25, 0.5, 0.5]);
        assert!((curve.precision[0] - 1.0).abs() < 1e-6);
        assert!((curve.precision[1] - 1.0).abs() < 1e-6);
        assert!((curve.precision[2] - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_inputs() {
        let (cum_tp, cum_fp) = cumulative_counts(&[], &[]);
        assert!(cum_tp.is_empty());
        let curve = curve_from_counts(&cum_tp, &cum_fp, 3);
        assert!(curve.recall.is_empty());
        assert!(curve.precision.is_empty());
    }
}
