//! Binary-presence evaluation: reduce detections to per-image
//! present/absent labels and score them as a classifier.
//!
//! An image counts as "positive" when any of its detections clears the
//! score threshold, and as ground-truth positive when it has at least one
//! annotated box. This is the usual triage view of a detector: did it
//! flag the study at all, regardless of localization.

use crate::error::{EvalError, Result};
use crate::evaluator::align_by_image_id;
use crate::metrics::roc::roc_curve;
use crate::types::{BinaryReport, BinaryThresholdMetrics, Detections, GroundTruth};

/// Floor applied to the confusion-rate denominators.
pub const RATE_EPS: f32 = f32::EPSILON;

/// Evaluate image-level presence/absence for a single-class dataset.
///
/// One confusion block is produced per entry of `score_thrs`. The ROC
/// curve and its AUC are threshold-independent: each image contributes
/// its maximum detection score (0 when it has no detections) against the
/// binary ground-truth presence label.
///
/// # Errors
///
/// Fails when either dataset covers more than one class, or when the two
/// datasets disagree on image count or identifiers.
pub fn evaluate_binary_presence(
    detections: &Detections,
    ground_truth: &GroundTruth,
    score_thrs: &[f32],
) -> Result<BinaryReport> {
    if detections.num_classes() != 1 {
        return Err(EvalError::NotBinary(detections.num_classes()));
    }
    let gt_order = align_by_image_id(detections, ground_truth)?;

    // Per-image score and presence label, shared by every threshold and
    // by the ROC sweep.
    let mut image_scores = Vec::with_capacity(detections.num_images());
    let mut image_labels = Vec::with_capacity(detections.num_images());
    for (dt_idx, &gt_idx) in gt_order.iter().enumerate() {
        let max_score = detections
            .boxes(dt_idx, 0)
            .iter()
            .map(|d| d.score)
            .fold(0.0f32, f32::max);
        image_scores.push(max_score);
        image_labels.push(!ground_truth.boxes(gt_idx, 0).is_empty());
    }

    let per_threshold = score_thrs
        .iter()
        .map(|&thr| confusion_at_threshold(detections, &image_labels, thr))
        .collect();

    Ok(BinaryReport {
        per_threshold,
        roc: roc_curve(&image_scores, &image_labels),
    })
}

fn confusion_at_threshold(
    detections: &Detections,
    image_labels: &[bool],
    score_thr: f32,
) -> BinaryThresholdMetrics {
    let (mut tp, mut fp, mut tn, mut fn_) = (0usize, 0usize, 0usize, 0usize);

    for (dt_idx, &is_positive) in image_labels.iter().enumerate() {
        let has_detection = detections
            .boxes(dt_idx, 0)
            .iter()
            .any(|d| d.score > score_thr);
        match (has_detection, is_positive) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, true) => fn_ += 1,
            (false, false) => tn += 1,
        }
    }

    BinaryThresholdMetrics {
        score_thr,
        tp,
        fp,
        tn,
        fn_,
        accuracy: ratio(tp + tn, tp + fp + tn + fn_),
        sensitivity: ratio(tp, tp + fn_),
        specificity: ratio(tn, tn + fp),
        precision: ratio(tp, tp + fp),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    numerator as f32 / (denominator as f32).max(RATE_EPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, ScoredBox};

    fn image(
        dts: &mut Detections,
        gts: &mut GroundTruth,
        id: &str,
        dt_scores: &[f32],
        gt_present: bool,
    ) {
        let dt_boxes = dt_scores
            .iter()
            .map(|&s| ScoredBox::new(10.0, 10.0, 50.0, 50.0, s))
            .collect();
        let gt_boxes = if gt_present {
            vec![BoundingBox::new(10.0, 10.0, 50.0, 50.0)]
        } else {
            vec![]
        };
        dts.push_image(id, vec![dt_boxes]).unwrap();
        gts.push_image(id, vec![gt_boxes]).unwrap();
    }

    #[test]
    fn test_single_true_positive_image() {
        let mut dts = Detections::new(1);
        let mut gts = GroundTruth::new(1);
        image(&mut dts, &mut gts, "img0", &[0.9], true);

        let report = evaluate_binary_presence(&dts, &gts, &[0.5]).unwrap();
        let block = &report.per_threshold[0];
        assert_eq!((block.tp, block.fp, block.tn, block.fn_), (1, 0, 0, 0));
        assert!((block.accuracy - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_confusion_counts_across_images() {
        let mut dts = Detections::new(1);
        let mut gts = GroundTruth::new(1);
        image(&mut dts, &mut gts, "tp", &[0.9], true);
        image(&mut dts, &mut gts, "fp", &[0.8], false);
        image(&mut dts, &mut gts, "fn", &[0.1], true);
        image(&mut dts, &mut gts, "tn", &[], false);

        let report = evaluate_binary_presence(&dts, &gts, &[0.5]).unwrap();
        let block = &report.per_threshold[0];
        assert_eq!((block.tp, block.fp, block.tn, block.fn_), (1, 1, 1, 1));
        assert!((block.accuracy - 0.5).abs() < 1e-6);
        assert!((block.sensitivity - 0.5).abs() < 1e-6);
        assert!((block.specificity - 0.5).abs() < 1e-6);
        assert!((block.precision - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_one_block_per_threshold() {
        let mut dts = Detections::new(1);
        let mut gts = GroundTruth::new(1);
        image(&mut dts, &mut gts, "img0", &[0.6], true);

        let report = evaluate_binary_presence(&dts, &gts, &[0.05, 0.5, 0.7]).unwrap();
        assert_eq!(report.per_threshold.len(), 3);
        assert_eq!(report.per_threshold[0].tp, 1);
        assert_eq!(report.per_threshold[1].tp, 1);
        // 0.6 does not exceed 0.7.
        assert_eq!(report.per_threshold[2].fn_, 1);
    }

    #[test]
    fn test_roc_is_threshold_independent() {
        let mut dts = Detections::new(1);
        let mut gts = GroundTruth::new(1);
        image(&mut dts, &mut gts, "pos", &[0.9, 0.2], true);
        image(&mut dts, &mut gts, "neg", &[0.3], false);

        let a = evaluate_binary_presence(&dts, &gts, &[0.1]).unwrap();
        let b = evaluate_binary_presence(&dts, &gts, &[0.9]).unwrap();
        assert_eq!(a.roc, b.roc);
        assert!((a.roc.auc - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_multiclass() {
        let dts = Detections::new(2);
        let gts = GroundTruth::new(2);
        let err = evaluate_binary_presence(&dts, &gts, &[0.5]).unwrap_err();
        assert!(matches!(err, EvalError::NotBinary(2)));
    }
}
