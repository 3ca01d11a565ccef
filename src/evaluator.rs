//! Detection evaluation orchestration: per-class AP and FROC.

use crate::error::{EvalError, Result};
use crate::matching::match_image;
use crate::metrics::ap::{average_precision, mean_average_precision};
use crate::metrics::froc::{average_sensitivity, froc_from_counts, DEFAULT_FROC_WINDOW};
use crate::metrics::precision_recall::{cumulative_counts, curve_from_counts};
use crate::types::{ClassMetrics, DetectionReport, Detections, GroundTruth};

/// Tunables for a detection evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalOptions {
    /// Minimum IoU (strictly greater) for a detection to claim a
    /// ground-truth box.
    pub iou_thr: f32,
    /// Use the VOC2007 11-point AP rule instead of the continuous
    /// VOC2012 rule.
    pub use_voc07: bool,
    /// False-positives-per-image window for the FROC summary
    /// sensitivity; `None` skips the summary.
    pub froc_window: Option<(f32, f32)>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            iou_thr: 0.5,
            use_voc07: false,
            froc_window: Some(DEFAULT_FROC_WINDOW),
        }
    }
}

/// Evaluate detections against ground truth, one metrics block per class.
///
/// The two datasets must cover the same image identifiers (in any order)
/// and the same number of classes; anything else is an input error and is
/// reported before any metric is computed. Classes are evaluated
/// independently: detections are matched greedily per image, pooled
/// across images in descending-score order, and reduced to AP plus a
/// FROC curve. A class with zero ground-truth boxes gets `None` metrics
/// and is excluded from the mean AP.
///
/// # Example
///
/// ```
/// use meddet_eval::evaluator::{evaluate_detections, EvalOptions};
/// use meddet_eval::types::{Detections, GroundTruth, BoundingBox, ScoredBox};
///
/// # fn main() -> meddet_eval::error::Result<()> {
/// let mut gts = GroundTruth::new(1);
/// gts.push_image("scan-001", vec![vec![BoundingBox::new(10.0, 10.0, 50.0, 50.0)]])?;
/// let mut dts = Detections::new(1);
/// dts.push_image("scan-001", vec![vec![ScoredBox::new(10.0, 10.0, 50.0, 50.0, 0.9)]])?;
///
/// let report = evaluate_detections(&dts, &gts, &EvalOptions::default())?;
/// assert!((report.per_class[0].ap.unwrap() - 1.0).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn evaluate_detections(
    detections: &Detections,
    ground_truth: &GroundTruth,
    options: &EvalOptions,
) -> Result<DetectionReport> {
    let gt_order = align_by_image_id(detections, ground_truth)?;

    let num_images = detections.num_images();
    let num_classes = detections.num_classes();
    let mut per_class = Vec::with_capacity(num_classes);

    for class in 0..num_classes {
        let mut hits = Vec::new();
        let mut scores = Vec::new();
        let mut num_gt_boxes = 0usize;

        for (dt_idx, &gt_idx) in gt_order.iter().enumerate() {
            let gt_boxes = ground_truth.boxes(gt_idx, class);
            let dt_boxes = detections.boxes(dt_idx, class);
            num_gt_boxes += gt_boxes.len();

            let matches = match_image(dt_boxes, gt_boxes, options.iou_thr);
            hits.extend(matches.hits);
            scores.extend(matches.scores);
        }

        if num_gt_boxes == 0 {
            per_class.push(ClassMetrics {
                ap: None,
                num_gt_boxes: 0,
                precision_recall: None,
                froc: None,
                froc_sensitivity: None,
            });
            continue;
        }

        let (cum_tp, cum_fp) = cumulative_counts(&hits, &scores);
        let pr_curve = curve_from_counts(&cum_tp, &cum_fp, num_gt_boxes);
        let froc = froc_from_counts(&cum_tp, &cum_fp, num_gt_boxes, num_images);

        let ap = average_precision(&pr_curve, options.use_voc07);
        let froc_sensitivity = options
            .froc_window
            .and_then(|(begin, end)| average_sensitivity(&froc, begin, end));

        per_class.push(ClassMetrics {
            ap: Some(ap),
            num_gt_boxes,
            precision_recall: Some(pr_curve),
            froc: Some(froc),
            froc_sensitivity,
        });
    }

    let mean_ap = mean_average_precision(
        &per_class.iter().map(|m| m.ap).collect::<Vec<_>>(),
    );

    Ok(DetectionReport {
        per_class,
        mean_ap,
        num_images,
    })
}

/// For each detection image (in order), the index of the ground-truth
/// image with the same identifier.
///
/// Fails when the image counts, class counts, or identifier sets differ.
pub(crate) fn align_by_image_id(
    detections: &Detections,
    ground_truth: &GroundTruth,
) -> Result<Vec<usize>> {
    if detections.num_images() != ground_truth.num_images() {
        return Err(EvalError::ImageCountMismatch {
            detections: detections.num_images(),
            ground_truths: ground_truth.num_images(),
        });
    }
    if detections.num_classes() != ground_truth.num_classes() {
        return Err(EvalError::ClassCountMismatch {
            detections: detections.num_classes(),
            ground_truths: ground_truth.num_classes(),
        });
    }

    detections
        .image_ids()
        .iter()
        .map(|id| {
            ground_truth
                .index_of(id)
                .ok_or_else(|| EvalError::ImageIdMismatch(id.clone()))
        })
        .collect()
}
