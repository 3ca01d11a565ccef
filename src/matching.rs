//! Greedy matching of detections against ground truth for one image and
//! one class.

use crate::metrics::iou::overlap;
use crate::types::{BoundingBox, ScoredBox};

/// Per-detection match outcome for one image, parallel to the input
/// detection list (dataset order, not score order).
#[derive(Debug, Clone, Default)]
pub struct ImageMatches {
    /// `true` where the detection claimed a ground-truth box.
    pub hits: Vec<bool>,
    /// Confidence score of each detection.
    pub scores: Vec<f32>,
}

/// Match one image's detections against its ground-truth boxes.
///
/// Detections are processed in their original dataset order. Each
/// detection takes the ground-truth box it overlaps most (lowest index on
/// ties) and counts as a true positive iff that overlap is strictly above
/// `iou_thr` and the box has not already been claimed by an earlier
/// detection. First claim wins: a later detection with higher IoU against
/// an already-claimed box is a false positive, even if another unclaimed
/// box would also clear the threshold. Changing this to best-IoU-wins
/// would silently shift AP values across existing result sets, so it is
/// kept as-is.
///
/// Ground-truth boxes with identical coordinates are distinct entities;
/// each can absorb one detection.
pub fn match_image(
    detections: &[ScoredBox],
    ground_truths: &[BoundingBox],
    iou_thr: f32,
) -> ImageMatches {
    let mut matches = ImageMatches {
        hits: Vec::with_capacity(detections.len()),
        scores: Vec::with_capacity(detections.len()),
    };
    let mut claimed = vec![false; ground_truths.len()];

    for detection in detections {
        matches.scores.push(detection.score);

        if ground_truths.is_empty() {
            matches.hits.push(false);
            continue;
        }

        let (best_idx, best_iou) = argmax_overlap(&detection.bbox, ground_truths);

        if best_iou > iou_thr && !claimed[best_idx] {
            claimed[best_idx] = true;
            matches.hits.push(true);
        } else {
            matches.hits.push(false);
        }
    }

    matches
}

/// Index and value of the highest-IoU ground-truth box, considering all
/// boxes whether claimed or not. Ties resolve to the lowest index.
fn argmax_overlap(detection: &BoundingBox, ground_truths: &[BoundingBox]) -> (usize, f32) {
    let mut best_idx = 0;
    let mut best_iou = overlap(detection, &ground_truths[0]);
    for (idx, gt) in ground_truths.iter().enumerate().skip(1) {
        let iou = overlap(detection, gt);
        if iou > best_iou {
            best_idx = idx;
            best_iou = iou;
        }
    }
    (best_idx, best_iou)
}
