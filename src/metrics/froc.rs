//! FROC (free-response ROC) curve construction and summary.

use crate::types::FrocCurve;

/// Default false-positives-per-image window for the summary sensitivity,
/// the usual reporting range for lesion detection.
pub const DEFAULT_FROC_WINDOW: (f32, f32) = (0.125, 2.0);

/// Build a FROC curve from cumulative counts.
///
/// `fps_per_image[i] = cum_fp[i] / num_images` paired with
/// `sensitivity[i] = cum_tp[i] / num_gt_boxes` (recall doubles as
/// sensitivity in this domain).
pub fn froc_from_counts(
    cum_tp: &[u32],
    cum_fp: &[u32],
    num_gt_boxes: usize,
    num_images: usize,
) -> FrocCurve {
    let num_gt = (num_gt_boxes as f32).max(f32::EPSILON);
    let num_imgs = (num_images as f32).max(f32::EPSILON);

    FrocCurve {
        fps_per_image: cum_fp.iter().map(|&fp| fp as f32 / num_imgs).collect(),
        sensitivity: cum_tp.iter().map(|&tp| tp as f32 / num_gt).collect(),
    }
}

/// Average sensitivity over curve points whose false-positive rate falls
/// inside `[begin, end]` (inclusive).
///
/// Returns `None` when no point qualifies, e.g. a detector so
/// conservative it never reaches `begin` false positives per image.
pub fn average_sensitivity(curve: &FrocCurve, begin: f32, end: f32) -> Option<f32> {
    let mut sum = 0.0f32;
    let mut count = 0usize;
    for (&fpi, &sens) in curve.fps_per_image.iter().zip(curve.sensitivity.iter()) {
        if fpi >= begin && fpi <= end {
            sum += sens;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f32)
    }
}
