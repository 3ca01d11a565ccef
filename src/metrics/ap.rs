//! Average precision integration over a precision/recall curve.

use crate::types::PrecisionRecallCurve;

/// Reduce a precision/recall curve to a scalar average precision.
///
/// Two integration rules are available:
///
/// - `use_voc07 == true`: the VOC2007 11-point rule, averaging the best
///   precision at recall levels `0.0, 0.1, ..., 1.0` (0 where no point
///   reaches the level).
/// - `use_voc07 == false` (default choice): the VOC2012 continuous rule,
///   the exact area under the precision envelope with `(0, 0)` and
///   `(1, 0)` sentinels.
///
/// An empty curve yields 0 under both rules.
///
/// # Example
///
/// ```
/// use meddet_eval::metrics::ap::average_precision;
/// use meddet_eval::types::PrecisionRecallCurve;
///
/// let curve = PrecisionRecallCurve {
///     recall: vec![0.5, 1.0],
///     precision: vec![1.0, 1.0],
/// };
/// assert!((average_precision(&curve, false) - 1.0).abs() < 1e-6);
/// assert!((average_precision(&curve, true) - 1.0).abs() < 1e-6);
/// ```
pub fn average_precision(curve: &PrecisionRecallCurve, use_voc07: bool) -> f32 {
    if use_voc07 {
        voc07_ap(&curve.recall, &curve.precision)
    } else {
        voc12_ap(&curve.recall, &curve.precision)
    }
}

/// VOC2007 11-point interpolated AP.
pub fn voc07_ap(recall: &[f32], precision: &[f32]) -> f32 {
    let mut ap = 0.0f32;
    for step in 0..=10 {
        let level = step as f32 * 0.1;
        let best = recall
            .iter()
            .zip(precision.iter())
            .filter(|(&r, _)| r >= level)
            .map(|(_, &p)| p)
            .fold(0.0f32, f32::max);
        ap += best / 11.0;
    }
    ap
}

/// VOC2012 continuous AP: area under the precision envelope.
pub fn voc12_ap(recall: &[f32], precision: &[f32]) -> f32 {
    // Sentinels: (recall 0, precision 0) in front, (recall 1, precision 0)
    // at the back.
    let mut mrec = Vec::with_capacity(recall.len() + 2);
    mrec.push(0.0f32);
    mrec.extend_from_slice(recall);
    mrec.push(1.0);

    let mut mpre = Vec::with_capacity(precision.len() + 2);
    mpre.push(0.0f32);
    mpre.extend_from_slice(precision);
    mpre.push(0.0);

    // Precision envelope: propagate the running maximum right to left.
    for i in (1..mpre.len()).rev() {
        mpre[i - 1] = mpre[i - 1].max(mpre[i]);
    }

    // Sum area only where recall changes value.
    let mut ap = 0.0f32;
    for i in 0..mrec.len() - 1 {
        if mrec[i + 1] != mrec[i] {
            ap += (mrec[i + 1] - mrec[i]) * mpre[i + 1];
        }
    }
    ap
}

/// Mean AP across classes, skipping classes without a defined AP.
///
/// Returns `None` when no class has one (e.g. an evaluation where every
/// class had zero ground-truth boxes).
pub fn mean_average_precision(class_aps: &[Option<f32>]) -> Option<f32> {
    let defined: Vec<f32> = class_aps.iter().filter_map(|ap| *ap).collect();
    if defined.is_empty() {
        return None;
    }
    Some(defined.iter().sum::<f32>() / defined.len() as f32)
}
