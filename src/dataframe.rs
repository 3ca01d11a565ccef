//! Polars `DataFrame` views of evaluation reports, for notebook-style
//! inspection and CSV/parquet export by the caller.

use polars::prelude::*;

use crate::types::{BinaryReport, DetectionReport, FrocCurve, PrecisionRecallCurve};

/// One row per class: AP, ground-truth count, and windowed FROC
/// sensitivity. Classes without ground truth carry nulls.
pub fn detection_report_frame(report: &DetectionReport) -> PolarsResult<DataFrame> {
    let classes: Vec<u32> = (0..report.per_class.len() as u32).collect();
    let aps: Vec<Option<f32>> = report.per_class.iter().map(|m| m.ap).collect();
    let num_gt: Vec<u32> = report
        .per_class
        .iter()
        .map(|m| m.num_gt_boxes as u32)
        .collect();
    let froc_sens: Vec<Option<f32>> = report
        .per_class
        .iter()
        .map(|m| m.froc_sensitivity)
        .collect();

    df!(
        "class" => classes,
        "ap" => aps,
        "num_gt_boxes" => num_gt,
        "froc_sensitivity" => froc_sens
    )
}

/// One row per curve point: false positives per image and sensitivity.
pub fn froc_frame(curve: &FrocCurve) -> PolarsResult<DataFrame> {
    df!(
        "fps_per_image" => curve.fps_per_image.clone(),
        "sensitivity" => curve.sensitivity.clone()
    )
}

/// One row per curve point: recall and precision.
pub fn precision_recall_frame(curve: &PrecisionRecallCurve) -> PolarsResult<DataFrame> {
    df!(
        "recall" => curve.recall.clone(),
        "precision" => curve.precision.clone()
    )
}

/// One row per score threshold of a binary-presence report.
pub fn binary_report_frame(report: &BinaryReport) -> PolarsResult<DataFrame> {
    let thrs: Vec<f32> = report.per_threshold.iter().map(|m| m.score_thr).collect();
    let tp: Vec<u32> = report.per_threshold.iter().map(|m| m.tp as u32).collect();
    let fp: Vec<u32> = report.per_threshold.iter().map(|m| m.fp as u32).collect();
    let tn: Vec<u32> = report.per_threshold.iter().map(|m| m.tn as u32).collect();
    let fn_: Vec<u32> = report.per_threshold.iter().map(|m| m.fn_ as u32).collect();
    let accuracy: Vec<f32> = report.per_threshold.iter().map(|m| m.accuracy).collect();
    let sensitivity: Vec<f32> = report
        .per_threshold
        .iter()
        .map(|m| m.sensitivity)
        .collect();
    let specificity: Vec<f32> = report
        .per_threshold
        .iter()
        .map(|m| m.specificity)
        .collect();
    let precision: Vec<f32> = report.per_threshold.iter().map(|m| m.precision).collect();

    df!(
        "score_thr" => thrs,
        "tp" => tp,
        "fp" => fp,
        "tn" => tn,
        "fn" => fn_,
        "accuracy" => accuracy,
        "sensitivity" => sensitivity,
        "specificity" => specificity,
        "precision" => precision
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::evaluate_binary_presence;
    use crate::evaluator::{evaluate_detections, EvalOptions};
    use crate::types::{BoundingBox, Detections, GroundTruth, ScoredBox};

    fn sample_pair() -> (Detections, GroundTruth) {
        let mut gts = GroundTruth::new(2);
        gts.push_image(
            "img0",
            vec![vec![BoundingBox::new(10.0, 10.0, 50.0, 50.0)], vec![]],
        )
        .unwrap();
        let mut dts = Detections::new(2);
        dts.push_image(
            "img0",
            vec![vec![ScoredBox::new(10.0, 10.0, 50.0, 50.0, 0.9)], vec![]],
        )
        .unwrap();
        (dts, gts)
    }

    #[test]
    fn test_detection_report_frame() {
        let (dts, gts) = sample_pair();
        let report = evaluate_detections(&dts, &gts, &EvalOptions::default()).unwrap();
        let df = detection_report_frame(&report).unwrap();

        assert_eq!(df.shape(), (2, 4));
        let aps = df.column("ap").unwrap().f32().unwrap();
        assert!((aps.get(0).unwrap() - 1.0).abs() < 1e-6);
        // Class 1 has no ground truth: null AP.
        assert!(aps.get(1).is_none());
    }

    #[test]
    fn test_froc_frame_shape() {
        let (dts, gts) = sample_pair();
        let report = evaluate_detections(&dts, &gts, &EvalOptions::default()).unwrap();
        let froc = report.per_class[0].froc.as_ref().unwrap();
        let df = froc_frame(froc).unwrap();
        assert_eq!(df.shape(), (1, 2));
    }

    #[test]
    fn test_binary_report_frame() {
        let mut gts = GroundTruth::new(1);
        gts.push_image("img0", vec![vec![BoundingBox::new(10.0, 10.0, 50.0, 50.0)]])
            .unwrap();
        let mut dts = Detections::new(1);
        dts.push_image("img0", vec![vec![ScoredBox::new(10.0, 10.0, 50.0, 50.0, 0.9)]])
            .unwrap();

        let report = evaluate_binary_presence(&dts, &gts, &[0.05, 0.5]).unwrap();
        let df = binary_report_frame(&report).unwrap();
        assert_eq!(df.shape(), (2, 9));
        let tp = df.column("tp").unwrap().u32().unwrap();
        assert_eq!(tp.get(0), Some(1));
    }
}
