//! # meddet-eval
//!
//! Detection-evaluation metrics for medical-imaging research: average
//! precision (AP) and FROC analysis for lesion/finding detectors, plus an
//! image-level binary-presence evaluation with ROC/AUC.
//!
//! The crate consumes plain in-memory datasets (per-image, per-class box
//! lists) and produces metric reports; reading annotation files and
//! running models are the caller's concern.
//!
//! ## Features
//!
//! - Pairwise IoU and IoU matrices under the inclusive-pixel convention
//! - Greedy first-claim matching of detections to ground-truth boxes
//! - Precision/recall curves with VOC2007 (11-point) and VOC2012
//!   (continuous) AP integration
//! - FROC curves (false positives per image vs sensitivity) with a
//!   windowed average-sensitivity summary
//! - Image-level presence/absence confusion metrics and ROC/AUC
//! - Polars `DataFrame` export of every report
//!
//! ## Quick Start
//!
//! ```rust
//! use meddet_eval::evaluator::{evaluate_detections, EvalOptions};
//! use meddet_eval::types::{BoundingBox, Detections, GroundTruth, ScoredBox};
//!
//! # fn main() -> meddet_eval::error::Result<()> {
//! let mut ground_truth = GroundTruth::new(1);
//! ground_truth.push_image(
//!     "study-001",
//!     vec![vec![BoundingBox::new(10.0, 10.0, 50.0, 50.0)]],
//! )?;
//!
//! let mut detections = Detections::new(1);
//! detections.push_image(
//!     "study-001",
//!     vec![vec![ScoredBox::new(12.0, 11.0, 49.0, 50.0, 0.87)]],
//! )?;
//!
//! let report = evaluate_detections(&detections, &ground_truth, &EvalOptions::default())?;
//! println!("mean AP: {:?}", report.mean_ap);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod dataframe;
pub mod error;
pub mod evaluator;
pub mod matching;
pub mod metrics;
pub mod types;

// Re-export commonly used types and functions
pub use classifier::evaluate_binary_presence;
pub use error::{EvalError, Result};
pub use evaluator::{evaluate_detections, EvalOptions};
pub use metrics::{average_precision, mean_average_precision, overlap, overlap_matrix};
pub use types::{
    BinaryReport, BinaryThresholdMetrics, BoundingBox, ClassMetrics, Dataset, DetectionReport,
    Detections, FrocCurve, GroundTruth, PrecisionRecallCurve, RocCurve, ScoredBox,
};
