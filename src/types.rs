//! Core data types: bounding boxes and per-image, per-class datasets.

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// An axis-aligned bounding box in image pixel coordinates
/// `(x_min, y_min, x_max, y_max)`.
///
/// Areas and overlaps use the inclusive-pixel convention: a box whose
/// corners coincide still covers one pixel, so
/// `area = (x_max - x_min + 1) * (y_max - y_min + 1)`. This matches the
/// convention the annotation tooling was built around and must not be
/// changed; results would silently shift otherwise.
///
/// Coordinates are not validated. A box with `x_max < x_min` simply has
/// no positive overlap with anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BoundingBox {
    /// Create a new bounding box from its corner coordinates.
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Area under the inclusive-pixel convention.
    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min + 1.0) * (self.y_max - self.y_min + 1.0)
    }
}

/// A detection: a [`BoundingBox`] plus a confidence score.
///
/// Scores are conventionally in `[0, 1]` but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredBox {
    pub bbox: BoundingBox,
    pub score: f32,
}

impl ScoredBox {
    /// Create a new scored box.
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32, score: f32) -> Self {
        Self {
            bbox: BoundingBox::new(x_min, y_min, x_max, y_max),
            score,
        }
    }
}

/// A per-image, per-class collection of box-like items with an ordered
/// list of image identifiers.
///
/// `items[image_index][class_index]` holds the boxes for one image and
/// one class; every image entry covers every class (possibly with an
/// empty list). Two datasets are aligned by image *identifier*, never by
/// position, so callers may push images in any order as long as the two
/// datasets cover the same identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset<T> {
    num_classes: usize,
    image_ids: Vec<String>,
    items: Vec<Vec<Vec<T>>>,
}

/// Ground-truth boxes for a set of images.
pub type GroundTruth = Dataset<BoundingBox>;

/// Detections (scored boxes) for a set of images.
pub type Detections = Dataset<ScoredBox>;

impl<T> Dataset<T> {
    /// Create an empty dataset covering `num_classes` classes.
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            image_ids: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Append one image's per-class box lists.
    ///
    /// `per_class` must contain exactly one list per class. Image ids
    /// must be unique within a dataset.
    pub fn push_image(&mut self, image_id: impl Into<String>, per_class: Vec<Vec<T>>) -> Result<()> {
        let image_id = image_id.into();
        if per_class.len() != self.num_classes {
            return Err(EvalError::WrongClassCount {
                image_id,
                got: per_class.len(),
                expected: self.num_classes,
            });
        }
        if self.image_ids.contains(&image_id) {
            return Err(EvalError::DuplicateImageId(image_id));
        }
        self.image_ids.push(image_id);
        self.items.push(per_class);
        Ok(())
    }

    /// Number of images in the dataset.
    pub fn num_images(&self) -> usize {
        self.image_ids.len()
    }

    /// True if the dataset contains no images.
    pub fn is_empty(&self) -> bool {
        self.image_ids.is_empty()
    }

    /// Number of classes the dataset was built for.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Ordered image identifiers.
    pub fn image_ids(&self) -> &[String] {
        &self.image_ids
    }

    /// Position of an image id, if present.
    pub fn index_of(&self, image_id: &str) -> Option<usize> {
        self.image_ids.iter().position(|id| id == image_id)
    }

    /// Boxes for one image and one class.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn boxes(&self, image_index: usize, class_index: usize) -> &[T] {
        &self.items[image_index][class_index]
    }
}

/// A precision/recall curve for one class, one point per detection in
/// descending-score order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecallCurve {
    pub recall: Vec<f32>,
    pub precision: Vec<f32>,
}

/// A FROC curve for one class: false positives per image vs sensitivity,
/// one point per detection in descending-score order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrocCurve {
    pub fps_per_image: Vec<f32>,
    pub sensitivity: Vec<f32>,
}

/// An image-level ROC curve with its trapezoidal AUC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    pub fpr: Vec<f32>,
    pub tpr: Vec<f32>,
    pub auc: f32,
}

/// Per-class detection metrics.
///
/// A class with zero ground-truth boxes has no defined AP or curves;
/// those fields are `None` rather than zero so callers can exclude the
/// class from aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Average precision, `None` when the class has no ground truth.
    pub ap: Option<f32>,
    /// Total ground-truth boxes for this class across all images.
    pub num_gt_boxes: usize,
    /// Precision/recall curve, `None` when the class has no ground truth.
    pub precision_recall: Option<PrecisionRecallCurve>,
    /// FROC curve, `None` when the class has no ground truth.
    pub froc: Option<FrocCurve>,
    /// Average sensitivity over the configured fp-per-image window,
    /// `None` when no curve point falls inside the window.
    pub froc_sensitivity: Option<f32>,
}

/// Full detection evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// One metrics block per class, indexed by class.
    pub per_class: Vec<ClassMetrics>,
    /// Mean AP over classes that have one; `None` if no class does.
    pub mean_ap: Option<f32>,
    /// Number of evaluated images.
    pub num_images: usize,
}

/// Confusion counts and derived rates at one score threshold for the
/// binary-presence evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryThresholdMetrics {
    pub score_thr: f32,
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_: usize,
    pub accuracy: f32,
    pub sensitivity: f32,
    pub specificity: f32,
    pub precision: f32,
}

/// Binary-presence evaluation report: one block per requested threshold
/// plus a single threshold-independent ROC curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryReport {
    pub per_threshold: Vec<BinaryThresholdMetrics>,
    pub roc: RocCurve,
}
