//! Error types for the meddet-eval library.

use thiserror::Error;

/// Result type for meddet-eval operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error types that can occur while assembling datasets or running an
/// evaluation.
///
/// All of these are input errors on the caller's side and are raised
/// before any metric is computed; the numeric core itself never fails
/// (degenerate denominators are epsilon-floored instead).
#[derive(Error, Debug)]
pub enum EvalError {
    /// The detection and ground-truth datasets contain a different number
    /// of images.
    #[error("image count mismatch: {detections} detection images vs {ground_truths} ground-truth images")]
    ImageCountMismatch {
        detections: usize,
        ground_truths: usize,
    },

    /// An image identifier is present in one dataset but not the other.
    #[error("image id '{0}' is present in only one of the two datasets")]
    ImageIdMismatch(String),

    /// The two datasets were built for a different number of classes.
    #[error("class count mismatch: {detections} detection classes vs {ground_truths} ground-truth classes")]
    ClassCountMismatch {
        detections: usize,
        ground_truths: usize,
    },

    /// A per-image entry does not cover every class of its dataset.
    #[error("image '{image_id}' has entries for {got} classes, expected {expected}")]
    WrongClassCount {
        image_id: String,
        got: usize,
        expected: usize,
    },

    /// The same image identifier was pushed twice into one dataset.
    #[error("duplicate image id '{0}'")]
    DuplicateImageId(String),

    /// The binary-presence evaluator only supports single-class datasets.
    #[error("binary-presence evaluation requires exactly 1 class, got {0}")]
    NotBinary(usize),
}
