//! Metric building blocks: IoU, curves, and their scalar summaries.

pub mod ap;
pub mod froc;
pub mod iou;
pub mod precision_recall;
pub mod roc;

pub use ap::{average_precision, mean_average_precision};
pub use froc::{average_sensitivity, froc_from_counts, DEFAULT_FROC_WINDOW};
pub use iou::{overlap, overlap_matrix};
pub use precision_recall::{cumulative_counts, curve_from_counts};
pub use roc::roc_curve;
