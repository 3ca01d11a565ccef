//! Intersection over Union (IoU) under the inclusive-pixel convention.

use crate::types::BoundingBox;

/// Floor applied to the union area before dividing.
pub const UNION_EPS: f32 = f32::EPSILON;

/// Calculate the IoU between two bounding boxes.
///
/// Widths and heights are inclusive: two boxes that merely share an edge
/// pixel still intersect. The union is floored at [`UNION_EPS`] so the
/// result is always a finite number, even for degenerate boxes.
///
/// # Example
///
/// ```
/// use meddet_eval::metrics::iou::overlap;
/// use meddet_eval::types::BoundingBox;
///
/// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
/// let iou = overlap(&a, &b);
/// assert!(iou > 0.0 && iou < 1.0);
/// ```
pub fn overlap(a: &BoundingBox, b: &BoundingBox) -> f32 {
    let iw = (a.x_max.min(b.x_max) - a.x_min.max(b.x_min) + 1.0).max(0.0);
    let ih = (a.y_max.min(b.y_max) - a.y_min.max(b.y_min) + 1.0).max(0.0);

    let intersection = iw * ih;
    let union = (a.area() + b.area() - intersection).max(UNION_EPS);

    intersection / union
}

/// Calculate the pairwise IoU matrix between two sets of boxes.
///
/// Returns an N×M matrix where `result[i][j]` is the IoU between `a[i]`
/// and `b[j]`.
pub fn overlap_matrix(a: &[BoundingBox], b: &[BoundingBox]) -> Vec<Vec<f32>> {
    a.iter()
        .map(|box_a| b.iter().map(|box_b| overlap(box_a, box_b)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes() {
        let a = BoundingBox::new(10.0, 10.0, 50.0, 50.0);
        assert!((overlap(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(overlap(&a, &b), 0.0);
    }

    #[test]
    fn test_inclusive_partial_overlap() {
        // Inclusive widths: each box is 11 pixels wide, the shared
        // region is 6x6 = 36, union is 121 + 121 - 36 = 206.
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let iou = overlap(&a, &b);
        assert!((iou - 36.0 / 206.0).abs() < 1e-6);
    }

    #[test]
    fn test_edge_adjacent_boxes_touch() {
        // x ranges [0,10] and [11,20] do not share a pixel column, but
        // [0,10] and [10,20] do.
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let apart = BoundingBox::new(11.0, 0.0, 20.0, 10.0);
        let touching = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(overlap(&a, &apart), 0.0);
        assert!(overlap(&a, &touching) > 0.0);
    }

    #[test]
    fn test_degenerate_box() {
        // Zero-extent box still covers one pixel.
        let point = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
        assert!((overlap(&point, &point) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_inverted_box_clamps_to_zero() {
        // Malformed coordinates are not rejected; they just never match.
        let bad = BoundingBox::new(50.0, 50.0, 10.0, 10.0);
        let good = BoundingBox::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(overlap(&bad, &good), 0.0);
    }

    #[test]
    fn test_matrix_shape() {
        let a = vec![
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(5.0, 5.0, 15.0, 15.0),
            BoundingBox::new(100.0, 100.0, 110.0, 110.0),
        ];
        let b = vec![
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(200.0, 200.0, 210.0, 210.0),
        ];
        let m = overlap_matrix(&a, &b);
        assert_eq!(m.len(), 3);
        assert_eq!(m[0].len(), 2);
        assert!((m[0][0] - 1.0).abs() < 1e-6);
        assert_eq!(m[2][1], 0.0);
    }
}
