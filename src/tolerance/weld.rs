//! Point deduplication under the identity tolerance.

use super::points_identical;
use crate::primitives::Point2;
use num_traits::Float;

/// Removes points that duplicate an earlier point, within `eps`.
///
/// Keeps the first representative of each cluster, preserving input
/// order. The visibility pipeline runs its merged candidate set (visible
/// vertices, reflex expansion points, visible crossings) through this
/// before boundary ordering, since the same boundary location can be
/// produced by several casts with slightly different rounding.
///
/// O(n^2), which is fine at the interactive polygon sizes this crate
/// targets.
///
/// # Example
///
/// ```
/// use sightline::{dedup_points, Point2};
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(0.0002, 0.0001), // same location, different rounding
///     Point2::new(1.0, 0.0),
/// ];
///
/// let unique = dedup_points(&points, 1e-3);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].x, 0.0);
/// ```
pub fn dedup_points<F: Float>(points: &[Point2<F>], eps: F) -> Vec<Point2<F>> {
    let mut unique: Vec<Point2<F>> = Vec::with_capacity(points.len());
    for &p in points {
        if !unique.iter().any(|&kept| points_identical(kept, p, eps)) {
            unique.push(p);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_empty() {
        let points: Vec<Point2<f64>> = Vec::new();
        assert!(dedup_points(&points, 1e-3).is_empty());
    }

    #[test]
    fn test_dedup_keeps_first() {
        let points = vec![
            Point2::new(5.0_f64, 5.0),
            Point2::new(5.0005, 5.0),
            Point2::new(5.0, 5.0005),
        ];
        let unique = dedup_points(&points, 1e-3);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].x, 5.0);
        assert_eq!(unique[0].y, 5.0);
    }

    #[test]
    fn test_dedup_preserves_distinct() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(dedup_points(&points, 1e-3).len(), 3);
    }

    #[test]
    fn test_dedup_preserves_order() {
        let points = vec![
            Point2::new(2.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0001, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let unique = dedup_points(&points, 1e-3);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0].x, 2.0);
        assert_eq!(unique[1].x, 1.0);
        assert_eq!(unique[2].x, 0.0);
    }
}
