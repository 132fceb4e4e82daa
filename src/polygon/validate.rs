//! Polygon self-intersection enumeration.
//!
//! Non-simple polygons are legal input everywhere in this crate: their
//! edge crossings are enumerated here and fed to the visibility engine as
//! additional candidate boundary points, never treated as invalid.

use super::{collinear_eps, Polygon};
use crate::primitives::Point2;
use crate::tolerance::segment_intersection;
use num_traits::Float;

/// A crossing of two non-adjacent polygon edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfIntersection<F> {
    /// The crossing point.
    pub point: Point2<F>,
    /// Index of the earlier edge in traversal order.
    pub edge1: usize,
    /// Index of the later edge.
    pub edge2: usize,
}

/// Enumerates every crossing of non-adjacent edge pairs.
///
/// Each unordered pair of edges that do not share an endpoint is tested
/// once; every intersection found is collected. Visibility of these
/// points from a viewpoint is decided later like any other candidate
/// point.
///
/// # Example
///
/// ```
/// use sightline::{self_intersections, Point2, Polygon};
///
/// // A bowtie crossing itself at (2, 2).
/// let bowtie = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let crossings = self_intersections(&bowtie);
/// assert_eq!(crossings.len(), 1);
/// assert_eq!(crossings[0].point, Point2::new(2.0, 2.0));
/// ```
pub fn self_intersections<F: Float>(polygon: &Polygon<F>) -> Vec<SelfIntersection<F>> {
    let mut crossings = Vec::new();
    let edges = polygon.edges();
    let n = edges.len();
    if n < 4 {
        return crossings;
    }

    let eps = collinear_eps::<F>();
    for i in 0..n {
        for j in (i + 2)..n {
            // The closing edge is adjacent to the first one.
            if i == 0 && j == n - 1 {
                continue;
            }
            if let Some(point) = segment_intersection(edges[i], edges[j], eps) {
                crossings.push(SelfIntersection {
                    point,
                    edge1: i,
                    edge2: j,
                });
            }
        }
    }

    crossings
}

/// Returns true if any two non-adjacent edges cross.
pub fn has_self_intersection<F: Float>(polygon: &Polygon<F>) -> bool {
    !self_intersections(polygon).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bowtie() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ])
    }

    #[test]
    fn test_simple_polygon_has_no_crossings() {
        let square = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        assert!(self_intersections(&square).is_empty());
        assert!(!has_self_intersection(&square));
    }

    #[test]
    fn test_bowtie_has_one_pinch_point() {
        let crossings = self_intersections(&bowtie());
        assert_eq!(crossings.len(), 1);
        assert_relative_eq!(crossings[0].point.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(crossings[0].point.y, 2.0, epsilon = 1e-10);
        assert_eq!(crossings[0].edge1, 0);
        assert_eq!(crossings[0].edge2, 2);
        assert!(has_self_intersection(&bowtie()));
    }

    #[test]
    fn test_triangle_cannot_self_intersect() {
        let triangle = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ]);
        assert!(self_intersections(&triangle).is_empty());
    }

    #[test]
    fn test_concave_polygon_is_simple() {
        let l_shape = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        assert!(!has_self_intersection(&l_shape));
    }

    #[test]
    fn test_double_crossing() {
        // A zig crossing a long bottom edge twice.
        let poly = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 4.0),
            Point2::new(6.0, -2.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let crossings = self_intersections(&poly);
        assert_eq!(crossings.len(), 2);
        for c in &crossings {
            assert_relative_eq!(c.point.y, 0.0, epsilon = 1e-10);
        }
    }
}
