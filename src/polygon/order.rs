//! Ordering of boundary points along polygon traversal.

use super::{edge_slack, ident_eps};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{point_on_open_segment, points_identical};
use num_traits::Float;
use std::cmp::Ordering;

/// Orders an unordered set of boundary points into polygon traversal order.
///
/// Walks the boundary edges in order. For each edge, the not-yet-placed
/// input points that coincide with the edge's start vertex or lie strictly
/// on the open edge are appended, nearest-to-the-edge-start first. Each
/// input point is placed at most once, so a point sitting on two edges
/// (a self-intersection pinch, say) appears once in the output.
///
/// The result is a single closed cycle in the polygon's own traversal
/// direction, which is what lets the caller triangle-fan it from the
/// viewpoint without self-crossing triangles.
pub fn order_along_boundary<F: Float>(
    points: &[Point2<F>],
    boundary: &[Point2<F>],
) -> Vec<Point2<F>> {
    let n = boundary.len();
    if n == 0 {
        return Vec::new();
    }

    let ident = ident_eps::<F>();
    let slack = edge_slack::<F>();
    let mut placed = vec![false; points.len()];
    let mut ordered = Vec::with_capacity(points.len());

    for i in 0..n {
        let start = boundary[i];
        let edge = Segment2::new(start, boundary[(i + 1) % n]);

        let mut on_edge: Vec<usize> = (0..points.len())
            .filter(|&k| {
                !placed[k]
                    && (points_identical(points[k], start, ident)
                        || point_on_open_segment(points[k], edge, slack, ident))
            })
            .collect();

        on_edge.sort_by(|&a, &b| {
            let da = points[a].distance(start);
            let db = points[b].distance(start);
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        });

        for k in on_edge {
            placed[k] = true;
            ordered.push(points[k]);
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_orders_shuffled_vertices() {
        let boundary = square();
        let shuffled = vec![boundary[2], boundary[0], boundary[3], boundary[1]];
        let ordered = order_along_boundary(&shuffled, &boundary);
        assert_eq!(ordered, boundary);
    }

    #[test]
    fn test_mid_edge_points_sorted_by_distance() {
        let boundary = square();
        let points = vec![
            Point2::new(7.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(10.0, 4.0),
        ];
        let ordered = order_along_boundary(&points, &boundary);
        assert_eq!(
            ordered,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(3.0, 0.0),
                Point2::new(7.0, 0.0),
                Point2::new(10.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_point_on_two_edges_placed_once() {
        // The pinch of a bowtie lies on two edges; it must appear once.
        let boundary = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ];
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 4.0),
        ];
        let ordered = order_along_boundary(&points, &boundary);
        assert_eq!(
            ordered,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_noisy_point_still_placed() {
        // Constructed intersections sit slightly off the edge.
        let boundary = square();
        let points = vec![Point2::new(5.0, 0.004), Point2::new(0.0, 0.0)];
        let ordered = order_along_boundary(&points, &boundary);
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0], Point2::new(0.0, 0.0));
        assert_eq!(ordered[1], Point2::new(5.0, 0.004));
    }

    #[test]
    fn test_off_boundary_point_dropped() {
        let boundary = square();
        let points = vec![Point2::new(5.0, 5.0)];
        assert!(order_along_boundary(&points, &boundary).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(order_along_boundary::<f64>(&[], &square()).is_empty());
        assert!(order_along_boundary::<f64>(&[Point2::origin()], &[]).is_empty());
    }
}
