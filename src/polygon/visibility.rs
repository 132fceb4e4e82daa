//! Visibility polygon computation.
//!
//! Computes the boundary of the region directly visible from a viewpoint
//! inside a polygon, as an ordered vertex sequence ready to triangle-fan
//! from the viewpoint.
//!
//! The algorithm casts a sight segment to every polygon vertex, classifies
//! each visible vertex as convex or reflex relative to the viewpoint, and
//! at each reflex vertex continues the ray past the vertex until it meets
//! the edge it shadows. Self-intersection points of non-simple polygons
//! join the candidate set through the same direct-visibility test.
//!
//! # Example
//!
//! ```
//! use sightline::{visibility_polygon, Point2, Polygon};
//!
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! let visible = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();
//! assert_eq!(visible.vertices, room.vertices);
//! ```

use super::{collinear_eps, ident_eps, order_along_boundary, self_intersections, Polygon};
use crate::error::VisibilityError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{dedup_points, points_identical, segment_intersections};
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the visibility polygon seen from a viewpoint inside `boundary`.
///
/// Returns the visible boundary locations as a polygon in the boundary's
/// own traversal order: directly visible vertices, the shadow-edge points
/// cast past reflex vertices, and visible self-intersection points,
/// deduplicated under the point-identity tolerance.
///
/// The viewpoint must lie strictly inside the boundary; callers validate
/// this with [`super::inside_polygon`] beforehand, and the result is
/// unspecified when the precondition is violated. Boundaries with fewer
/// than three vertices produce an empty polygon.
///
/// # Errors
///
/// Only internal invariant failures in edge adjacency bookkeeping are
/// reported; they cannot occur for a well-formed closed boundary.
pub fn visibility_polygon<F: Float>(
    boundary: &Polygon<F>,
    viewpoint: Point2<F>,
) -> Result<Polygon<F>, VisibilityError> {
    let vertices = &boundary.vertices;
    if vertices.len() < 3 {
        return Ok(Polygon::empty());
    }

    let edges = boundary.edges();
    let reach = boundary.diameter() * F::from(10.0).unwrap();

    let mut candidates = Vec::new();
    for vertex in visible_vertices(viewpoint, vertices, &edges) {
        candidates.push(vertex);
        if let Some(shadow) = expand_past_reflex(viewpoint, vertex, &edges, vertices, reach)? {
            candidates.push(shadow);
        }
    }

    for crossing in self_intersections(boundary) {
        if is_visible(viewpoint, crossing.point, &edges, vertices) {
            candidates.push(crossing.point);
        }
    }

    let unique = dedup_points(&candidates, ident_eps::<F>());
    Ok(Polygon::new(order_along_boundary(&unique, vertices)))
}

/// Returns the polygon vertices directly visible from `viewpoint`.
///
/// A vertex is visible iff the sight segment from the viewpoint to it
/// meets no polygon edge, after discarding intersections that fall within
/// the identity tolerance of any original vertex: the sight segment
/// necessarily touches its own target vertex and that vertex's incident
/// edges there, and a graze exactly through another vertex does not count
/// as an obstruction either.
pub fn visible_vertices<F: Float>(
    viewpoint: Point2<F>,
    vertices: &[Point2<F>],
    edges: &[Segment2<F>],
) -> Vec<Point2<F>> {
    let eps = collinear_eps::<F>();
    let mut visible = Vec::new();
    for &vertex in vertices {
        let sight = Segment2::new(viewpoint, vertex);
        let hits = segment_intersections(sight, edges, eps);
        let blockers = reject_near(hits, vertices, ident_eps::<F>());
        if blockers.is_empty() {
            visible.push(vertex);
        }
    }
    visible
}

/// Tests direct visibility of an arbitrary boundary point.
///
/// Like the vertex test, but the target itself is also excluded from the
/// obstruction set (a sight segment inherently touches its own target),
/// and residual hits closer than 0.1 units to the target are discarded as
/// floating-point grazing noise. Used for self-intersection points, whose
/// coordinates are constructed rather than drawn.
pub fn is_visible<F: Float>(
    viewpoint: Point2<F>,
    target: Point2<F>,
    edges: &[Segment2<F>],
    corners: &[Point2<F>],
) -> bool {
    let hits = segment_intersections(Segment2::new(viewpoint, target), edges, collinear_eps::<F>());

    let ident = ident_eps::<F>();
    let mut anchors = corners.to_vec();
    anchors.push(target);
    let hits = reject_near(hits, &anchors, ident);

    let graze = F::from(0.1).unwrap();
    hits.into_iter().all(|hit| hit.distance(target) <= graze)
}

/// Continues the viewpoint ray past a reflex vertex to the edge it shadows.
///
/// The vertex is classified by comparing the wedge angle between its two
/// incident edges against the two angles the sight ray makes with those
/// edges: when the ray angles sum to the wedge (or to its explement) the
/// vertex is convex as seen from the viewpoint and the visibility boundary
/// stops there. Otherwise the ray is extended well past the vertex and the
/// closest corner-filtered edge intersection becomes the shadow-edge
/// point. No remaining intersection means no expansion, which is not an
/// error.
fn expand_past_reflex<F: Float>(
    viewpoint: Point2<F>,
    vertex: Point2<F>,
    edges: &[Segment2<F>],
    corners: &[Point2<F>],
    reach: F,
) -> Result<Option<Point2<F>>, VisibilityError> {
    let (outgoing, incoming) = incident_edges(vertex, edges)?;

    let to_viewpoint = Segment2::new(vertex, viewpoint);
    let wedge = segment_angle(outgoing, incoming)?;
    let first = segment_angle(to_viewpoint, outgoing)?;
    let second = segment_angle(to_viewpoint, incoming)?;

    let tol = F::from(0.05).unwrap();
    let two_pi = F::from(2.0).unwrap() * F::from(std::f64::consts::PI).unwrap();
    let sum = first + second;
    if (sum - wedge).abs() < tol || (sum + wedge - two_pi).abs() < tol {
        return Ok(None);
    }

    let ray = match Segment2::new(viewpoint, vertex).extended(reach) {
        Some(ray) => ray,
        None => return Ok(None),
    };
    let hits = segment_intersections(ray, edges, collinear_eps::<F>());
    let hits = reject_near(hits, corners, ident_eps::<F>());

    Ok(hits.into_iter().min_by(|a, b| {
        a.distance(viewpoint)
            .partial_cmp(&b.distance(viewpoint))
            .unwrap_or(Ordering::Equal)
    }))
}

/// Finds the two polygon edges incident to `vertex`, both re-rooted at it.
///
/// Returns the edge leaving the vertex and the reversed edge arriving at
/// it, so both share the vertex as their origin for angle measurement.
fn incident_edges<F: Float>(
    vertex: Point2<F>,
    edges: &[Segment2<F>],
) -> Result<(Segment2<F>, Segment2<F>), VisibilityError> {
    let ident = ident_eps::<F>();
    let mut outgoing = None;
    let mut incoming = None;

    for &edge in edges {
        if outgoing.is_none() && points_identical(edge.start, vertex, ident) {
            outgoing = Some(edge);
        }
        if incoming.is_none() && points_identical(edge.end, vertex, ident) {
            incoming = Some(edge.reversed());
        }
    }

    match (outgoing, incoming) {
        (Some(out), Some(inc)) => Ok((out, inc)),
        _ => Err(VisibilityError::MissingIncidentEdge),
    }
}

/// Measures the unsigned angle between two segments sharing an origin.
fn segment_angle<F: Float>(
    first: Segment2<F>,
    second: Segment2<F>,
) -> Result<F, VisibilityError> {
    if !points_identical(first.start, second.start, ident_eps::<F>()) {
        return Err(VisibilityError::MismatchedOrigins);
    }
    Ok(first.direction().angle_between(second.direction()))
}

/// Drops points that fall within `eps` of any anchor point.
fn reject_near<F: Float>(
    points: Vec<Point2<F>>,
    anchors: &[Point2<F>],
    eps: F,
) -> Vec<Point2<F>> {
    points
        .into_iter()
        .filter(|&p| !anchors.iter().any(|&a| points_identical(p, a, eps)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    /// L-shape with its single reflex vertex at (5, 5); the notch quadrant
    /// x > 5, y > 5 is outside.
    fn l_shape() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
    }

    fn bowtie() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ])
    }

    fn assert_points_eq(actual: &[Point2<f64>], expected: &[Point2<f64>]) {
        assert_eq!(actual.len(), expected.len(), "lengths differ");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a.x, e.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, e.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_square_sees_all_corners_in_order() {
        let room = square(10.0);
        let visible = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();
        assert_points_eq(&visible.vertices, &room.vertices);
    }

    #[test]
    fn test_convex_polygon_returns_own_vertices() {
        // Irregular convex pentagon, a couple of viewpoints.
        let pentagon = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(11.0, 5.0),
            Point2::new(4.0, 9.0),
            Point2::new(-2.0, 4.0),
        ]);
        for viewpoint in [Point2::new(4.0, 4.0), Point2::new(7.0, 3.0)] {
            let visible = visibility_polygon(&pentagon, viewpoint).unwrap();
            assert_points_eq(&visible.vertices, &pentagon.vertices);
        }
    }

    #[test]
    fn test_l_shape_fully_visible_from_inner_corner_region() {
        // From a viewpoint facing the reflex corner across its wedge, both
        // legs of the L are entirely in view and no expansion triggers.
        let room = l_shape();
        let visible = visibility_polygon(&room, Point2::new(2.0, 2.0)).unwrap();
        assert_points_eq(&visible.vertices, &room.vertices);
    }

    #[test]
    fn test_l_shape_reflex_casts_one_shadow_point() {
        // From (8, 1) the reflex corner at (5, 5) hides the vertex (5, 10)
        // and casts exactly one shadow point onto the far top edge.
        let room = l_shape();
        let visible = visibility_polygon(&room, Point2::new(8.0, 1.0)).unwrap();
        assert_points_eq(
            &visible.vertices,
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 5.0),
                Point2::new(5.0, 5.0),
                Point2::new(1.25, 10.0),
                Point2::new(0.0, 10.0),
            ],
        );
    }

    #[test]
    fn test_l_shape_hidden_vertex_not_reported() {
        let room = l_shape();
        let visible =
            visible_vertices(Point2::new(8.0, 1.0), &room.vertices, &room.edges());
        assert_eq!(visible.len(), 5);
        assert!(!visible
            .iter()
            .any(|v| points_identical(*v, Point2::new(5.0, 10.0), 1e-6)));
    }

    #[test]
    fn test_bowtie_viewpoint_sees_only_its_lobe() {
        // From inside the left lobe the far lobe's vertices are hidden;
        // the pinch point itself is visible and closes the triangle.
        let visible = visibility_polygon(&bowtie(), Point2::new(1.0, 2.0)).unwrap();
        assert_points_eq(
            &visible.vertices,
            &[
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 4.0),
            ],
        );
    }

    #[test]
    fn test_bowtie_pinch_visible_from_lobe() {
        let room = bowtie();
        assert!(is_visible(
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 2.0),
            &room.edges(),
            &room.vertices,
        ));
    }

    #[test]
    fn test_bowtie_far_vertex_blocked() {
        let room = bowtie();
        let visible =
            visible_vertices(Point2::new(1.0, 2.0), &room.vertices, &room.edges());
        assert!(!visible
            .iter()
            .any(|v| points_identical(*v, Point2::new(4.0, 0.0), 1e-6)));
        assert!(!visible
            .iter()
            .any(|v| points_identical(*v, Point2::new(4.0, 4.0), 1e-6)));
    }

    #[test]
    fn test_idempotent() {
        let room = l_shape();
        let viewpoint = Point2::new(8.0, 1.0);
        let first = visibility_polygon(&room, viewpoint).unwrap();
        let second = visibility_polygon(&room, viewpoint).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_boundary_yields_empty() {
        let degenerate = Polygon::new(vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)]);
        let visible = visibility_polygon(&degenerate, Point2::new(0.5, 0.0)).unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn test_triangle_interior() {
        let triangle = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 10.0),
        ]);
        let visible = visibility_polygon(&triangle, Point2::new(5.0, 3.0)).unwrap();
        assert_points_eq(&visible.vertices, &triangle.vertices);
    }

    #[test]
    fn test_f32_support() {
        let room: Polygon<f32> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let visible = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn test_incident_edges_reroots_at_vertex() {
        let room = square(10.0);
        let vertex = Point2::new(10.0, 0.0);
        let (outgoing, incoming) = incident_edges(vertex, &room.edges()).unwrap();
        assert_eq!(outgoing.start, vertex);
        assert_eq!(outgoing.end, Point2::new(10.0, 10.0));
        assert_eq!(incoming.start, vertex);
        assert_eq!(incoming.end, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_incident_edges_missing() {
        let room = square(10.0);
        let stray = Point2::new(42.0, 42.0);
        assert_eq!(
            incident_edges(stray, &room.edges()),
            Err(VisibilityError::MissingIncidentEdge)
        );
    }

    #[test]
    fn test_segment_angle_requires_shared_origin() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment2::from_coords(5.0, 5.0, 6.0, 5.0);
        assert_eq!(segment_angle(a, b), Err(VisibilityError::MismatchedOrigins));
    }

    #[test]
    fn test_segment_angle_right_angle() {
        let a: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 4.0, 1.0);
        let b = Segment2::from_coords(1.0, 1.0, 1.0, 7.0);
        let angle = segment_angle(a, b).unwrap();
        assert_relative_eq!(angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }
}
