//! Core polygon type and winding-number containment.

use super::collinear_eps;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::segments_intersect;
use num_traits::Float;

/// A closed polygon given by its ordered boundary vertices.
///
/// The last vertex connects implicitly back to the first. Vertices are
/// expected in one consistent traversal direction (clockwise or
/// counter-clockwise); no simplicity invariant is enforced, and
/// self-intersecting boundaries are detected rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The boundary vertices in traversal order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from vertices in traversal order.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the directed edge segments in traversal order, including
    /// the closing edge from the last vertex back to the first.
    pub fn edges(&self) -> Vec<Segment2<F>> {
        let n = self.vertices.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]));
        }
        edges
    }

    /// Returns the bounding box as `(min, max)` corner points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;

        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        Some((min, max))
    }

    /// Returns the bounding-box diagonal length.
    ///
    /// Cast rays are sized from this so the algorithm stays
    /// scale-independent instead of assuming any fixed screen extent.
    pub fn diameter(&self) -> F {
        match self.bounding_box() {
            Some((min, max)) => min.distance(max),
            None => F::zero(),
        }
    }

    /// Returns the signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise traversal, negative for clockwise.
    pub fn signed_area(&self) -> F {
        let n = self.vertices.len();
        if n < 3 {
            return F::zero();
        }

        let mut sum = F::zero();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum = sum + a.x * b.y - b.x * a.y;
        }
        sum / F::from(2.0).unwrap()
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests whether a point lies inside the polygon boundary.
    pub fn contains(&self, point: Point2<F>) -> bool {
        inside_polygon(point, &self.edges())
    }
}

/// Tests whether a point lies inside a polygon boundary, given its edges.
///
/// Casts a horizontal ray from the point and accumulates signed boundary
/// crossings: +1 for each crossed edge heading upward, -1 heading
/// downward, 0 for horizontal edges. A nonzero total means the point is
/// inside. Counting signed crossings rather than parity makes the test a
/// winding-number test, correct for non-convex and self-intersecting
/// boundaries alike.
///
/// The ray reach is derived from the actual edge extent, so the test is
/// independent of coordinate scale. Points exactly on the boundary may
/// report either way.
pub fn inside_polygon<F: Float>(point: Point2<F>, edges: &[Segment2<F>]) -> bool {
    if edges.is_empty() {
        return false;
    }

    // Reach past the rightmost coordinate by the full extent of the
    // geometry so the ray always exits it.
    let mut min = edges[0].start;
    let mut max = edges[0].start;
    for e in edges {
        for p in [e.start, e.end] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
    }
    let reach = max.x + min.distance(max) + F::one();
    let ray = Segment2::new(point, Point2::new(reach, point.y));

    let eps = collinear_eps::<F>();
    let mut winding = 0i32;
    for &edge in edges {
        if segments_intersect(ray, edge, eps) {
            let rise = edge.end.y - edge.start.y;
            if rise > F::zero() {
                winding += 1;
            } else if rise < F::zero() {
                winding -= 1;
            }
        }
    }

    winding != 0
}
