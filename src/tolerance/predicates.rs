//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The triple turns counter-clockwise (positive cross product).
    CounterClockwise,
    /// The triple turns clockwise (negative cross product).
    Clockwise,
    /// The triple is collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of the ordered triple `(p, q, r)`.
///
/// The sign of the cross product `(q - p) x (r - q)` classifies the turn
/// taken at `q` when walking `p -> q -> r`. This sign test is the
/// fundamental predicate underneath every intersection and containment
/// check in the crate; it is preferred over trigonometric comparison
/// because it involves no `acos`/`atan` instability.
///
/// # Arguments
///
/// * `p`, `q`, `r` - The three points to test
/// * `eps` - Collinearity tolerance, compared against the raw cross
///   product (twice the signed triangle area), so it scales with the
///   square of the coordinate magnitudes
#[inline]
pub fn orient2d<F: Float>(p: Point2<F>, q: Point2<F>, r: Point2<F>, eps: F) -> Orientation {
    let cross = (q - p).cross(r - q);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests whether `q` lies within the closed bounding box of `p` and `r`.
///
/// This is only a segment-membership test once `p`, `q`, `r` are known to
/// be collinear; it is the fallback the crossing test uses for its
/// degenerate sub-cases.
#[inline]
pub fn point_on_closed_segment<F: Float>(p: Point2<F>, q: Point2<F>, r: Point2<F>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Tests whether two points are the same point, within tolerance.
///
/// Constructed points (ray hits, edge crossings) accumulate floating
/// error, so every set, dedup, and lookup operation on them goes through
/// this comparator rather than bit-equality.
#[inline]
pub fn points_identical<F: Float>(a: Point2<F>, b: Point2<F>, eps: F) -> bool {
    a.distance(b) < eps
}

/// Tests whether `p` lies strictly between a segment's endpoints.
///
/// `p` is on the open segment when the sum of its distances to the two
/// endpoints exceeds the segment length by less than `slack`, and `p` is
/// identical to neither endpoint (under `ident_eps`).
///
/// The slack is deliberately looser than the identity epsilon: points
/// produced by ray/edge intersection carry larger numeric error than
/// directly supplied vertices. Both tolerances are scale-dependent and
/// independently tunable.
pub fn point_on_open_segment<F: Float>(
    p: Point2<F>,
    segment: Segment2<F>,
    slack: F,
    ident_eps: F,
) -> bool {
    let detour = p.distance(segment.start) + p.distance(segment.end) - segment.length();
    if detour >= slack {
        return false;
    }
    !points_identical(p, segment.start, ident_eps) && !points_identical(p, segment.end, ident_eps)
}

/// Tests whether two closed segments intersect.
///
/// The general case uses four orientation tests on the endpoint
/// quadruple: the segments cross iff each segment's endpoints lie on
/// opposite sides of the other's carrying line. Each of the four
/// collinear degeneracies falls back to a bounding-box containment check,
/// so endpoint touches and collinear overlaps count as intersections.
///
/// A segment always intersects itself; callers that cast rays towards
/// their own target must filter shared endpoints out of the resulting
/// intersection points.
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    let o1 = orient2d(s1.start, s1.end, s2.start, eps);
    let o2 = orient2d(s1.start, s1.end, s2.end, eps);
    let o3 = orient2d(s2.start, s2.end, s1.start, eps);
    let o4 = orient2d(s2.start, s2.end, s1.end, eps);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Degenerate sub-cases: an endpoint collinear with the other segment.
    if o1 == Orientation::Collinear && point_on_closed_segment(s1.start, s2.start, s1.end) {
        return true;
    }
    if o2 == Orientation::Collinear && point_on_closed_segment(s1.start, s2.end, s1.end) {
        return true;
    }
    if o3 == Orientation::Collinear && point_on_closed_segment(s2.start, s1.start, s2.end) {
        return true;
    }
    if o4 == Orientation::Collinear && point_on_closed_segment(s2.start, s1.end, s2.end) {
        return true;
    }

    false
}

/// Computes the intersection point of two segments, if they intersect.
///
/// Gated by [`segments_intersect`]; when the segments cross, the point is
/// solved parametrically with Cramer's rule on the direction vectors, so
/// vertical segments need no special case. Collinear contact (parallel
/// directions that still intersect) reports an endpoint of one segment
/// lying on the other.
pub fn segment_intersection<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> Option<Point2<F>> {
    if !segments_intersect(s1, s2, eps) {
        return None;
    }

    let d1 = s1.direction();
    let d2 = s2.direction();
    let denom = d1.cross(d2);

    if denom.abs() <= eps {
        // Collinear contact: the segments share at least one endpoint-on-
        // segment configuration, so report the first such endpoint.
        if point_on_closed_segment(s1.start, s2.start, s1.end) {
            return Some(s2.start);
        }
        if point_on_closed_segment(s1.start, s2.end, s1.end) {
            return Some(s2.end);
        }
        if point_on_closed_segment(s2.start, s1.start, s2.end) {
            return Some(s1.start);
        }
        if point_on_closed_segment(s2.start, s1.end, s2.end) {
            return Some(s1.end);
        }
        return None;
    }

    let d = s2.start - s1.start;
    let t = d.cross(d2) / denom;
    Some(s1.point_at(t))
}

/// Collects the intersection points of one segment against many.
///
/// The result preserves the order of `segments`; a ray that touches a
/// shared vertex of two adjacent edges reports that point twice, which is
/// why callers dedup and corner-filter afterwards.
pub fn segment_intersections<F: Float>(
    line: Segment2<F>,
    segments: &[Segment2<F>],
    eps: F,
) -> Vec<Point2<F>> {
    let mut points = Vec::new();
    for &segment in segments {
        if let Some(point) = segment_intersection(line, segment, eps) {
            points.push(point);
        }
    }
    points
}
