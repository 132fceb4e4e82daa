//! sightline - visibility polygons inside planar polygons
//!
//! Given a closed polygon and a viewpoint strictly inside it, this crate
//! computes the visibility polygon: the ordered boundary of the region
//! directly line-of-sight visible from the viewpoint, suitable for a
//! triangle fan anchored at the viewpoint.
//!
//! The algorithms are built on sign-based orientation predicates rather
//! than trigonometric comparisons wherever possible, with explicit,
//! documented tolerances for the places where constructed points carry
//! floating-point error. Self-intersecting polygons are supported: the
//! crossing points are detected and treated as additional candidate
//! boundary points, never rejected.
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
//! // In a convex room the whole boundary is visible.
//! let visible = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();
//! assert_eq!(visible.len(), 4);
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::VisibilityError;
pub use polygon::{
    has_self_intersection, inside_polygon, is_visible, order_along_boundary, self_intersections,
    visibility_polygon, visible_vertices, Polygon, SelfIntersection,
};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{
    dedup_points, orient2d, point_on_closed_segment, point_on_open_segment, points_identical,
    segment_intersection, segment_intersections, segments_intersect, Orientation,
};
