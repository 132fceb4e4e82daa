//! Polygon-level algorithms: containment, self-intersection, visibility.
//!
//! The pipeline a renderer drives looks like:
//!
//! 1. capture a closed [`Polygon`] and a candidate viewpoint,
//! 2. validate placement with [`inside_polygon`],
//! 3. call [`visibility_polygon`] and triangle-fan the returned vertex
//!    sequence from the viewpoint.
//!
//! # Example
//!
//! ```
//! use sightline::{inside_polygon, visibility_polygon, Point2, Polygon};
//!
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//! let viewpoint = Point2::new(5.0, 5.0);
//!
//! assert!(inside_polygon(viewpoint, &room.edges()));
//! let visible = visibility_polygon(&room, viewpoint).unwrap();
//! assert_eq!(visible.len(), 4);
//! ```

mod core;
mod order;
mod validate;
mod visibility;

pub use self::core::{inside_polygon, Polygon};
pub use order::order_along_boundary;
pub use validate::{has_self_intersection, self_intersections, SelfIntersection};
pub use visibility::{is_visible, visibility_polygon, visible_vertices};

use num_traits::Float;

/// Tolerance under which two constructed points are the same point.
///
/// 0.001 world units. Scale-dependent: chosen for interactively drawn
/// geometry with coordinates in the tens-to-hundreds range, not a safe
/// default for arbitrary coordinate scales.
pub(crate) fn ident_eps<F: Float>() -> F {
    F::from(1e-3).unwrap()
}

/// Slack for deciding a constructed point lies on a polygon edge.
///
/// 0.1 world units, deliberately looser than [`ident_eps`]: ray/edge
/// intersection points carry larger numeric error than drawn vertices.
/// Independently tunable from the identity tolerance, and equally
/// scale-dependent.
pub(crate) fn edge_slack<F: Float>() -> F {
    F::from(0.1).unwrap()
}

/// Collinearity tolerance for orientation-based crossing tests.
pub(crate) fn collinear_eps<F: Float>() -> F {
    F::from(1e-9).unwrap()
}
