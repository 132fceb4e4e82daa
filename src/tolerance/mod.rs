//! Epsilon-aware geometric predicates and point operations.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used; the polygon layer supplies the crate
//! defaults documented there.

mod predicates;
mod weld;

pub use predicates::{
    orient2d, point_on_closed_segment, point_on_open_segment, points_identical,
    segment_intersection, segment_intersections, segments_intersect, Orientation,
};
pub use weld::dedup_points;
