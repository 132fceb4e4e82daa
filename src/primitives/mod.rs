//! Floating-point geometric value types.
//!
//! All entities are immutable by-value types, generic over `f32`/`f64`.

mod point2;
mod segment2;
mod vec2;

pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;
