//! Error types for visibility computation.

use thiserror::Error;

/// Internal invariant failures surfaced by visibility computation.
///
/// These indicate a defect in adjacency bookkeeping rather than bad user
/// input: a well-formed closed polygon can never trigger them. Numeric
/// degeneracies (parallel or vertical segments) and absent results (a ray
/// that meets no further edge) are handled locally and never become errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VisibilityError {
    /// An incidence angle was requested between two segments that do not
    /// share an origin point.
    #[error("segments do not share an origin point")]
    MismatchedOrigins,

    /// A visible vertex has no incident polygon edge, which cannot happen
    /// for a closed boundary.
    #[error("vertex has no incident polygon edge")]
    MissingIncidentEdge,
}
