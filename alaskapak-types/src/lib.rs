//! Geometry value types used by the AlaskaPak grid engine.
//!
//! All geometries here live in a plain 2d cartesian space ("map units"). Reprojection between coordinate systems is
//! not part of this crate; callers are expected to hand over coordinates that are already in the target space.

pub mod cartesian;
pub mod contour;
pub mod polygon;

pub use cartesian::{CartesianPoint2d, Point2d, Rect, Size};
pub use contour::{ClosedContour, Contour, ContourPointsIterator, Winding};
pub use polygon::Polygon;
