use crate::cartesian::CartesianPoint2d;
use crate::contour::ClosedContour;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P> {
    pub outer_contour: ClosedContour<P>,
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all contours of the polygon starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }
}

impl<P: CartesianPoint2d> Polygon<P> {
    /// Area covered by the polygon: area of the outer contour minus the areas of the holes.
    pub fn area(&self) -> P::Num {
        let abs = |v: P::Num| if v < P::Num::zero() { P::Num::zero() - v } else { v };
        self.inner_contours
            .iter()
            .fold(abs(self.outer_contour.area_signed()), |acc, hole| {
                acc - abs(hole.area_signed())
            })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}
