use crate::contour::ClosedContour;
use nalgebra::{Point2, Scalar};
use num_traits::{FromPrimitive, Num, One};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
///
/// A rectangle with `x_max <= x_min` or `y_max <= y_min` is considered empty (see [`Rect::is_empty`]). Empty
/// rectangles are still valid values, so that a caller can build one up field by field.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    pub x_min: N,
    pub y_min: N,
    pub x_max: N,
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar + FromPrimitive> Rect<N> {
    /// Creates a new rectangle by its bounds.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn x_min(&self) -> N {
        self.x_min
    }

    pub fn x_max(&self) -> N {
        self.x_max
    }

    pub fn y_min(&self) -> N {
        self.y_min
    }

    pub fn y_max(&self) -> N {
        self.y_max
    }

    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Returns true if the rectangle does not cover any area. NaN bounds also make the rectangle empty.
    pub fn is_empty(&self) -> bool {
        !(self.x_max > self.x_min && self.y_max > self.y_min)
    }

    /// Moves every side of the rectangle outwards by `dx` along the X axis and by `dy` along the Y axis, keeping the
    /// center in place. Negative values shrink the rectangle.
    pub fn expand(&self, dx: N, dy: N) -> Self {
        Self {
            x_min: self.x_min - dx,
            x_max: self.x_max + dx,
            y_min: self.y_min - dy,
            y_max: self.y_max + dy,
        }
    }

    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Corners of the rectangle in counter-clockwise order, starting with the lower left one.
    pub fn into_quadrangle(self) -> [Point2<N>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
        ]
    }

    pub fn into_contour(self) -> ClosedContour<Point2<N>> {
        ClosedContour::new(Vec::from(self.into_quadrangle()))
    }
}
