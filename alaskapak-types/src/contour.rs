//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A single grid line is an open
//!   contour.
//! * **closed** - the first and the last points of the contour are connected. The boundary of a grid cell is a
//!   closed contour.
//!
//! A closed contour never duplicates its first point at the end of the point list. Use
//! [`ClosedContour::iter_points_closing`] when the closing point is needed, e.g. to write a ring into a format that
//! requires explicit closure.

use crate::cartesian::CartesianPoint2d;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Sequence of points that may be open or closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour<Point> {
    pub points: Vec<Point>,
    pub is_closed: bool,
}

impl<Point> Contour<Point> {
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }

    /// Converts the contour into [`ClosedContour`] if it is closed.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end.
    pub fn iter_points_closing(&self) -> ContourPointsIterator<'_, Point, std::slice::Iter<'_, Point>> {
        ContourPointsIterator::new(self.points.iter(), self.is_closed)
    }
}

/// Contour with a segment between its last and first points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedContour<Point> {
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }

    /// Iterates over the points and then returns the first point once more.
    pub fn iter_points_closing(&self) -> ContourPointsIterator<'_, Point, std::slice::Iter<'_, Point>> {
        ContourPointsIterator::new(self.points.iter(), true)
    }
}

impl<P: CartesianPoint2d> ClosedContour<P> {
    /// Signed area of the contour (shoelace formula). Counter-clockwise contours have positive area.
    pub fn area_signed(&self) -> P::Num {
        let mut iter = self.iter_points_closing();
        let Some(mut prev) = iter.next() else {
            return P::Num::zero();
        };

        let mut aggr = P::Num::zero();
        for p in iter {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (P::Num::one() + P::Num::one())
    }

    /// Direction of the contour traversal.
    pub fn winding(&self) -> Winding {
        if self.area_signed() <= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}

/// Direction in which the points of a closed contour go around its area.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Iterator of contour points that repeats the first point at the end for closed contours.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a P>,
}

impl<'a, P: 'a, Iter> ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if self.is_closed && self.first_point.is_none() {
            self.first_point = next;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2d, Rect};

    fn cell_corners() -> Vec<Point2d> {
        vec![
            Point2d::new(100.0, 200.0),
            Point2d::new(150.0, 200.0),
            Point2d::new(150.0, 240.0),
            Point2d::new(100.0, 240.0),
        ]
    }

    #[test]
    fn grid_line_is_not_closed() {
        let line = Contour::open(vec![Point2d::new(0.0, 0.0), Point2d::new(0.0, 500.0)]);
        let points: Vec<_> = line.iter_points_closing().copied().collect();
        assert_eq!(points, [Point2d::new(0.0, 0.0), Point2d::new(0.0, 500.0)]);
    }

    #[test]
    fn cell_outline_returns_to_start() {
        let outline = ClosedContour::new(cell_corners());
        let points: Vec<_> = outline.iter_points_closing().copied().collect();
        assert_eq!(points.len(), 5);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn empty_contour_closing() {
        let contour: ClosedContour<Point2d> = ClosedContour::new(vec![]);
        assert_eq!(contour.iter_points_closing().count(), 0);
        assert_eq!(contour.area_signed(), 0.0);
    }

    #[test]
    fn into_closed() {
        assert!(Contour::open(cell_corners()).into_closed().is_none());

        let closed = Contour::closed(cell_corners()).into_closed();
        assert_eq!(closed.map(|c| c.points.len()), Some(4));
    }

    #[test]
    fn cell_area_and_winding() {
        let outline = ClosedContour::new(cell_corners());
        assert_eq!(outline.area_signed(), 2000.0);
        assert_eq!(outline.winding(), Winding::CounterClockwise);

        let reversed = ClosedContour::new(cell_corners().into_iter().rev().collect());
        assert_eq!(reversed.area_signed(), -2000.0);
        assert_eq!(reversed.winding(), Winding::Clockwise);
    }

    #[test]
    fn rect_outline_matches_corners() {
        let outline = Rect::new(100.0, 200.0, 150.0, 240.0).into_contour();
        assert_eq!(outline, ClosedContour::new(cell_corners()));
    }
}
