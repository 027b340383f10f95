use std::iter::FusedIterator;

use alaskapak_types::{Contour, Point2d, Polygon, Rect};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::GridSpec;

/// Single cell of a reference grid.
///
/// Cells are computed from a [`GridSpec`] on request and are not connected to it afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Zero based row index. Row 0 is the bottom row.
    pub row: u32,
    /// Zero based column index. Column 0 is the left column.
    pub column: u32,
    /// One based page number.
    pub page: u64,
    /// Label of the row, counted from the top or the bottom depending on the page numbering.
    pub row_label: String,
    /// Label of the column, counted from the left.
    pub column_label: String,
    /// Composed label: prefix, row and column labels joined by the delimiter, suffix.
    pub label: String,
    /// Bounds of the cell in map units.
    pub bounds: Rect,
    /// Cell polygon with the corners in counter-clockwise order, starting with the lower left one.
    pub shape: Polygon<Point2d>,
}

impl Cell {
    /// Anchor point for the cell label.
    pub fn center(&self) -> Point2d {
        self.bounds.center()
    }
}

/// Iterator over the cells of a grid in row-major order: row 0 first, columns from left to right in each row.
///
/// The iterator borrows the [`GridSpec`], so the grid cannot change while the cells are enumerated.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    spec: &'a GridSpec,
    next: u64,
    end: u64,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(spec: &'a GridSpec) -> Self {
        Self {
            spec,
            next: 0,
            end: spec.cell_count(),
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let column_count = self.spec.column_count as u64;
        let row = (self.next / column_count) as u32;
        let column = (self.next % column_count) as u32;
        self.next += 1;

        self.spec.cell(row, column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}

/// Iterator over the grid lines: first the vertical lines from left to right, then the horizontal lines from bottom
/// to top. Every line spans the whole extent of the grid.
#[derive(Debug, Clone)]
pub struct GridLines {
    extent: Rect,
    column_width: f64,
    row_height: f64,
    vertical: u32,
    horizontal: u32,
    next: u32,
}

impl GridLines {
    pub(crate) fn new(spec: &GridSpec) -> Self {
        Self {
            extent: spec.extent,
            column_width: spec.column_width,
            row_height: spec.row_height,
            vertical: spec.column_count.saturating_add(1),
            horizontal: spec.row_count.saturating_add(1),
            next: 0,
        }
    }

    fn total(&self) -> u32 {
        self.vertical.saturating_add(self.horizontal)
    }
}

impl Iterator for GridLines {
    type Item = Contour<Point2d>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }

        let index = self.next;
        self.next += 1;

        let line = if index < self.vertical {
            let x = self.extent.x_min() + self.column_width * index as f64;
            [
                Point2d::new(x, self.extent.y_min()),
                Point2d::new(x, self.extent.y_max()),
            ]
        } else {
            let y = self.extent.y_min() + self.row_height * (index - self.vertical) as f64;
            [
                Point2d::new(self.extent.x_min(), y),
                Point2d::new(self.extent.x_max(), y),
            ]
        };

        Some(Contour::open(line.to_vec()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total() - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridLines {}

impl FusedIterator for GridLines {}
