use alaskapak_types::{Point2d, Polygon, Rect, Size};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Cells, GridLines, LabelOrder, LabelStyle, PageNumbering, PageStride};

/// Relative tolerance used to compare the cells' total size with the extent.
const CONSISTENCY_TOLERANCE: f64 = 1e-9;

/// Cell sizes of a grid created with [`GridSpec::from_extent`] are multiples of this value.
const SIZE_ROUNDING: f64 = 10.0;

/// Configuration of a rectangular reference grid.
///
/// A grid covers its `extent` with `row_count` rows of `row_height` and `column_count` columns of `column_width`.
/// All fields can be edited freely, which may leave the grid *inconsistent*: the cells then no longer fill the extent
/// exactly. Use [`GridSpec::is_valid`] to check the state and one of the `adjust_*` methods to restore it:
///
/// * [`GridSpec::adjust_size_from_count`] when the extent and the counts are authoritative,
/// * [`GridSpec::adjust_count_from_size`] followed by another adjustment when the sizes are authoritative,
/// * [`GridSpec::adjust_extent_to_fit`] when the counts and the sizes are authoritative.
///
/// Rows are indexed along the Y axis starting at the bottom of the extent, columns along the X axis starting at the
/// left side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    /// Area covered by the grid in map units.
    pub extent: Rect,
    /// Number of rows.
    pub row_count: u32,
    /// Number of columns.
    pub column_count: u32,
    /// Height of every row in map units.
    pub row_height: f64,
    /// Width of every column in map units.
    pub column_width: f64,
    /// Text placed before every cell label.
    pub prefix: String,
    /// Text placed after every cell label.
    pub suffix: String,
    /// Separator between the row and the column labels.
    pub delimiter: String,
    /// Style of the row labels.
    pub row_label_style: LabelStyle,
    /// Style of the column labels.
    pub column_label_style: LabelStyle,
    /// Whether the row or the column label comes first.
    pub label_order: LabelOrder,
    /// Order of the page numbers. Also defines whether rows are labeled from the top or from the bottom.
    pub page_numbering: PageNumbering,
    /// See [`PageStride`].
    pub page_stride: PageStride,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            extent: Rect::new(0.0, 0.0, 10_000.0, 10_000.0),
            row_count: 10,
            column_count: 10,
            row_height: 1000.0,
            column_width: 1000.0,
            prefix: String::new(),
            suffix: String::new(),
            delimiter: "-".to_string(),
            row_label_style: LabelStyle::UpperAlpha,
            column_label_style: LabelStyle::ZeroPaddedNumeric,
            label_order: LabelOrder::RowFirst,
            page_numbering: PageNumbering::LeftRightTopBottom,
            page_stride: PageStride::Legacy,
        }
    }
}

impl GridSpec {
    /// Creates a grid with the default configuration: 10 by 10 cells of 1000 map units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid with the default number of rows and columns over (approximately) the given extent.
    ///
    /// Cell sizes are rounded to the nearest multiple of 10 map units and the extent is then adjusted around its
    /// center to fit the rounded cells.
    pub fn from_extent(extent: Rect) -> Self {
        let mut grid = Self {
            extent,
            ..Self::default()
        };

        grid.adjust_size_from_count();
        grid.column_width = round_size(grid.column_width);
        grid.row_height = round_size(grid.row_height);
        grid.adjust_extent_to_fit();

        grid
    }

    /// Sets the extent of the grid.
    pub fn with_extent(mut self, extent: Rect) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the number of rows and columns.
    pub fn with_counts(mut self, row_count: u32, column_count: u32) -> Self {
        self.row_count = row_count;
        self.column_count = column_count;
        self
    }

    /// Sets the width of the columns and the height of the rows, in the same order as [`Size::new`].
    pub fn with_cell_size(mut self, column_width: f64, row_height: f64) -> Self {
        self.column_width = column_width;
        self.row_height = row_height;
        self
    }

    /// Sets the styles of the row and the column labels.
    pub fn with_label_styles(mut self, row_label_style: LabelStyle, column_label_style: LabelStyle) -> Self {
        self.row_label_style = row_label_style;
        self.column_label_style = column_label_style;
        self
    }

    /// Sets the order of the label parts.
    pub fn with_label_order(mut self, label_order: LabelOrder) -> Self {
        self.label_order = label_order;
        self
    }

    /// Sets the strings composed into every cell label.
    pub fn with_label_parts(
        mut self,
        prefix: impl Into<String>,
        delimiter: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.prefix = prefix.into();
        self.delimiter = delimiter.into();
        self.suffix = suffix.into();
        self
    }

    /// Sets the page numbering scheme.
    pub fn with_page_numbering(mut self, page_numbering: PageNumbering) -> Self {
        self.page_numbering = page_numbering;
        self
    }

    /// Sets the page number stride.
    pub fn with_page_stride(mut self, page_stride: PageStride) -> Self {
        self.page_stride = page_stride;
        self
    }

    /// Returns true if the cells fill the extent exactly (within floating point tolerance).
    ///
    /// A grid also requires at least one row and one column, positive cell sizes and a non-empty extent.
    pub fn is_valid(&self) -> bool {
        if self.row_count < 1 || self.column_count < 1 {
            return false;
        }
        if !(self.row_height > 0.0 && self.column_width > 0.0) {
            return false;
        }
        if self.extent.is_empty() {
            return false;
        }

        approx_equal(
            self.column_count as f64 * self.column_width,
            self.extent.width(),
        ) && approx_equal(self.row_count as f64 * self.row_height, self.extent.height())
    }

    /// Recomputes the cell size so that the current number of cells fills the extent.
    pub fn adjust_size_from_count(&mut self) {
        self.column_width = self.extent.width() / self.column_count as f64;
        self.row_height = self.extent.height() / self.row_count as f64;

        log::debug!(
            "Grid cell size adjusted to {}x{}",
            self.column_width,
            self.row_height
        );
    }

    /// Recomputes the number of cells as the number of whole cells of the current size that fit into the extent.
    ///
    /// The grid usually stays inconsistent after this, so it is followed by [`GridSpec::adjust_size_from_count`] or
    /// [`GridSpec::adjust_extent_to_fit`].
    ///
    /// The float to integer conversion saturates: a zero cell size produces `u32::MAX` cells along that axis and a
    /// NaN or negative size produces zero cells. Check [`GridSpec::is_valid`] before enumerating the cells.
    pub fn adjust_count_from_size(&mut self) {
        self.column_count = (self.extent.width() / self.column_width).floor() as u32;
        self.row_count = (self.extent.height() / self.row_height).floor() as u32;

        log::debug!(
            "Grid cell count adjusted to {} rows and {} columns",
            self.row_count,
            self.column_count
        );
    }

    /// Grows or shrinks the extent equally on both sides along each axis so that it is exactly covered by the cells.
    pub fn adjust_extent_to_fit(&mut self) {
        let dx = (self.column_width * self.column_count as f64 - self.extent.width()) / 2.0;
        let dy = (self.row_height * self.row_count as f64 - self.extent.height()) / 2.0;
        self.extent = self.extent.expand(dx, dy);

        log::debug!("Grid extent adjusted to {:?}", self.extent);
    }

    /// Keeps as many whole cells of the current size as fit into the extent, then stretches them to fill it.
    pub fn adjust_count_then_size(&mut self) {
        self.adjust_count_from_size();
        self.adjust_size_from_count();
    }

    /// Keeps as many whole cells of the current size as fit into the extent, then shrinks the extent around them.
    pub fn adjust_count_then_extent(&mut self) {
        self.adjust_count_from_size();
        self.adjust_extent_to_fit();
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.row_count as u64 * self.column_count as u64
    }

    /// Size of a single cell.
    pub fn cell_size(&self) -> Size {
        Size::new(self.column_width, self.row_height)
    }

    /// Label of the row. Depending on [`GridSpec::page_numbering`] the labels are counted from the top or from the
    /// bottom of the grid.
    pub fn row_label(&self, row: u32) -> String {
        let index = self.page_numbering.row_label_index(row, self.row_count);
        self.row_label_style.label(index, self.row_count)
    }

    /// Label of the column. Columns are always labeled from the left.
    pub fn column_label(&self, column: u32) -> String {
        self.column_label_style.label(column, self.column_count)
    }

    /// Full label of the cell, including prefix and suffix.
    pub fn label(&self, row: u32, column: u32) -> String {
        self.label_order.compose(
            &self.prefix,
            &self.row_label(row),
            &self.delimiter,
            &self.column_label(column),
            &self.suffix,
        )
    }

    /// One based page number of the cell.
    pub fn page_number(&self, row: u32, column: u32) -> u64 {
        self.page_numbering.page_number(
            row,
            column,
            self.row_count,
            self.column_count,
            self.page_stride,
        )
    }

    /// Bounds of the cell. The cell is not required to be inside the grid.
    pub fn cell_bounds(&self, row: u32, column: u32) -> Rect {
        let x_min = self.extent.x_min() + column as f64 * self.column_width;
        let y_min = self.extent.y_min() + row as f64 * self.row_height;
        Rect::new(
            x_min,
            y_min,
            x_min + self.column_width,
            y_min + self.row_height,
        )
    }

    /// Returns the cell at the given position, or `None` if the position is outside of the grid.
    pub fn cell(&self, row: u32, column: u32) -> Option<Cell> {
        if row >= self.row_count || column >= self.column_count {
            return None;
        }

        let bounds = self.cell_bounds(row, column);
        let row_label = self.row_label(row);
        let column_label = self.column_label(column);
        let label = self.label_order.compose(
            &self.prefix,
            &row_label,
            &self.delimiter,
            &column_label,
            &self.suffix,
        );

        Some(Cell {
            row,
            column,
            page: self.page_number(row, column),
            row_label,
            column_label,
            label,
            bounds,
            shape: Polygon::<Point2d>::from(bounds.into_contour()),
        })
    }

    /// Iterates over all cells in row-major order. Cells are computed lazily.
    ///
    /// The grid is not checked for consistency; for an inconsistent grid the cells do not fill the extent.
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self)
    }

    /// Iterates over the lines separating the cells, including the grid border.
    pub fn grid_lines(&self) -> GridLines {
        GridLines::new(self)
    }
}

fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= CONSISTENCY_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn round_size(size: f64) -> f64 {
    ((size / SIZE_ROUNDING).round() * SIZE_ROUNDING).max(SIZE_ROUNDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alaskapak_types::Winding;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::collections::HashSet;

    fn small_grid() -> GridSpec {
        GridSpec::new()
            .with_extent(Rect::new(0.0, 0.0, 300.0, 200.0))
            .with_counts(2, 3)
            .with_cell_size(100.0, 100.0)
    }

    #[test]
    fn default_grid_is_valid() {
        let grid = GridSpec::default();
        assert!(grid.is_valid());
        assert_eq!(grid.cell_count(), 100);
    }

    #[test]
    fn size_from_count_makes_grid_valid() {
        let extents = [
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(-1234.5, 17.25, 98765.4321, 5000.001),
            Rect::new(500_000.0, 6_000_000.0, 512_345.678, 6_054_321.0),
        ];
        for extent in extents {
            for (rows, columns) in [(1, 1), (3, 7), (13, 11), (100, 1)] {
                let mut grid = GridSpec::new().with_extent(extent).with_counts(rows, columns);
                grid.adjust_size_from_count();
                assert!(grid.is_valid(), "{extent:?} {rows}x{columns}");
            }
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let mut grid = GridSpec::new()
            .with_extent(Rect::new(0.0, 0.0, 1000.0, 500.0))
            .with_counts(5, 4)
            .with_cell_size(100.0, 100.0);
        assert!(!grid.is_valid());

        grid.column_count = 10;
        grid.adjust_size_from_count();
        assert!(grid.is_valid());

        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 50);
        for cell in &cells {
            assert_abs_diff_eq!(cell.bounds.width(), 100.0);
            assert_abs_diff_eq!(cell.bounds.height(), 100.0);
        }
    }

    #[test]
    fn invalid_grids() {
        let grid = small_grid();
        assert!(grid.is_valid());

        assert!(!small_grid().with_counts(0, 3).is_valid());
        assert!(!small_grid().with_counts(2, 0).is_valid());
        assert!(!small_grid().with_cell_size(-100.0, 100.0).is_valid());
        assert!(!small_grid().with_cell_size(100.0, f64::NAN).is_valid());
        assert!(!small_grid()
            .with_extent(Rect::new(0.0, 0.0, 0.0, 200.0))
            .is_valid());
        assert!(!small_grid().with_cell_size(100.0, 99.0).is_valid());
    }

    #[test]
    fn zero_counts_enumerate_nothing() {
        let mut grid = small_grid().with_counts(0, 3);
        grid.adjust_size_from_count();
        assert!(!grid.is_valid());
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn count_from_size_then_extent() {
        let mut grid = GridSpec::new()
            .with_extent(Rect::new(0.0, 0.0, 1000.0, 500.0))
            .with_cell_size(300.0, 300.0);
        grid.adjust_count_from_size();
        assert_eq!((grid.row_count, grid.column_count), (1, 3));
        assert!(!grid.is_valid());

        grid.adjust_extent_to_fit();
        assert!(grid.is_valid());
        assert_relative_eq!(grid.extent.x_min(), 50.0);
        assert_relative_eq!(grid.extent.x_max(), 950.0);
        assert_relative_eq!(grid.extent.y_min(), 100.0);
        assert_relative_eq!(grid.extent.y_max(), 400.0);
    }

    #[test]
    fn count_then_size() {
        let mut grid = GridSpec::new()
            .with_extent(Rect::new(0.0, 0.0, 1000.0, 500.0))
            .with_cell_size(300.0, 300.0);
        grid.adjust_count_then_size();

        assert_eq!((grid.row_count, grid.column_count), (1, 3));
        assert_relative_eq!(grid.column_width, 1000.0 / 3.0);
        assert_relative_eq!(grid.row_height, 500.0);
        assert!(grid.is_valid());
    }

    #[test]
    fn cell_size_order() {
        let grid = GridSpec::new().with_cell_size(250.0, 200.0);
        assert_abs_diff_eq!(grid.column_width, 250.0);
        assert_abs_diff_eq!(grid.row_height, 200.0);
        assert_eq!(grid.cell_size(), Size::new(250.0, 200.0));
    }

    #[test]
    fn count_from_degenerate_size_saturates() {
        let mut grid = small_grid().with_cell_size(0.0, f64::NAN);
        grid.adjust_count_from_size();

        assert_eq!(grid.column_count, u32::MAX);
        assert_eq!(grid.row_count, 0);
        assert!(!grid.is_valid());
        assert_eq!(grid.cells().len(), 0);
    }

    #[test]
    fn count_then_extent() {
        let mut grid = GridSpec::new()
            .with_extent(Rect::new(-50.0, -50.0, 1050.0, 450.0))
            .with_cell_size(250.0, 200.0);
        grid.adjust_count_then_extent();

        assert_eq!((grid.row_count, grid.column_count), (2, 4));
        assert!(grid.is_valid());
        assert_eq!(grid.extent, Rect::new(0.0, 0.0, 1000.0, 400.0));
        assert_abs_diff_eq!(grid.extent.center(), Point2d::new(500.0, 200.0));
    }

    #[test]
    fn extent_grows_around_center() {
        let mut grid = small_grid().with_cell_size(120.0, 150.0);
        let center = grid.extent.center();
        grid.adjust_extent_to_fit();

        assert!(grid.is_valid());
        assert_abs_diff_eq!(grid.extent.width(), 360.0);
        assert_abs_diff_eq!(grid.extent.height(), 300.0);
        assert_abs_diff_eq!(grid.extent.center(), center);
    }

    #[test]
    fn from_extent_rounds_sizes() {
        let grid = GridSpec::from_extent(Rect::new(0.0, 0.0, 12345.0, 6789.0));

        assert!(grid.is_valid());
        assert_eq!((grid.row_count, grid.column_count), (10, 10));
        assert_abs_diff_eq!(grid.column_width, 1230.0);
        assert_abs_diff_eq!(grid.row_height, 680.0);
        assert_abs_diff_eq!(grid.extent.x_min(), 22.5);
        assert_abs_diff_eq!(grid.extent.x_max(), 12322.5);
        assert_abs_diff_eq!(grid.extent.y_min(), -5.5);
        assert_abs_diff_eq!(grid.extent.y_max(), 6794.5);
    }

    #[test]
    fn from_small_extent_keeps_positive_size() {
        let grid = GridSpec::from_extent(Rect::new(0.0, 0.0, 20.0, 20.0));
        assert!(grid.is_valid());
        assert_abs_diff_eq!(grid.column_width, 10.0);
        assert_abs_diff_eq!(grid.extent.width(), 100.0);
    }

    #[test]
    fn cells_cover_cross_product() {
        let grid = small_grid();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(grid.cells().len(), 6);
        assert_eq!(cells.len(), 6);

        let positions: HashSet<(u32, u32)> = cells.iter().map(|c| (c.row, c.column)).collect();
        assert_eq!(positions.len(), 6);

        let order: Vec<(u32, u32)> = cells.iter().map(|c| (c.row, c.column)).collect();
        assert_eq!(order, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn cells_fill_extent() {
        let grid = small_grid();
        let merged = grid
            .cells()
            .map(|cell| cell.bounds)
            .reduce(|acc, bounds| acc.merge(bounds))
            .expect("grid has cells");
        assert_eq!(merged, grid.extent);

        let area: f64 = grid.cells().map(|cell| cell.shape.area()).sum();
        assert_abs_diff_eq!(area, grid.extent.width() * grid.extent.height());
    }

    #[test]
    fn cell_geometry() {
        let grid = small_grid().with_extent(Rect::new(1000.0, 2000.0, 1300.0, 2200.0));
        let cell = grid.cell(1, 2).expect("cell inside the grid");

        assert_eq!(cell.bounds, Rect::new(1200.0, 2100.0, 1300.0, 2200.0));
        assert_eq!(
            cell.shape.outer_contour.points,
            [
                Point2d::new(1200.0, 2100.0),
                Point2d::new(1300.0, 2100.0),
                Point2d::new(1300.0, 2200.0),
                Point2d::new(1200.0, 2200.0),
            ]
        );
        assert_eq!(cell.shape.outer_contour.winding(), Winding::CounterClockwise);
        assert_abs_diff_eq!(cell.center(), Point2d::new(1250.0, 2150.0));
    }

    #[test]
    fn cell_outside_of_grid() {
        let grid = small_grid();
        assert!(grid.cell(2, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
        assert!(grid.cell(1, 2).is_some());
    }

    #[test]
    fn row_labels_follow_page_numbering() {
        let grid = small_grid().with_counts(3, 2).with_cell_size(150.0, 100.0);
        assert_eq!(grid.row_label(0), "C");
        assert_eq!(grid.row_label(2), "A");

        let grid = grid.with_page_numbering(PageNumbering::LeftRightBottomTop);
        assert_eq!(grid.row_label(0), "A");
        assert_eq!(grid.row_label(2), "C");

        let grid = grid.with_page_numbering(PageNumbering::TopBottomLeftRight);
        assert_eq!(grid.row_label(0), "C");

        let grid = grid.with_page_numbering(PageNumbering::BottomTopLeftRight);
        assert_eq!(grid.row_label(0), "A");
    }

    #[test]
    fn column_labels_ignore_page_numbering() {
        let grid = GridSpec::new()
            .with_counts(1, 28)
            .with_label_styles(LabelStyle::Numeric, LabelStyle::UpperAlpha);
        let labels: Vec<String> = [0, 1, 25, 26, 27]
            .into_iter()
            .map(|column| grid.column_label(column))
            .collect();
        assert_eq!(labels, ["A", "B", "Z", "AA", "AB"]);

        let grid = grid.with_page_numbering(PageNumbering::BottomTopLeftRight);
        assert_eq!(grid.column_label(27), "AB");
    }

    #[test]
    fn composite_labels() {
        let grid = small_grid();
        assert_eq!(grid.label(0, 0), "B-1");
        assert_eq!(grid.label(1, 2), "A-3");

        let grid = grid
            .with_label_order(LabelOrder::ColumnFirst)
            .with_label_parts("P", "/", "S");
        assert_eq!(grid.label(0, 0), "P1/BS");

        let cell = grid.cell(0, 0).expect("cell inside the grid");
        assert_eq!(cell.row_label, "B");
        assert_eq!(cell.column_label, "1");
        assert_eq!(cell.label, "P1/BS");
    }

    #[test]
    fn zero_padded_column_labels() {
        let grid = GridSpec::new().with_counts(1, 12);
        assert_eq!(grid.column_label(0), "01");
        assert_eq!(grid.column_label(11), "12");
    }

    #[test]
    fn page_numbers_are_deterministic() {
        let grid = GridSpec::new()
            .with_counts(4, 6)
            .with_page_numbering(PageNumbering::TopBottomLeftRight);
        let first: Vec<u64> = grid.cells().map(|cell| cell.page).collect();
        let second: Vec<u64> = grid.cells().map(|cell| cell.page).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn corrected_stride_numbers_every_cell() {
        let grid = GridSpec::new()
            .with_counts(4, 6)
            .with_page_stride(PageStride::Corrected);
        let mut pages: Vec<u64> = grid.cells().map(|cell| cell.page).collect();
        pages.sort_unstable();
        assert_eq!(pages, (1..=24).collect::<Vec<u64>>());

        let top_left = grid.cell(3, 0).expect("cell inside the grid");
        assert_eq!(top_left.page, 1);
        assert_eq!(top_left.label, "A-1");
    }

    #[test]
    fn grid_lines() {
        let grid = small_grid();
        let lines: Vec<_> = grid.grid_lines().collect();
        assert_eq!(grid.grid_lines().len(), 7);
        assert_eq!(lines.len(), 7);

        assert_eq!(
            lines[1].points,
            [Point2d::new(100.0, 0.0), Point2d::new(100.0, 200.0)]
        );
        assert_eq!(
            lines[6].points,
            [Point2d::new(0.0, 200.0), Point2d::new(300.0, 200.0)]
        );
        assert!(lines.iter().all(|line| !line.is_closed()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial_configuration() {
        let grid: GridSpec = serde_json::from_str(
            r#"{
                "extent": {"x_min": 0.0, "y_min": 0.0, "x_max": 300.0, "y_max": 200.0},
                "row_count": 2,
                "column_count": 3,
                "row_height": 100.0,
                "column_width": 100.0,
                "page_numbering": "BottomTopLeftRight"
            }"#,
        )
        .expect("valid configuration");

        assert!(grid.is_valid());
        assert_eq!(grid.delimiter, "-");
        assert_eq!(grid.page_numbering, PageNumbering::BottomTopLeftRight);

        let invalid = serde_json::from_str::<GridSpec>(r#"{"page_numbering": "Spiral"}"#);
        assert!(invalid.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_cell() {
        let cell = small_grid().cell(0, 0).expect("cell inside the grid");
        let value = serde_json::to_value(&cell).expect("serializable");
        assert_eq!(value["label"], "B-1");
        assert_eq!(value["page"], 3);
    }
}
