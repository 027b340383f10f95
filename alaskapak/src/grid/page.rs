use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AlaskaPakError;

/// Order in which sequential page numbers are assigned to the cells of a grid.
///
/// The choice also determines the direction of the row labels: for the schemes that start at the top of the grid
/// the first row label (`A` or `1`) belongs to the top row, for the schemes that start at the bottom it belongs to the
/// bottom row.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageNumbering {
    /// Rows from left to right, starting with the top row.
    #[default]
    LeftRightTopBottom,
    /// Rows from left to right, starting with the bottom row.
    LeftRightBottomTop,
    /// Columns from top to bottom, starting with the left column.
    TopBottomLeftRight,
    /// Columns from bottom to top, starting with the left column.
    BottomTopLeftRight,
}

/// Stride used to step between rows (or columns) when numbering pages.
///
/// [`PageStride::Legacy`] reproduces the page numbers of existing map books: the left-right schemes step between rows
/// by the *row* count and the top-bottom schemes step between columns by the *column* count. These numbers are
/// sequential only for square grids; for other grids some numbers repeat and some are skipped.
/// [`PageStride::Corrected`] steps by the number of cells in a row (or a column), giving every cell a unique number in
/// `1..=rows*columns`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageStride {
    /// Row count stride for the left-right schemes, column count stride for the top-bottom schemes.
    #[default]
    Legacy,
    /// Column count stride for the left-right schemes, row count stride for the top-bottom schemes.
    Corrected,
}

impl PageNumbering {
    /// All numbering schemes in the order they are offered to a user.
    pub const ALL: [PageNumbering; 4] = [
        PageNumbering::LeftRightTopBottom,
        PageNumbering::LeftRightBottomTop,
        PageNumbering::TopBottomLeftRight,
        PageNumbering::BottomTopLeftRight,
    ];

    /// Identifier of the scheme, as accepted by [`PageNumbering::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            PageNumbering::LeftRightTopBottom => "LeftRightTopBottom",
            PageNumbering::LeftRightBottomTop => "LeftRightBottomTop",
            PageNumbering::TopBottomLeftRight => "TopBottomLeftRight",
            PageNumbering::BottomTopLeftRight => "BottomTopLeftRight",
        }
    }

    /// Human readable name of the scheme.
    pub fn display_name(&self) -> &'static str {
        match self {
            PageNumbering::LeftRightTopBottom => "Left to right, then top to bottom",
            PageNumbering::LeftRightBottomTop => "Left to right, then bottom to top",
            PageNumbering::TopBottomLeftRight => "Top to bottom, then left to right",
            PageNumbering::BottomTopLeftRight => "Bottom to top, then left to right",
        }
    }

    /// Returns true if the numbering starts at the top of the grid. Row labels are counted from the top then.
    pub fn starts_at_top(&self) -> bool {
        matches!(
            self,
            PageNumbering::LeftRightTopBottom | PageNumbering::TopBottomLeftRight
        )
    }

    /// Index used to label the given `row`, where row 0 is the bottom row of the grid.
    pub fn row_label_index(&self, row: u32, row_count: u32) -> u32 {
        if self.starts_at_top() {
            row_count.saturating_sub(1).saturating_sub(row)
        } else {
            row
        }
    }

    /// One based page number of the cell. Row 0 is the bottom row and column 0 is the left column of the grid.
    pub fn page_number(
        &self,
        row: u32,
        column: u32,
        row_count: u32,
        column_count: u32,
        stride: PageStride,
    ) -> u64 {
        let (row, column) = (row as u64, column as u64);
        let (row_count, column_count) = (row_count as u64, column_count as u64);
        let from_top = row_count.saturating_sub(row + 1);

        let (row_stride, column_stride) = match stride {
            PageStride::Legacy => (row_count, column_count),
            PageStride::Corrected => (column_count, row_count),
        };

        match self {
            PageNumbering::LeftRightTopBottom => from_top * row_stride + column + 1,
            PageNumbering::LeftRightBottomTop => row * row_stride + column + 1,
            PageNumbering::TopBottomLeftRight => column * column_stride + from_top + 1,
            PageNumbering::BottomTopLeftRight => column * column_stride + row + 1,
        }
    }
}

impl Display for PageNumbering {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageNumbering {
    type Err = AlaskaPakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|numbering| numbering.as_str() == s)
            .ok_or_else(|| {
                AlaskaPakError::InvalidConfiguration(format!("unknown page numbering: {s}"))
            })
    }
}
