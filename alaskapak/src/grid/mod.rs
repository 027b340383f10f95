//! Reference grids (map index grids).
//!
//! A [`GridSpec`] divides a rectangular extent into rows and columns of equal cells. Every [`Cell`] gets a label
//! composed from its row and column labels and a page number used for map books.
//!
//! Rows are counted from the bottom of the extent and columns from the left side. Row *labels* may run in the opposite
//! direction depending on the [`PageNumbering`] scheme.

mod cell;
mod label;
mod page;
mod spec;

pub use cell::{Cell, Cells, GridLines};
pub use label::{LabelOrder, LabelStyle, OUT_OF_BOUNDS};
pub use page::{PageNumbering, PageStride};
pub use spec::GridSpec;
