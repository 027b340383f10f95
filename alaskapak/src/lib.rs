//! AlaskaPak is a set of cartographic utilities for GIS workflows.
//!
//! The crate provides two independent components:
//!
//! * [`coordinates`] converts decimal degree values into display strings in one of several notations
//!   (decimal degrees, degrees and decimal minutes, degrees minutes and seconds). A [`FormatOptions`] value holds the
//!   display configuration and can be reused for any number of values.
//! * [`grid`] builds reference grids (map index grids). A [`GridSpec`] divides a rectangular extent into equal cells,
//!   labels every cell and assigns page numbers for map books. [`render::draw_grid`] draws the grid through any
//!   [`GridRenderer`] implementation.
//!
//! Geometry types (points, rectangles, contours and polygons) come from the
//! [`alaskapak_types`] crate, which is re-exported.
//!
//! # Example
//!
//! ```
//! use alaskapak::GridSpec;
//! use alaskapak_types::Rect;
//!
//! let mut grid = GridSpec::new()
//!     .with_extent(Rect::new(0.0, 0.0, 1000.0, 500.0))
//!     .with_counts(5, 10);
//! grid.adjust_size_from_count();
//! assert!(grid.is_valid());
//!
//! for cell in grid.cells() {
//!     println!("{} (page {}): {:?}", cell.label, cell.page, cell.bounds);
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod coordinates;
pub mod error;
pub mod grid;
pub mod render;

#[cfg(test)]
mod tests;

pub use alaskapak_types;
pub use coordinates::{DecimalPlaces, FormatOptions, OutputFormat};
pub use error::AlaskaPakError;
pub use grid::{Cell, GridSpec, LabelOrder, LabelStyle, PageNumbering, PageStride};
pub use render::GridRenderer;
