//! Drawing a reference grid onto an output surface.

use alaskapak_types::{Contour, Point2d};

use crate::grid::GridSpec;

/// Output surface a grid is drawn onto.
///
/// Coordinates passed to the renderer are in the map units of the grid extent. Converting them to the surface
/// coordinates is up to the implementation.
pub trait GridRenderer {
    /// Called once before anything is drawn.
    fn clear(&mut self) {}

    /// Draws a straight line.
    fn draw_line(&mut self, line: &Contour<Point2d>);

    /// Draws a text label centered at the given point.
    fn draw_label(&mut self, text: &str, anchor: Point2d);
}

/// Draws the grid lines and the label of every cell. Returns the number of drawn labels.
///
/// An inconsistent grid is not drawn at all.
pub fn draw_grid(spec: &GridSpec, renderer: &mut impl GridRenderer) -> usize {
    if !spec.is_valid() {
        log::warn!("Grid cells do not fill the grid extent, skipping grid rendering");
        return 0;
    }

    renderer.clear();
    for line in spec.grid_lines() {
        renderer.draw_line(&line);
    }

    let mut labels = 0;
    for cell in spec.cells() {
        renderer.draw_label(&cell.label, cell.center());
        labels += 1;
    }

    log::debug!("Rendered grid with {labels} labels");

    labels
}
