use alaskapak_types::{Contour, Point2d};

use crate::render::GridRenderer;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub clears: usize,
    pub lines: Vec<Contour<Point2d>>,
    pub labels: Vec<(String, Point2d)>,
}

impl GridRenderer for RecordingRenderer {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_line(&mut self, line: &Contour<Point2d>) {
        self.lines.push(line.clone());
    }

    fn draw_label(&mut self, text: &str, anchor: Point2d) {
        self.labels.push((text.to_string(), anchor));
    }
}
