//! Recording surface for rendering tests.

use tickplot_core::Point;

use crate::color::Color;
use crate::surface::{Surface, TextExtents};

/// One recorded drawing intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetColor(Color),
    SetLineWidth(f64),
    SetFont(String, f64),
    MoveTo(Point),
    LineTo(Point),
    Rect(Point, Point),
    Stroke,
    Fill,
    FillPreserve,
    Text(Point, String),
}

/// A surface that records every intent for later assertions. Text extents
/// use the same approximation as the SVG surface.
pub struct RecordSurface {
    pub ops: Vec<Op>,
    font_size: f64,
}

impl RecordSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            font_size: 10.0,
        }
    }

    /// All text strings in emission order.
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of fill operations painted with `color`.
    pub fn fill_count_with(&self, color: Color) -> usize {
        let mut current = Color::BLACK;
        let mut count = 0;
        for op in &self.ops {
            match op {
                Op::SetColor(c) => current = *c,
                Op::Fill | Op::FillPreserve if current == color => count += 1,
                _ => {}
            }
        }
        count
    }
}

impl Surface for RecordSurface {
    fn set_color(&mut self, color: Color) {
        self.ops.push(Op::SetColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::SetLineWidth(width));
    }

    fn set_font(&mut self, face: &str, size: f64) {
        self.font_size = size;
        self.ops.push(Op::SetFont(face.to_string(), size));
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(Op::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(Op::LineTo(p));
    }

    fn rect(&mut self, origin: Point, size: Point) {
        self.ops.push(Op::Rect(origin, size));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn fill_preserve(&mut self) {
        self.ops.push(Op::FillPreserve);
    }

    fn text(&mut self, p: Point, text: &str) {
        self.ops.push(Op::Text(p, text.to_string()));
    }

    fn text_extents(&self, text: &str) -> TextExtents {
        TextExtents {
            width: text.chars().count() as f64 * self.font_size * 0.6,
            height: self.font_size * 0.7,
        }
    }
}
