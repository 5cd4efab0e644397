//! Abstract drawing surface and an SVG recording implementation.
//!
//! The renderer emits drawing intents (paths, rectangles, text) against the
//! [`Surface`] trait; backends decide how to realize them. [`SvgSurface`]
//! records the intents as an SVG document in a byte buffer, which is what
//! the figure exports.

use tickplot_core::Point;

use crate::color::Color;

/// Measured bounds of a piece of text at the current font.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

/// A stateful 2D drawing surface in device coordinates.
///
/// Path segments accumulate until `stroke`, `fill` or `fill_preserve`
/// consume them, mirroring the usual vector-graphics context model.
pub trait Surface {
    fn set_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, face: &str, size: f64);

    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Append an axis-aligned rectangle to the current path. `size` may
    /// have negative components; implementations normalize.
    fn rect(&mut self, origin: Point, size: Point);

    /// Stroke the current path with the current color and width, then
    /// clear it.
    fn stroke(&mut self);
    /// Fill the current path with the current color, then clear it.
    fn fill(&mut self);
    /// Fill the current path but keep it for a subsequent stroke.
    fn fill_preserve(&mut self);

    /// Paint `text` with its baseline origin at `p`.
    fn text(&mut self, p: Point, text: &str);
    fn text_extents(&self, text: &str) -> TextExtents;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Rect(Point, Point),
}

/// Records drawing intents as SVG elements.
///
/// Text extents are approximated from the font size so that layout is
/// deterministic and does not depend on installed fonts.
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
    path: Vec<PathCmd>,
    color: Color,
    line_width: f64,
    font_face: String,
    font_size: f64,
}

// Rough advance width of a glyph relative to the font size, adequate for
// centering short tick labels.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const GLYPH_HEIGHT_RATIO: f64 = 0.7;

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
            path: Vec::new(),
            color: Color::BLACK,
            line_width: 1.0,
            font_face: "sans-serif".to_string(),
            font_size: 10.0,
        }
    }

    /// Serialize the recorded scene to SVG bytes.
    pub fn finish(self) -> Vec<u8> {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.2}\" height=\"{:.2}\" \
             viewBox=\"0 0 {:.2} {:.2}\">\n",
            self.width, self.height, self.width, self.height
        ));
        for el in &self.elements {
            out.push_str(el);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out.into_bytes()
    }

    /// Number of recorded elements, for tests.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn path_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.path {
            match *cmd {
                PathCmd::MoveTo(p) => d.push_str(&format!("M {:.2} {:.2} ", p.x, p.y)),
                PathCmd::LineTo(p) => d.push_str(&format!("L {:.2} {:.2} ", p.x, p.y)),
                PathCmd::Rect(origin, size) => {
                    // Normalize so width/height are non-negative.
                    let x = origin.x.min(origin.x + size.x);
                    let y = origin.y.min(origin.y + size.y);
                    let w = size.x.abs();
                    let h = size.y.abs();
                    d.push_str(&format!(
                        "M {x:.2} {y:.2} H {:.2} V {:.2} H {x:.2} Z ",
                        x + w,
                        y + h
                    ));
                }
            }
        }
        d.trim_end().to_string()
    }

    fn emit_path(&mut self, fill: Option<Color>, stroke: Option<(Color, f64)>) {
        if self.path.is_empty() {
            return;
        }
        let d = self.path_data();
        let fill_attr = match fill {
            Some(c) => c.css(),
            None => "none".to_string(),
        };
        let stroke_attr = match stroke {
            Some((c, w)) => format!(" stroke=\"{}\" stroke-width=\"{:.2}\"", c.css(), w),
            None => String::new(),
        };
        self.elements.push(format!(
            "<path d=\"{d}\" fill=\"{fill_attr}\"{stroke_attr}/>"
        ));
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Surface for SvgSurface {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, face: &str, size: f64) {
        self.font_face = face.to_string();
        self.font_size = size;
    }

    fn move_to(&mut self, p: Point) {
        self.path.push(PathCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.path.push(PathCmd::LineTo(p));
    }

    fn rect(&mut self, origin: Point, size: Point) {
        self.path.push(PathCmd::Rect(origin, size));
    }

    fn stroke(&mut self) {
        let stroke = Some((self.color, self.line_width));
        self.emit_path(None, stroke);
        self.path.clear();
    }

    fn fill(&mut self) {
        let fill = Some(self.color);
        self.emit_path(fill, None);
        self.path.clear();
    }

    fn fill_preserve(&mut self) {
        let fill = Some(self.color);
        self.emit_path(fill, None);
    }

    fn text(&mut self, p: Point, text: &str) {
        self.elements.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{:.2}\" \
             fill=\"{}\">{}</text>",
            p.x,
            p.y,
            self.font_face,
            self.font_size,
            self.color.css(),
            escape_text(text)
        ));
    }

    fn text_extents(&self, text: &str) -> TextExtents {
        TextExtents {
            width: text.chars().count() as f64 * self.font_size * GLYPH_WIDTH_RATIO,
            height: self.font_size * GLYPH_HEIGHT_RATIO,
        }
    }
}
