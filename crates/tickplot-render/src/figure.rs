//! Top-level figure: a grid of axes, a title, and the exported image.

use std::io;
use std::path::Path;

use tickplot_core::{AffineTransform, Point, Rect};

use crate::axes::Axes;
use crate::color::Color;
use crate::error::RenderError;
use crate::series::{carve, Insets};
use crate::surface::{Surface, SvgSurface};

/// Style options for the figure frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Canvas size in device units.
    pub size: Point,
    pub margins: Insets,
    pub padding: Insets,
    pub border_width: f64,
    pub background: Color,
    pub border_color: Color,
    pub font_face: String,
    pub title_font_size: f64,
    pub subtitle_font_size: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            size: Point::new(800.0, 600.0),
            margins: Insets::uniform(4.0),
            padding: Insets::uniform(4.0),
            border_width: 0.5,
            background: Color::WHITE,
            border_color: Color::BLACK,
            font_face: "InputSans".to_string(),
            title_font_size: 12.0,
            subtitle_font_size: 10.0,
        }
    }
}

/// The root of the scene graph. Owns a rectangular rows x cols grid of
/// axes; every layout pass recomputes all transforms from the fixed
/// canvas size, and every draw re-renders the whole scene from scratch.
pub struct Figure {
    style: FigureStyle,
    title: String,
    subtitle: String,
    axes: Vec<Vec<Axes>>,
    rect_outer: Rect,
    rect_inner: Rect,
    buffer: Vec<u8>,
}

impl Figure {
    pub fn new(axes: Vec<Vec<Axes>>, style: FigureStyle) -> Self {
        Self {
            style,
            title: String::new(),
            subtitle: String::new(),
            axes,
            rect_outer: Rect::default(),
            rect_inner: Rect::default(),
            buffer: Vec::new(),
        }
    }

    pub fn axes_mut(&mut self, row: usize, col: usize) -> Option<&mut Axes> {
        self.axes.get_mut(row)?.get_mut(col)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set title and subtitle, then re-layout and re-draw the scene.
    pub fn set_titles(&mut self, title: &str, subtitle: &str) -> Result<(), RenderError> {
        self.title = title.to_string();
        self.subtitle = subtitle.to_string();
        self.draw()
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), RenderError> {
        self.title = title.to_string();
        self.draw()
    }

    /// Validate the grid and recompute every transform top-down.
    pub fn layout(&mut self) -> Result<(), RenderError> {
        let rows = self.axes.len();
        if rows == 0 {
            return Err(RenderError::InvalidGrid("figure has no axes".to_string()));
        }
        let cols = self.axes[0].len();
        if cols == 0 {
            return Err(RenderError::InvalidGrid(
                "figure grid has empty rows".to_string(),
            ));
        }
        for (i, row) in self.axes.iter().enumerate() {
            if row.len() != cols {
                return Err(RenderError::InvalidGrid(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
        }

        let rect = Rect::new(Point::new(0.0, 0.0), self.style.size);
        let (outer, inner) = carve(
            &rect,
            &self.style.margins,
            &self.style.padding,
            self.style.border_width,
        );
        self.rect_outer = outer;
        self.rect_inner = inner;

        log::debug!("figure layout: {rows}x{cols} grid in {inner}");

        // Uniform grid: every cell gets an equal share of the content
        // rectangle.
        let cell_h = inner.scale.y / rows as f64;
        let cell_w = inner.scale.x / cols as f64;
        let mut y_pos = inner.position.y;

        for row in &mut self.axes {
            let mut x_pos = inner.position.x;
            for axes in row.iter_mut() {
                let cell_rect = Rect::new(Point::new(x_pos, y_pos), Point::new(cell_w, cell_h));
                let cell_transform =
                    AffineTransform::scale_translate(cell_w, cell_h, x_pos, y_pos);
                axes.layout(cell_rect, cell_transform);
                x_pos += cell_w;
            }
            y_pos += cell_h;
        }

        Ok(())
    }

    /// Emit the whole scene onto a surface: background, frame, axes cells
    /// in row-major order, then the centered title and subtitle.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let b0 = self.rect_outer.position;
        let b1 = self.rect_outer.scale;

        if self.style.background.is_visible() {
            surface.set_color(self.style.background);
            surface.rect(b0, b1);
            surface.fill();
        }
        if self.style.border_width > 0.0 && self.style.border_color.is_visible() {
            surface.set_line_width(self.style.border_width);
            surface.set_color(self.style.border_color);
            surface.rect(b0, b1);
            surface.stroke();
        }

        for row in &self.axes {
            for axes in row {
                axes.draw(surface)?;
            }
        }

        let w = self.style.size.x;

        surface.set_color(Color::BLACK);
        surface.set_font(&self.style.font_face, self.style.title_font_size);
        let ext = surface.text_extents(&self.title);
        surface.text(
            Point::new(0.5 * w - ext.width / 2.0, 20.0 + ext.height),
            &self.title,
        );

        surface.set_font(&self.style.font_face, self.style.subtitle_font_size);
        let ext = surface.text_extents(&self.subtitle);
        surface.text(
            Point::new(0.5 * w - ext.width / 2.0, 35.0 + ext.height),
            &self.subtitle,
        );

        Ok(())
    }

    /// Re-layout and render the scene into a fresh SVG buffer. On failure
    /// the previous buffer is left untouched; no partial image is kept.
    pub fn draw(&mut self) -> Result<(), RenderError> {
        self.layout()?;
        let mut surface = SvgSurface::new(self.style.size.x, self.style.size.y);
        self.render(&mut surface)?;
        self.buffer = surface.finish();
        Ok(())
    }

    /// The most recent draw's serialized image.
    pub fn svg(&self) -> &[u8] {
        &self.buffer
    }

    /// Write the most recent draw's output verbatim.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        std::fs::write(path.as_ref(), &self.buffer)?;
        log::info!("saved figure to {}", path.as_ref().display());
        Ok(())
    }
}
