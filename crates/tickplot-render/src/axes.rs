//! An axes region: a bordered panel owning an ordered list of plot series.

use tickplot_core::{AffineTransform, Rect};

use crate::color::Color;
use crate::error::RenderError;
use crate::series::{carve, Insets, PlotSeries};
use crate::surface::Surface;

/// Style options for an axes panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesStyle {
    pub margins: Insets,
    pub padding: Insets,
    pub border_width: f64,
    pub background: Color,
    pub border_color: Color,
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            margins: Insets::uniform(20.0),
            padding: Insets::uniform(10.0),
            border_width: 0.0,
            background: Color::rgba(0.86, 0.86, 0.86, 0.0),
            border_color: Color::BLACK,
        }
    }
}

/// A subregion of the figure holding plot series. Series are owned by the
/// axes and drawn in insertion order, later series on top.
pub struct Axes {
    style: AxesStyle,
    series: Vec<Box<dyn PlotSeries>>,
    rect_inner: Rect,
    transform: AffineTransform,
    transform_inner: AffineTransform,
}

impl Axes {
    pub fn new() -> Self {
        Self::with_style(AxesStyle::default())
    }

    pub fn with_style(style: AxesStyle) -> Self {
        Self {
            style,
            series: Vec::new(),
            rect_inner: Rect::default(),
            transform: AffineTransform::identity(),
            transform_inner: AffineTransform::identity(),
        }
    }

    /// Build an axes owning the given series up front.
    pub fn with_series(series: Vec<Box<dyn PlotSeries>>) -> Self {
        let mut axes = Self::new();
        axes.series = series;
        axes
    }

    pub fn push_series(&mut self, series: Box<dyn PlotSeries>) {
        self.series.push(series);
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Subdivide the assigned rect and propagate the content transform to
    /// every series.
    pub fn layout(&mut self, rect: Rect, transform: AffineTransform) {
        self.transform = transform;
        let (_outer, inner) = carve(
            &rect,
            &self.style.margins,
            &self.style.padding,
            self.style.border_width,
        );
        self.rect_inner = inner;
        self.transform_inner = AffineTransform::scale_translate(
            inner.scale.x,
            inner.scale.y,
            inner.position.x,
            inner.position.y,
        );

        for series in &mut self.series {
            series.layout(self.rect_inner, self.transform_inner);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let p0 = self.rect_inner.position;
        let s0 = self.rect_inner.scale;

        if self.style.background.is_visible() {
            surface.set_color(self.style.background);
            surface.rect(p0, s0);
            surface.fill();
        }
        if self.style.border_width > 0.0 && self.style.border_color.is_visible() {
            surface.set_line_width(self.style.border_width);
            surface.set_color(self.style.border_color);
            surface.rect(p0, s0);
            surface.stroke();
        }

        for series in &self.series {
            series.draw(surface)?;
        }
        Ok(())
    }

    /// The content rectangle computed by the last layout pass.
    pub fn inner_rect(&self) -> Rect {
        self.rect_inner
    }

    /// The transform assigned by the parent during the last layout pass.
    pub fn transform(&self) -> AffineTransform {
        self.transform
    }

    /// The content transform propagated to this axes' series.
    pub fn inner_transform(&self) -> AffineTransform {
        self.transform_inner
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}
