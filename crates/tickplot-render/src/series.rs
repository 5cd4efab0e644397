//! Plot series: candlesticks and volume bars.
//!
//! Both series share the same panel layout. Given the rect and transform
//! assigned by the owning axes, a series carves out margins, padding and
//! border, then builds a plot transform that maps normalized [0,1]x[0,1]
//! data space into the panel with the vertical axis flipped and pixel
//! space reserved for axis labels.

use std::sync::Arc;

use tickplot_core::{AffineTransform, BarSeries, Point, Rect, SESSION_SECONDS};

use crate::color::Color;
use crate::error::RenderError;
use crate::surface::Surface;

/// Per-edge spacing in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

/// Carve a rect into its outer (border centerline) and inner (content)
/// rectangles.
pub(crate) fn carve(rect: &Rect, margins: &Insets, padding: &Insets, border: f64) -> (Rect, Rect) {
    let Point { x, y } = rect.position;
    let (w, h) = (rect.scale.x, rect.scale.y);
    let m = margins;
    let p = padding;
    let b = border;

    let outer = Rect::new(
        Point::new(x + m.left + 0.5 * b, y + m.top + 0.5 * b),
        Point::new(w - m.left - m.right - b, h - m.top - m.bottom - b),
    );
    let inner = Rect::new(
        Point::new(x + m.left + b + p.left, y + m.top + b + p.top),
        Point::new(
            w - m.left - m.right - 2.0 * b - p.left - p.right,
            h - m.top - m.bottom - 2.0 * b - p.top - p.bottom,
        ),
    );
    (outer, inner)
}

/// Style options shared by both series types. All fields are overridable
/// per instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub margins: Insets,
    pub padding: Insets,
    pub border_width: f64,
    pub grid_line_width: f64,
    pub stick_line_width: f64,
    /// Candle body width as a fraction of the bar's time slot.
    pub candle_width_scale: f64,
    /// Pixels reserved for x-axis tick labels.
    pub x_axis_space: f64,
    /// Pixels reserved for y-axis tick labels.
    pub y_axis_space: f64,
    pub background: Color,
    pub border_color: Color,
    pub axis_color: Color,
    pub up_color: Color,
    pub down_color: Color,
    pub wick_color: Color,
    pub font_face: String,
    pub font_size: f64,
    pub tick_font_size: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            margins: Insets::uniform(20.0),
            padding: Insets::uniform(10.0),
            border_width: 0.0,
            grid_line_width: 0.5,
            stick_line_width: 0.5,
            candle_width_scale: 0.4,
            x_axis_space: 30.0,
            y_axis_space: 20.0,
            background: Color::TRANSPARENT,
            border_color: Color::BLACK,
            axis_color: Color::BLACK,
            up_color: Color::UP_GREEN,
            down_color: Color::DOWN_RED,
            wick_color: Color::BLACK,
            font_face: "InputSans".to_string(),
            font_size: 12.0,
            tick_font_size: 10.0,
        }
    }
}

/// Layout state computed for a series panel. Replaced wholesale on every
/// layout pass, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct SeriesFrame {
    rect_inner: Rect,
    transform_plot: AffineTransform,
}

fn layout_frame(style: &SeriesStyle, rect: Rect) -> SeriesFrame {
    let (_outer, inner) = carve(&rect, &style.margins, &style.padding, style.border_width);
    let pos = inner.position;
    let scale = inner.scale;

    // Data y=0 maps to the panel bottom; device y grows downward, and the
    // reserved label space shrinks the usable plot area.
    let transform_plot = AffineTransform::scale_translate(
        scale.x - style.x_axis_space,
        -(scale.y - style.y_axis_space),
        pos.x,
        pos.y + scale.y - style.y_axis_space,
    );

    SeriesFrame {
        rect_inner: inner,
        transform_plot,
    }
}

/// Anything placeable inside an axes region.
pub trait PlotSeries {
    /// Receive the axes' inner rect and content transform and compute the
    /// series' own layout.
    fn layout(&mut self, rect: Rect, transform: AffineTransform);

    /// Emit drawing intents for the laid-out series.
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError>;
}

const NUM_Y_TICKS: usize = 6;

/// Guard against a flat series collapsing the value range to zero.
fn value_span((min, max): (f64, f64)) -> f64 {
    let span = max - min;
    if span == 0.0 {
        1.0
    } else {
        span
    }
}

/// Labeled x-axis tick positions covering the session: 9:30 then every
/// full hour through 16:00, in normalized [0,1] session time.
fn session_x_ticks() -> Vec<(f64, String)> {
    let mut ticks = vec![(-0.5, "9:30".to_string())];
    for i in 0..7 {
        ticks.push((i as f64, format!("{}:00", 10 + i)));
    }
    ticks
        .into_iter()
        .map(|(t, label)| ((t + 0.5) / 6.5, label))
        .collect()
}

fn draw_panel(surface: &mut dyn Surface, style: &SeriesStyle, frame: &SeriesFrame) {
    let p0 = frame.rect_inner.position;
    let s0 = frame.rect_inner.scale;

    if style.background.is_visible() {
        surface.set_color(style.background);
        surface.rect(p0, s0);
        surface.fill();
    }
    if style.border_width > 0.0 && style.border_color.is_visible() {
        surface.set_line_width(style.border_width);
        surface.set_color(style.border_color);
        surface.rect(p0, s0);
        surface.stroke();
    }
}

/// The L-shaped axis frame: a baseline under the plot and a vertical rail
/// along the label side.
fn draw_axis_frame(surface: &mut dyn Surface, style: &SeriesStyle, frame: &SeriesFrame) {
    let t = &frame.transform_plot;
    surface.set_line_width(style.grid_line_width);
    surface.set_color(style.axis_color);
    surface.move_to(t.apply(Point::new(-0.03, -0.06)));
    surface.line_to(t.apply(Point::new(1.03, -0.06)));
    surface.line_to(t.apply(Point::new(1.03, 1.0)));
    surface.stroke();
}

fn draw_x_ticks(surface: &mut dyn Surface, style: &SeriesStyle, frame: &SeriesFrame) {
    let t = &frame.transform_plot;
    surface.set_font(&style.font_face, style.tick_font_size);

    for (pos, label) in session_x_ticks() {
        let mark_0 = t.apply(Point::new(pos, -0.06));
        let mark_1 = t.apply(Point::new(pos, -0.08));

        surface.set_line_width(style.grid_line_width);
        surface.set_color(style.axis_color);
        surface.move_to(mark_0);
        surface.line_to(mark_1);
        surface.stroke();

        let ext = surface.text_extents(&label);
        surface.text(
            Point::new(
                mark_0.x - ext.width / 2.0,
                mark_0.y + ext.height / 2.0 + 0.9 * style.y_axis_space,
            ),
            &label,
        );
    }
}

fn draw_y_ticks(
    surface: &mut dyn Surface,
    style: &SeriesStyle,
    frame: &SeriesFrame,
    ylim: (f64, f64),
    fmt: &dyn Fn(f64) -> String,
) {
    let t = &frame.transform_plot;
    let span = value_span(ylim);

    let tick_min = ylim.0.ceil();
    let tick_max = ylim.1.ceil();
    let tick_step = ((tick_max - tick_min) / NUM_Y_TICKS as f64).trunc();

    surface.set_line_width(style.grid_line_width);
    surface.set_color(style.axis_color);
    surface.set_font(&style.font_face, style.tick_font_size);

    for i in 0..NUM_Y_TICKS {
        let tick = tick_min + i as f64 * tick_step;
        let label = fmt(tick);
        let pos = (tick - ylim.0) / span;

        let mark_0 = t.apply(Point::new(1.03, pos));
        let mark_1 = t.apply(Point::new(1.04, pos));
        surface.move_to(mark_0);
        surface.line_to(mark_1);
        surface.stroke();

        let ext = surface.text_extents(&label);
        surface.text(
            Point::new(mark_0.x + ext.width / 2.0 - 4.0, mark_0.y + ext.height / 2.0),
            &label,
        );
    }
}

/// Candlestick glyphs over the bound bar series.
pub struct CandlestickSeries {
    bars: Arc<BarSeries>,
    style: SeriesStyle,
    frame: SeriesFrame,
}

impl CandlestickSeries {
    pub fn new(bars: Arc<BarSeries>) -> Self {
        Self::with_style(bars, SeriesStyle::default())
    }

    pub fn with_style(bars: Arc<BarSeries>, style: SeriesStyle) -> Self {
        Self {
            bars,
            style,
            frame: SeriesFrame::default(),
        }
    }
}

impl PlotSeries for CandlestickSeries {
    fn layout(&mut self, rect: Rect, _transform: AffineTransform) {
        self.frame = layout_frame(&self.style, rect);
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let ylim = self
            .bars
            .price_range()
            .ok_or(RenderError::EmptyBarSeries)?;
        let span = value_span(ylim);
        let style = &self.style;
        let frame = &self.frame;

        draw_panel(surface, style, frame);
        draw_axis_frame(surface, style, frame);
        draw_x_ticks(surface, style, frame);
        draw_y_ticks(surface, style, frame, ylim, &|v| format!("{v:.0}.00"));

        let t = &frame.transform_plot;
        for bar in self.bars.iter() {
            let x0 = bar.t_open / SESSION_SECONDS;
            let x1 = bar.t_close / SESSION_SECONDS;
            let x_mid = 0.5 * (x0 + x1);

            let y_low = (bar.low - ylim.0) / span;
            let y_high = (bar.high - ylim.0) / span;
            let y_open = (bar.open - ylim.0) / span;
            let y_close = (bar.close - ylim.0) / span;

            let body_color = if y_open < y_close {
                style.up_color
            } else {
                style.down_color
            };
            let (body_lo, body_hi) = (y_open.min(y_close), y_open.max(y_close));

            // Wick from low to high at the slot midpoint.
            surface.set_color(style.wick_color);
            surface.set_line_width(style.stick_line_width);
            surface.move_to(t.apply(Point::new(x_mid, y_low)));
            surface.line_to(t.apply(Point::new(x_mid, y_high)));
            surface.stroke();

            // Body over [open, close], centered in the slot.
            let half = 0.5 * style.candle_width_scale * (x1 - x0);
            let c0 = t.apply(Point::new(x_mid - half, body_lo));
            let c1 = t.apply(Point::new(x_mid + half, body_hi));

            surface.set_color(body_color);
            surface.rect(c0, c1.delta(c0));
            surface.fill_preserve();
            surface.set_color(style.wick_color);
            surface.set_line_width(style.stick_line_width);
            surface.stroke();
        }

        Ok(())
    }
}

/// Volume bars over the bound bar series, colored by price direction.
pub struct VolumeSeries {
    bars: Arc<BarSeries>,
    style: SeriesStyle,
    frame: SeriesFrame,
}

impl VolumeSeries {
    pub fn new(bars: Arc<BarSeries>) -> Self {
        Self::with_style(bars, SeriesStyle::default())
    }

    pub fn with_style(bars: Arc<BarSeries>, style: SeriesStyle) -> Self {
        Self {
            bars,
            style,
            frame: SeriesFrame::default(),
        }
    }
}

impl PlotSeries for VolumeSeries {
    fn layout(&mut self, rect: Rect, _transform: AffineTransform) {
        self.frame = layout_frame(&self.style, rect);
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let ylim = self
            .bars
            .volume_range()
            .ok_or(RenderError::EmptyBarSeries)?;
        let span = value_span(ylim);
        let style = &self.style;
        let frame = &self.frame;

        draw_panel(surface, style, frame);
        draw_axis_frame(surface, style, frame);
        draw_x_ticks(surface, style, frame);
        draw_y_ticks(surface, style, frame, ylim, &|v| format!("{v:.0}"));

        let t = &frame.transform_plot;
        for bar in self.bars.iter() {
            let x0 = bar.t_open / SESSION_SECONDS;
            let x1 = bar.t_close / SESSION_SECONDS;
            let x_mid = 0.5 * (x0 + x1);

            let y_top = (bar.volume - ylim.0) / span;
            // Direction comes from price, not volume.
            let color = if bar.open < bar.close {
                style.up_color
            } else {
                style.down_color
            };

            let half = 0.5 * style.candle_width_scale * (x1 - x0);
            let v0 = t.apply(Point::new(x_mid - half, 0.0));
            let v1 = t.apply(Point::new(x_mid + half, y_top));

            surface.set_color(color);
            surface.rect(v0, v1.delta(v0));
            surface.fill_preserve();
            surface.set_color(style.wick_color);
            surface.set_line_width(style.stick_line_width);
            surface.stroke();
        }

        Ok(())
    }
}
