//! Chart scene graph and rendering for tickplot.
//!
//! A [`Figure`] owns a grid of [`Axes`]; each axes owns plot series
//! (candlesticks, volume bars). Layout runs top-down computing affine
//! transforms per region; draw runs bottom-up emitting drawing intents
//! against a [`Surface`].

pub mod axes;
pub mod color;
pub mod compose;
pub mod error;
pub mod figure;
pub mod series;
pub mod surface;

#[cfg(test)]
pub(crate) mod testutil;

pub use axes::{Axes, AxesStyle};
pub use color::Color;
pub use compose::{ohlcv_figure, subplots};
pub use error::RenderError;
pub use figure::{Figure, FigureStyle};
pub use series::{CandlestickSeries, Insets, PlotSeries, SeriesStyle, VolumeSeries};
pub use surface::{Surface, SvgSurface, TextExtents};
