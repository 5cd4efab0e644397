//! Core data model for tickplot: geometry primitives, trades, OHLCV bars
//! and tick-count aggregation.

pub mod aggregate;
pub mod bar;
pub mod geometry;
pub mod session;
pub mod trade;

pub use aggregate::{aggregate, AggregateError};
pub use bar::{Bar, BarSeries};
pub use geometry::{AffineTransform, Point, Rect};
pub use session::{session_bounds, SESSION_SECONDS};
pub use trade::Trade;
