//! Trade-tick loading utilities for tickplot.

pub mod csv;
pub mod source;
pub mod validation;

pub use self::csv::CsvTickLoader;
pub use source::TickSource;
pub use validation::validate_trade;
