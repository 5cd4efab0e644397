//! Tick source trait definition.

use tickplot_core::Trade;

/// Trait for types that can load a cleaned, session-filtered, time-ordered
/// trade sequence.
///
/// This trait uses `anyhow::Result` for flexible error handling.
pub trait TickSource {
    fn load(&self) -> anyhow::Result<Vec<Trade>>;
}
