//! Validation utilities for trade data.

use tickplot_core::Trade;

/// Validate a trade has reasonable values.
pub fn validate_trade(trade: &Trade) -> bool {
    trade.price > 0.0
        && trade.price.is_finite()
        && trade.size > 0.0
        && trade.size.is_finite()
}
