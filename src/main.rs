//! tickplot driver: load trade ticks, aggregate into bars, render the
//! candles-over-volume figure and save it as SVG.

use std::sync::Arc;

use anyhow::{Context, Result};

use tickplot_config::Config;
use tickplot_core::aggregate;
use tickplot_data::{CsvTickLoader, TickSource};
use tickplot_render::ohlcv_figure;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading config {path}"))?,
        None => Config::load_default(),
    };

    log::info!(
        "charting {} {} from {}",
        config.general.contract,
        config.general.date,
        config.data.ticks_path.display()
    );

    let loader = CsvTickLoader::new(&config.data.ticks_path)
        .with_price_scale(config.data.price_scale)
        .with_size_scale(config.data.size_scale);
    let trades = loader.load()?;

    let bars = aggregate(&trades, config.chart.bin_size)?;
    log::info!(
        "aggregated {} trades into {} bars of {}",
        trades.len(),
        bars.len(),
        config.chart.bin_size
    );

    let title = format!("{} {}", config.general.contract, config.general.date);
    let subtitle = format!("{} ticks per bar", config.chart.bin_size);
    let figure = ohlcv_figure(Arc::new(bars), &title, &subtitle)?;

    figure
        .save(&config.chart.output)
        .with_context(|| format!("writing {}", config.chart.output.display()))?;

    Ok(())
}
