use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{SurfaceGeometry, TradeSeries, WindowDensity, right_anchor_x};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, draw_candle_pass, draw_grid, draw_time_labels};

use super::{ChartConfig, ChartObserver, TradeSource};

/// Lifecycle of a [`ChartSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartState {
    /// No trade series has loaded yet; redraws are grid-only.
    Uninitialized,
    Ready,
    /// A full redraw pass is running.
    Redrawing,
}

/// What the last redraw pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedrawSummary {
    pub geometry: SurfaceGeometry,
    pub density: WindowDensity,
    /// X of the newest candle's wick.
    pub anchor_x: f64,
    pub grid_lines: usize,
    pub time_labels: usize,
    pub candles: usize,
}

/// Orchestrator owning the drawing surface, its geometry and the last
/// loaded trade series.
///
/// Every redraw recomputes the whole scene: clear, grid, time axis, then
/// candles with their volume bars.
pub struct ChartSurface<S: DrawingSurface> {
    surface: S,
    config: ChartConfig,
    geometry: SurfaceGeometry,
    state: ChartState,
    series: Option<TradeSeries>,
    last_redraw: Option<RedrawSummary>,
}

impl<S: DrawingSurface> ChartSurface<S> {
    /// Creates an idle chart sized to the current viewport width.
    ///
    /// Nothing is drawn until the first trigger arrives.
    pub fn new(surface: S, config: ChartConfig, width: u32) -> ChartResult<Self> {
        let config = config.validate()?;
        let geometry = SurfaceGeometry::new(width, config.surface_height).validate()?;
        debug!(
            width = geometry.width,
            height = geometry.height,
            "chart surface created"
        );
        Ok(Self {
            surface,
            config,
            geometry,
            state: ChartState::Uninitialized,
            series: None,
            last_redraw: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> Option<&TradeSeries> {
        self.series.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn last_redraw(&self) -> Option<RedrawSummary> {
        self.last_redraw
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Handles a data collaborator outcome.
    ///
    /// A successful series replaces the previous one wholesale and triggers a
    /// full redraw. A failure keeps the previous series, redraws grid-only if
    /// nothing was ever loaded, and is returned to the caller.
    pub fn data_ready(&mut self, result: ChartResult<TradeSeries>) -> ChartResult<RedrawSummary> {
        let series = match result {
            Ok(series) => series,
            Err(err) => {
                warn!(error = %err, "trade series unavailable; skipping candle pass");
                if self.series.is_none() {
                    self.redraw()?;
                }
                return Err(err);
            }
        };

        debug!(samples = series.len(), "trade series received");
        if self.state == ChartState::Uninitialized {
            self.transition(ChartState::Ready);
            self.redraw()?;
        }
        self.series = Some(series);
        self.redraw()
    }

    /// Records a new viewport width and redraws at it.
    ///
    /// Before any data has loaded only the grid is drawn.
    pub fn viewport_resized(&mut self, width: u32) -> ChartResult<RedrawSummary> {
        if width == 0 {
            return Err(ChartError::InvalidViewport {
                width,
                height: self.geometry.height,
            });
        }
        debug!(
            old_width = self.geometry.width,
            new_width = width,
            "viewport resized"
        );
        self.geometry = self.geometry.with_width(width);
        self.redraw()
    }

    /// Pulls one series from `source` and handles it as a data trigger.
    ///
    /// A source that completes later leaves the chart untouched here.
    pub fn load_from<T: TradeSource>(&mut self, source: &T) -> ChartResult<()> {
        let mut outcome = Ok(());
        source.fetch_trade_series(|result| {
            outcome = self.data_ready(result).map(|_| ());
        });
        outcome
    }

    /// Runs a full redraw pass at the current geometry.
    pub fn redraw(&mut self) -> ChartResult<RedrawSummary> {
        let resting = self.state;
        if resting == ChartState::Ready {
            self.transition(ChartState::Redrawing);
        }
        let result = self.draw_pass();
        self.transition(resting);

        let summary = result?;
        self.last_redraw = Some(summary);
        Ok(summary)
    }

    fn draw_pass(&mut self) -> ChartResult<RedrawSummary> {
        let geometry = self.geometry;
        let config = self.config;
        let density = config.window.density(geometry.width);
        let spacing_px = config.window.grid_spacing_px();

        self.surface.clear(geometry)?;
        let grid_lines = draw_grid(&mut self.surface, geometry, density, spacing_px, config.style)?;
        let mut summary = RedrawSummary {
            geometry,
            density,
            anchor_x: right_anchor_x(geometry.width, config.candles.anchor_step_px),
            grid_lines,
            time_labels: 0,
            candles: 0,
        };

        let series = match (&self.series, self.state) {
            (Some(series), ChartState::Redrawing) => series,
            _ => {
                trace!(width = geometry.width, "grid-only redraw");
                return Ok(summary);
            }
        };

        let labels = config
            .time_axis_formatter()
            .labels(series.timestamps(), density.max_time_labels());
        summary.time_labels =
            draw_time_labels(&mut self.surface, geometry, labels, spacing_px, config.style)?;

        let window = config.window.select(series, geometry.width);
        summary.candles = draw_candle_pass(
            &mut self.surface,
            window,
            geometry,
            config.candles,
            config.volume_band,
            config.style,
        )?;

        trace!(
            width = geometry.width,
            candles = summary.candles,
            time_labels = summary.time_labels,
            "redraw complete"
        );
        Ok(summary)
    }

    fn transition(&mut self, next: ChartState) {
        if self.state != next {
            trace!(from = ?self.state, to = ?next, "chart state transition");
            self.state = next;
        }
    }
}

impl<S: DrawingSurface> ChartObserver for ChartSurface<S> {
    fn on_data_ready(&mut self, result: ChartResult<TradeSeries>) -> ChartResult<()> {
        self.data_ready(result).map(|_| ())
    }

    fn on_viewport_resize(&mut self, width: u32) -> ChartResult<()> {
        self.viewport_resized(width).map(|_| ())
    }
}
