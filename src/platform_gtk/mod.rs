use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::{ChartConfig, ChartSurface};
use crate::core::TradeSeries;
use crate::error::{ChartError, ChartResult};
use crate::render::{CairoSurface, RecordingSurface};

/// Viewport host for GTK4 applications.
///
/// Resize notifications from the `DrawingArea` drive
/// [`ChartSurface::viewport_resized`]; the recorded frame is replayed onto
/// the widget's Cairo context on every draw.
pub struct GtkChartAdapter {
    area: gtk::DrawingArea,
    chart: Rc<RefCell<ChartSurface<RecordingSurface>>>,
}

impl GtkChartAdapter {
    pub fn new(config: ChartConfig, initial_width: u32) -> ChartResult<Self> {
        let chart = ChartSurface::new(RecordingSurface::new(), config, initial_width)?;
        let content_height = i32::try_from(chart.geometry().height).map_err(|_| {
            ChartError::InvalidViewport {
                width: initial_width,
                height: chart.geometry().height,
            }
        })?;
        let chart = Rc::new(RefCell::new(chart));

        let area = gtk::DrawingArea::new();
        area.set_content_height(content_height);
        area.set_hexpand(true);

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_area, context, _width, _height| {
            let chart = draw_chart.borrow();
            let frame = chart.surface().frame();
            if frame.is_empty() {
                return;
            }
            let mut surface = CairoSurface::for_context(context.clone(), frame.geometry);
            if let Err(err) = frame.replay(&mut surface) {
                warn!(error = %err, "failed to paint chart frame");
            }
        });

        let resize_chart = Rc::clone(&chart);
        area.connect_resize(move |area, width, _height| {
            let Ok(width) = u32::try_from(width) else {
                return;
            };
            if width == 0 {
                return;
            }
            if let Err(err) = resize_chart.borrow_mut().viewport_resized(width) {
                warn!(error = %err, width, "chart resize failed");
            }
            area.queue_draw();
        });

        Ok(Self { area, chart })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Shared handle, e.g. for subscribing to a `ChartEventHub`.
    #[must_use]
    pub fn chart(&self) -> Rc<RefCell<ChartSurface<RecordingSurface>>> {
        Rc::clone(&self.chart)
    }

    /// Forwards a data collaborator outcome and schedules a repaint.
    pub fn data_ready(&self, result: ChartResult<TradeSeries>) -> ChartResult<()> {
        let outcome = self.chart.borrow_mut().data_ready(result).map(|_| ());
        self.area.queue_draw();
        outcome
    }
}
