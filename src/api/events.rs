use std::cell::RefCell;
use std::rc::Rc;

use tracing::{trace, warn};

use crate::core::TradeSeries;
use crate::error::{ChartError, ChartResult};

/// Redraw trigger delivered by the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// Single-shot outcome of a trade series fetch.
    DataReady(ChartResult<TradeSeries>),
    /// The viewport reported a new available width.
    ViewportResize { width: u32 },
}

/// Receiver of the two redraw triggers.
pub trait ChartObserver {
    fn on_data_ready(&mut self, result: ChartResult<TradeSeries>) -> ChartResult<()>;

    fn on_viewport_resize(&mut self, width: u32) -> ChartResult<()>;

    fn handle_event(&mut self, event: ChartEvent) -> ChartResult<()> {
        match event {
            ChartEvent::DataReady(result) => self.on_data_ready(result),
            ChartEvent::ViewportResize { width } => self.on_viewport_resize(width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscription list for hosts that fan events out to several charts.
///
/// Observers live behind `Rc<RefCell<_>>`: delivery happens on the host's
/// single event loop thread.
#[derive(Default)]
pub struct ChartEventHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Rc<RefCell<dyn ChartObserver>>)>,
}

impl ChartEventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Rc<RefCell<dyn ChartObserver>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, observer));
        trace!(subscribers = self.subscribers.len(), "chart observer subscribed");
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers `event` to every subscriber in subscription order.
    ///
    /// Every subscriber sees the event even when an earlier one fails; the
    /// first failure is returned.
    pub fn publish(&self, event: &ChartEvent) -> ChartResult<()> {
        let mut first_error = None;
        for (id, observer) in &self.subscribers {
            let delivered = match observer.try_borrow_mut() {
                Ok(mut observer) => observer.handle_event(event.clone()),
                Err(_) => Err(ChartError::InvalidData(
                    "observer is already handling an event".to_owned(),
                )),
            };
            if let Err(err) = delivered {
                warn!(subscription = id.0, error = %err, "chart observer failed to handle event");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
