//! Analytics sink implementations.

use super::AnalyticsEvent;
use std::cell::RefCell;
use std::rc::Rc;

/// Destination for analytics events.
///
/// Sinks cannot fail. A sink that cannot deliver an event drops it.
pub trait AnalyticsSink {
    fn emit(&mut self, event: &AnalyticsEvent);
}

impl<A: AnalyticsSink + ?Sized> AnalyticsSink for Box<A> {
    fn emit(&mut self, event: &AnalyticsEvent) {
        (**self).emit(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(&mut self, _event: &AnalyticsEvent) {}
}

/// Sink that records each event as an `info` level `tracing` event.
///
/// With the OpenTelemetry layer installed the events end up in the trace
/// export file as span events.
#[derive(Debug, Clone)]
pub struct TracingSink {
    measurement_id: String,
}

impl TracingSink {
    #[must_use]
    pub const fn new(measurement_id: String) -> Self {
        Self { measurement_id }
    }
}

impl AnalyticsSink for TracingSink {
    fn emit(&mut self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "tooldeck::analytics",
            measurement_id = %self.measurement_id,
            event_name = %event.name,
            event_category = %event.category,
            event_label = %event.label,
            timestamp = event.timestamp,
            "analytics event"
        );
    }
}

/// Sink that keeps events in memory.
///
/// Clones share the same buffer, so a host can keep one handle and give the
/// other to the controller.
///
/// ```
/// use tooldeck::analytics::{AnalyticsEvent, AnalyticsSink, RecordingSink};
///
/// let recorder = RecordingSink::default();
/// let mut sink = recorder.clone();
/// sink.emit(&AnalyticsEvent::engagement("search", "vid"));
/// assert_eq!(recorder.events().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns all recorded events.
    pub fn drain(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn emit(&mut self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
