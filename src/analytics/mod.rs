//! Optional analytics integration.
//!
//! Interactions worth counting (tool visits, searches, filter changes) are
//! turned into [`AnalyticsEvent`]s and handed to an [`AnalyticsSink`]. The
//! sink is fire-and-forget: it cannot fail and its absence changes nothing
//! about filtering or rendering.
//!
//! # Sinks
//!
//! - [`NoopSink`]: default, drops everything
//! - [`TracingSink`]: emits each event as a structured `tracing` event
//! - [`RecordingSink`]: keeps events in memory for the host to drain
//!
//! Use [`sink_from_config`] to pick the sink matching a [`Config`].

mod sink;

pub use sink::{AnalyticsSink, NoopSink, RecordingSink, TracingSink};

use crate::Config;
use serde::Serialize;

/// Category attached to every interaction event.
pub const ENGAGEMENT: &str = "engagement";

/// Hosts on which analytics stay disabled even with a measurement id.
const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// One analytics event: a name plus `{category, label}` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `tool_visit` or `filter_pricing`.
    pub name: String,
    pub category: String,
    pub label: String,
    /// Unix timestamp (seconds, UTC) at which the event was created.
    pub timestamp: i64,
}

impl AnalyticsEvent {
    /// Creates an engagement event stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tooldeck::analytics::AnalyticsEvent;
    ///
    /// let event = AnalyticsEvent::engagement("search", "image");
    /// assert_eq!(event.category, "engagement");
    /// ```
    pub fn engagement(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: ENGAGEMENT.to_string(),
            label: label.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Returns `true` if analytics should be emitted for this configuration.
///
/// Requires a non-empty measurement id and a host that is not a local
/// development address.
#[must_use]
pub fn analytics_enabled(config: &Config) -> bool {
    let has_id = config
        .measurement_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());
    let is_local = config
        .hostname
        .as_deref()
        .is_some_and(|host| LOCAL_HOSTS.contains(&host));
    has_id && !is_local
}

/// Builds the sink for a configuration.
///
/// Enabled configurations get a [`TracingSink`] tagged with the measurement
/// id; everything else gets a [`NoopSink`].
#[must_use]
pub fn sink_from_config(config: &Config) -> Box<dyn AnalyticsSink> {
    if analytics_enabled(config) {
        let id = config.measurement_id.clone().unwrap_or_default();
        tracing::debug!(measurement_id = %id, "analytics enabled");
        Box::new(TracingSink::new(id))
    } else {
        tracing::debug!("analytics disabled");
        Box::new(NoopSink)
    }
}
