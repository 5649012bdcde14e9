//! Click analytics.
//!
//! Rendering code never talks to an analytics backend directly: it is handed
//! an [`AnalyticsSink`] and calls [`emit`], which does not report back. A
//! sink that fails only loses the event.

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Action recorded when a post link is followed.
pub const CLICK_ACTION: &str = "click";

/// Label recorded when a post link is followed.
pub const POST_CLICK_LABEL: &str = "View a blogpost";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    /// Event for opening the post titled `title`.
    pub fn post_click(title: &str) -> Self {
        Self {
            category: title.to_owned(),
            action: CLICK_ACTION.to_owned(),
            label: POST_CLICK_LABEL.to_owned(),
        }
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Hand `event` to `sink` and move on. Delivery errors are dropped.
pub fn emit(sink: &dyn AnalyticsSink, event: &AnalyticsEvent) {
    let _ = sink.send(event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn send(&self, _event: &AnalyticsEvent) -> Result<()> {
        Ok(())
    }
}

/// Writes events to the terminal log (used by `folio serve`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        log!("analytics"; "{} / {} / {}", event.category, event.action, event.label);
        Ok(())
    }
}
