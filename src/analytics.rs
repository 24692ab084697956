//! Best-effort usage analytics.
//!
//! Recording is a fire-and-forget contract: the engine catches every recorder
//! failure, logs it, and never lets it alter or delay a search result.

use crate::types::EntityKind;
use serde::Serialize;

/// Errors a recorder may raise; always suppressed by the engine.
pub type AnalyticsError = Box<dyn std::error::Error + Send + Sync>;

/// One recorded search: the query and how many results it produced.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEvent {
  /// The raw query as the caller sent it.
  pub raw_query: String,
  /// Number of results returned to the caller.
  pub result_count: usize,
  /// The kind filter, when one was applied.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entity_kind: Option<EntityKind>,
}

/// A sink for search usage events.
pub trait UsageRecorder: Send + Sync {
  /// Records one event. Errors are logged and swallowed by the engine.
  fn record(&self, event: &SearchEvent) -> Result<(), AnalyticsError>;
}

/// Recorder that emits each event as a JSON line through [`log`].
pub struct LogUsageRecorder;

impl UsageRecorder for LogUsageRecorder {
  fn record(&self, event: &SearchEvent) -> Result<(), AnalyticsError> {
    let line = serde_json::to_string(event)?;
    log::info!(target: "pitchside::usage", "{line}");
    Ok(())
  }
}
