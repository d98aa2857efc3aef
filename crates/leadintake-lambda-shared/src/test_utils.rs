//! Test utilities for Lambda handler testing.
//!
//! Provides deterministic score sources, a store that always fails, and
//! builders for proxy events.
//!
//! # Usage
//!
//! ```ignore
//! use leadintake_lambda_shared::test_utils::{lambda_event, proxy_event, FixedScore};
//! use leadintake_lib::{LeadIntake, MemoryLeadStore};
//!
//! let intake = LeadIntake::new(MemoryLeadStore::new(), FixedScore(80));
//! let event = lambda_event(proxy_event("POST", Some("{}")));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};

use leadintake_lib::{Error as LibError, LeadRecord, LeadStore, Result as LibResult, ScoreSource};

/// Score source that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub u8);

impl ScoreSource for FixedScore {
    fn next_score(&self) -> u8 {
        self.0
    }
}

/// Score source cycling through a fixed list of values.
#[derive(Debug)]
pub struct ScriptedScores {
    values: Vec<u8>,
    next: AtomicUsize,
}

impl ScriptedScores {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted scores need at least one value");
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl ScoreSource for ScriptedScores {
    fn next_score(&self) -> u8 {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

/// Store whose every write fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingLeadStore {
    pub message: String,
}

impl FailingLeadStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LeadStore for FailingLeadStore {
    async fn put_lead(&self, record: &LeadRecord) -> LibResult<()> {
        Err(LibError::Store {
            lead_id: record.lead_id.clone(),
            message: self.message.clone(),
        })
    }
}

/// Create a mock request ID for testing.
///
/// Returns a request ID string in the format "test-request-{suffix}".
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{}", suffix)
}

/// Build an API Gateway proxy event payload.
pub fn proxy_event(method: &str, body: Option<&str>) -> Value {
    let mut event = json!({
        "resource": "/leads",
        "path": "/leads",
        "httpMethod": method,
        "headers": { "Content-Type": "application/json" },
        "isBase64Encoded": false,
        "requestContext": { "requestId": mock_request_id(method) }
    });
    if let Some(body) = body {
        event["body"] = Value::String(body.to_string());
    }
    event
}

/// Build a CORS preflight event.
pub fn preflight_event() -> Value {
    proxy_event("OPTIONS", None)
}

/// Wrap a payload in a `LambdaEvent` with a default context.
pub fn lambda_event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProxyEvent;

    #[test]
    fn mock_request_id_formats_correctly() {
        assert_eq!(mock_request_id("123"), "test-request-123");
    }

    #[test]
    fn scripted_scores_cycle() {
        let scores = ScriptedScores::new(vec![49, 50]);
        assert_eq!(scores.next_score(), 49);
        assert_eq!(scores.next_score(), 50);
        assert_eq!(scores.next_score(), 49);
    }

    #[test]
    fn proxy_event_round_trips_into_typed_event() {
        let event: ProxyEvent =
            serde_json::from_value(proxy_event("POST", Some("{\"a\":1}"))).unwrap();
        assert_eq!(event.http_method.as_deref(), Some("POST"));
        assert_eq!(event.body.as_deref(), Some("{\"a\":1}"));
        assert_eq!(event.gateway_request_id(), Some("test-request-POST"));
    }

    #[test]
    fn preflight_event_has_no_body() {
        let event = preflight_event();
        assert_eq!(event["httpMethod"], "OPTIONS");
        assert!(event.get("body").is_none());
    }

    #[test]
    fn lambda_event_carries_payload_with_default_context() {
        let event = lambda_event(preflight_event());
        assert_eq!(event.payload["httpMethod"], "OPTIONS");
        assert!(event.context.request_id.is_empty());
    }

    #[tokio::test]
    async fn failing_store_reports_message() {
        let record = LeadRecord::new(
            leadintake_lib::LeadSubmission::default().into_details(),
            leadintake_lib::ProbabilityScore::try_from(5).unwrap(),
            "x",
            "2025-01-01T00:00:00.000000",
        );
        let err = FailingLeadStore::new("boom").put_lead(&record).await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
