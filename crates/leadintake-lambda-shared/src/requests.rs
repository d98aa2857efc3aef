//! Inbound API Gateway proxy event.

use serde::{Deserialize, Serialize};

/// Method name of a CORS preflight request.
pub const PREFLIGHT_METHOD: &str = "OPTIONS";

/// Body assumed when the event carries none.
pub const EMPTY_BODY: &str = "{}";

/// The subset of an API Gateway REST proxy event this function reads.
///
/// Every other key of the event is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    /// Raw JSON-encoded request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
}

/// API Gateway request context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ProxyEvent {
    /// True for a CORS preflight (exact, case-sensitive `OPTIONS`).
    pub fn is_preflight(&self) -> bool {
        self.http_method.as_deref() == Some(PREFLIGHT_METHOD)
    }

    /// The request body, or `{}` when none was sent.
    pub fn body_or_empty(&self) -> &str {
        self.body.as_deref().unwrap_or(EMPTY_BODY)
    }

    /// The API Gateway request id, when present.
    pub fn gateway_request_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.request_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_api_gateway_event() {
        let event: ProxyEvent = serde_json::from_value(json!({
            "resource": "/leads",
            "path": "/leads",
            "httpMethod": "POST",
            "headers": { "Content-Type": "application/json" },
            "body": "{\"emailContacto\":\"a@b.com\"}",
            "isBase64Encoded": false,
            "requestContext": { "requestId": "gw-123", "stage": "dev" }
        }))
        .unwrap();

        assert_eq!(event.http_method.as_deref(), Some("POST"));
        assert_eq!(event.body_or_empty(), "{\"emailContacto\":\"a@b.com\"}");
        assert_eq!(event.gateway_request_id(), Some("gw-123"));
        assert!(!event.is_preflight());
    }

    #[test]
    fn missing_or_null_body_defaults_to_empty_object() {
        let event: ProxyEvent = serde_json::from_value(json!({ "httpMethod": "POST" })).unwrap();
        assert_eq!(event.body_or_empty(), "{}");

        let event: ProxyEvent =
            serde_json::from_value(json!({ "httpMethod": "POST", "body": null })).unwrap();
        assert_eq!(event.body_or_empty(), "{}");
    }

    #[test]
    fn preflight_match_is_case_sensitive() {
        let event = ProxyEvent {
            http_method: Some("options".to_string()),
            ..ProxyEvent::default()
        };
        assert!(!event.is_preflight());

        let event = ProxyEvent {
            http_method: Some("OPTIONS".to_string()),
            ..ProxyEvent::default()
        };
        assert!(event.is_preflight());
    }

    #[test]
    fn missing_method_is_not_preflight() {
        assert!(!ProxyEvent::default().is_preflight());
    }
}
