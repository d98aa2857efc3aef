//! API Gateway proxy responses and their JSON bodies.

use std::collections::BTreeMap;
use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use leadintake_lib::{Classification, LeadReceipt, ProbabilityScore};

/// Headers a browser may send on the cross-origin call.
pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Methods accepted on the cross-origin call.
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST";

/// Success message returned with every stored lead.
pub const LEAD_ACCEPTED_MESSAGE: &str = "Lead processed and saved successfully.";

/// Prefix of the message returned with a 500 response.
pub const INTERNAL_ERROR_PREFIX: &str = "Internal server error";

/// Headers attached to every response, preflight included.
///
/// Names keep the conventional casing API Gateway passes through to browsers.
pub fn cors_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS),
        ("Access-Control-Allow-Methods", CORS_ALLOW_METHODS),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

/// Proxy-integration response returned to API Gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ProxyResponse {
    /// 204 response to a CORS preflight, without a body.
    pub fn preflight() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT.as_u16(),
            headers: cors_headers(),
            body: None,
        }
    }

    /// Response with `payload` serialized as the JSON body.
    pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            status_code: status.as_u16(),
            headers: cors_headers(),
            body: Some(serde_json::to_string(payload)?),
        })
    }

    /// 200 response for a stored lead.
    pub fn accepted(receipt: &LeadReceipt) -> serde_json::Result<Self> {
        Self::json(StatusCode::OK, &LeadAccepted::from(receipt))
    }

    /// 500 response carrying the error's text.
    pub fn internal_error(error: &dyn fmt::Display) -> Self {
        let body = ErrorBody {
            message: format!("{}: {}", INTERNAL_ERROR_PREFIX, error),
        };
        // A struct with one String field always serializes.
        let body = serde_json::to_string(&body)
            .unwrap_or_else(|_| format!("{{\"message\":\"{}\"}}", INTERNAL_ERROR_PREFIX));
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            headers: cors_headers(),
            body: Some(body),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadAccepted {
    pub message: String,
    #[serde(rename = "leadId")]
    pub lead_id: String,
    #[serde(rename = "probabilidadCompra")]
    pub purchase_probability: ProbabilityScore,
    #[serde(rename = "clasificacion")]
    pub classification: Classification,
}

impl From<&LeadReceipt> for LeadAccepted {
    fn from(receipt: &LeadReceipt) -> Self {
        Self {
            message: LEAD_ACCEPTED_MESSAGE.to_string(),
            lead_id: receipt.lead_id.clone(),
            purchase_probability: receipt.probability,
            classification: receipt.classification,
        }
    }
}

/// Body of a 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
