//! Lead submission parsing, field defaulting, and the persisted record.
//!
//! The inbound body is accepted as sent: every field is optional, a JSON
//! `null` counts as absent, and present values keep whatever JSON type the
//! caller used. Missing values are replaced by fixed defaults in
//! [`LeadSubmission::into_details`] rather than rejected.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::scoring::ProbabilityScore;

/// Default for absent free-text fields.
pub const DEFAULT_TEXT: &str = "N/A";

/// Default for an absent `haViajadoAntes` answer.
pub const DEFAULT_HAS_TRAVELED: &str = "No";

/// `strftime` pattern for `fechaCreacion`: ISO-8601, local time, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Lead form submission as received from the frontend.
///
/// Values are kept as raw JSON; the frontend's types are expectations only
/// (text, whole numbers, a list of text) and are never checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(rename = "emailContacto", default)]
    pub contact_email: Option<Value>,

    #[serde(rename = "numeroViajeros", default)]
    pub traveler_count: Option<Value>,

    #[serde(rename = "destinoInteres", default)]
    pub destination: Option<Value>,

    #[serde(rename = "fechasTentativas", default)]
    pub tentative_dates: Option<Value>,

    #[serde(rename = "duracionMaxDias", default)]
    pub max_duration_days: Option<Value>,

    #[serde(rename = "presupuestoMaxUsd", default)]
    pub max_budget_usd: Option<Value>,

    #[serde(rename = "tipoAlojamiento", default)]
    pub accommodation_type: Option<Value>,

    #[serde(rename = "interesesEspeciales", default)]
    pub special_interests: Option<Value>,

    /// Expected to be "Si" or "No".
    #[serde(rename = "haViajadoAntes", default)]
    pub has_traveled_before: Option<Value>,

    #[serde(rename = "frecuenciaViajeAnual", default)]
    pub annual_travel_frequency: Option<Value>,
}

impl LeadSubmission {
    /// Parse a request body into a submission.
    ///
    /// The body must be a JSON object. Unknown keys are ignored.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(Error::BodyNotObject {
                found: json_kind(&value),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Replace every absent field with its fixed default.
    pub fn into_details(self) -> LeadDetails {
        let text = || json!(DEFAULT_TEXT);
        let zero = || json!(0);

        LeadDetails {
            contact_email: self.contact_email.unwrap_or_else(text),
            traveler_count: self.traveler_count.unwrap_or_else(zero),
            destination: self.destination.unwrap_or_else(text),
            tentative_dates: self.tentative_dates.unwrap_or_else(text),
            max_duration_days: self.max_duration_days.unwrap_or_else(zero),
            max_budget_usd: self.max_budget_usd.unwrap_or_else(zero),
            accommodation_type: self.accommodation_type.unwrap_or_else(text),
            special_interests: self.special_interests.unwrap_or_else(|| json!([])),
            has_traveled_before: self
                .has_traveled_before
                .unwrap_or_else(|| json!(DEFAULT_HAS_TRAVELED)),
            annual_travel_frequency: self.annual_travel_frequency.unwrap_or_else(zero),
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Submission fields after defaulting; every value is present and none is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDetails {
    #[serde(rename = "emailContacto")]
    pub contact_email: Value,
    #[serde(rename = "numeroViajeros")]
    pub traveler_count: Value,
    #[serde(rename = "destinoInteres")]
    pub destination: Value,
    #[serde(rename = "fechasTentativas")]
    pub tentative_dates: Value,
    #[serde(rename = "duracionMaxDias")]
    pub max_duration_days: Value,
    #[serde(rename = "presupuestoMaxUsd")]
    pub max_budget_usd: Value,
    #[serde(rename = "tipoAlojamiento")]
    pub accommodation_type: Value,
    #[serde(rename = "interesesEspeciales")]
    pub special_interests: Value,
    #[serde(rename = "haViajadoAntes")]
    pub has_traveled_before: Value,
    #[serde(rename = "frecuenciaViajeAnual")]
    pub annual_travel_frequency: Value,
}

/// The persisted lead, keyed by `leadId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(rename = "leadId")]
    pub lead_id: String,

    #[serde(flatten)]
    pub details: LeadDetails,

    #[serde(rename = "probabilidadCompra")]
    pub purchase_probability: ProbabilityScore,

    /// Local timestamp formatted with [`TIMESTAMP_FORMAT`].
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
}

impl LeadRecord {
    pub fn new(
        details: LeadDetails,
        purchase_probability: ProbabilityScore,
        lead_id: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            lead_id: lead_id.into(),
            details,
            purchase_probability,
            created_at: created_at.into(),
        }
    }
}

/// Generate a new random (version 4) lead identifier.
pub fn new_lead_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current local time as used for `fechaCreacion`.
pub fn local_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn parses_full_submission() {
        let body = json!({
            "emailContacto": "ana@example.com",
            "numeroViajeros": 3,
            "destinoInteres": "Cusco",
            "fechasTentativas": "2025-07",
            "duracionMaxDias": 10,
            "presupuestoMaxUsd": 2500.5,
            "tipoAlojamiento": "Hotel",
            "interesesEspeciales": ["trekking", "gastronomia"],
            "haViajadoAntes": "Si",
            "frecuenciaViajeAnual": 2
        })
        .to_string();

        let submission = LeadSubmission::from_json(&body).unwrap();
        assert_eq!(submission.contact_email, Some(json!("ana@example.com")));
        assert_eq!(submission.traveler_count, Some(json!(3)));
        assert_eq!(submission.max_budget_usd, Some(json!(2500.5)));
        assert_eq!(
            submission.special_interests,
            Some(json!(["trekking", "gastronomia"]))
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let submission =
            LeadSubmission::from_json(r#"{"emailContacto":"a@b.com","numeroViajeros":2}"#)
                .unwrap();
        let details = submission.into_details();

        assert_eq!(details.contact_email, "a@b.com");
        assert_eq!(details.traveler_count, 2);
        assert_eq!(details.destination, "N/A");
        assert_eq!(details.tentative_dates, "N/A");
        assert_eq!(details.max_duration_days, 0);
        assert_eq!(details.max_budget_usd, 0);
        assert_eq!(details.accommodation_type, "N/A");
        assert_eq!(details.special_interests, json!([]));
        assert_eq!(details.has_traveled_before, "No");
        assert_eq!(details.annual_travel_frequency, 0);
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let submission =
            LeadSubmission::from_json(r#"{"destinoInteres":null,"interesesEspeciales":null}"#)
                .unwrap();
        let details = submission.into_details();
        assert_eq!(details.destination, DEFAULT_TEXT);
        assert_eq!(details.special_interests, json!([]));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let submission = LeadSubmission::from_json(r#"{"referido":"amigo"}"#).unwrap();
        assert_eq!(submission, LeadSubmission::default());
    }

    #[test]
    fn has_traveled_is_not_validated() {
        let details = LeadSubmission::from_json(r#"{"haViajadoAntes":"tal vez"}"#)
            .unwrap()
            .into_details();
        assert_eq!(details.has_traveled_before, "tal vez");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LeadSubmission::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::InvalidBody(_)));
    }

    #[test]
    fn rejects_non_object_body() {
        let err = LeadSubmission::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::BodyNotObject { found: "array" }));
    }

    #[test]
    fn values_keep_the_type_they_were_sent_with() {
        let details = LeadSubmission::from_json(
            r#"{"numeroViajeros":2.5,"duracionMaxDias":7.0,"presupuestoMaxUsd":"1500",
                "emailContacto":123,"interesesEspeciales":"playa","haViajadoAntes":true,
                "tipoAlojamiento":{"tipo":"cabana"}}"#,
        )
        .unwrap()
        .into_details();

        assert_eq!(details.traveler_count, json!(2.5));
        assert_eq!(details.max_duration_days, json!(7.0));
        assert_eq!(details.max_budget_usd, json!("1500"));
        assert_eq!(details.contact_email, json!(123));
        assert_eq!(details.special_interests, json!("playa"));
        assert_eq!(details.has_traveled_before, json!(true));
        assert_eq!(details.accommodation_type, json!({"tipo": "cabana"}));
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let details = LeadSubmission::default().into_details();
        let score = ProbabilityScore::try_from(42).unwrap();
        let record = LeadRecord::new(details, score, "lead-1", "2025-01-02T03:04:05.000006");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["leadId"], "lead-1");
        assert_eq!(value["probabilidadCompra"], 42);
        assert_eq!(value["fechaCreacion"], "2025-01-02T03:04:05.000006");
        assert_eq!(value["destinoInteres"], "N/A");
        assert_eq!(value["interesesEspeciales"], json!([]));
    }

    #[test]
    fn lead_ids_are_v4_uuids() {
        let first = new_lead_id();
        let second = new_lead_id();
        let parsed = Uuid::parse_str(&first).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(first, second);
    }

    #[test]
    fn timestamp_is_iso8601() {
        let stamp = local_timestamp();
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
        assert!(stamp.contains('T'));
    }
}
