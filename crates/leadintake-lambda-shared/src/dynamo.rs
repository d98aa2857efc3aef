//! DynamoDB-backed [`LeadStore`].

use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;

use leadintake_lib::{Error as LibError, LeadRecord, LeadStore, Result as LibResult};

/// Writes lead records with a single unconditional `PutItem`.
#[derive(Debug, Clone)]
pub struct DynamoLeadStore {
    client: Client,
    table_name: String,
}

impl DynamoLeadStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl LeadStore for DynamoLeadStore {
    async fn put_lead(&self, record: &LeadRecord) -> LibResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|err| LibError::Store {
                lead_id: record.lead_id.clone(),
                message: DisplayErrorContext(&err).to_string(),
            })?;
        Ok(())
    }
}

/// Map a record onto DynamoDB attributes.
///
/// Submitted values are written as sent, converted by JSON kind through
/// [`json_to_attribute`].
pub fn record_to_item(record: &LeadRecord) -> HashMap<String, AttributeValue> {
    let details = &record.details;

    HashMap::from([
        ("leadId".to_string(), AttributeValue::S(record.lead_id.clone())),
        ("emailContacto".to_string(), json_to_attribute(&details.contact_email)),
        ("numeroViajeros".to_string(), json_to_attribute(&details.traveler_count)),
        ("destinoInteres".to_string(), json_to_attribute(&details.destination)),
        ("fechasTentativas".to_string(), json_to_attribute(&details.tentative_dates)),
        ("duracionMaxDias".to_string(), json_to_attribute(&details.max_duration_days)),
        ("presupuestoMaxUsd".to_string(), json_to_attribute(&details.max_budget_usd)),
        ("tipoAlojamiento".to_string(), json_to_attribute(&details.accommodation_type)),
        (
            "interesesEspeciales".to_string(),
            json_to_attribute(&details.special_interests),
        ),
        ("haViajadoAntes".to_string(), json_to_attribute(&details.has_traveled_before)),
        (
            "frecuenciaViajeAnual".to_string(),
            json_to_attribute(&details.annual_travel_frequency),
        ),
        (
            "probabilidadCompra".to_string(),
            AttributeValue::N(record.purchase_probability.to_string()),
        ),
        ("fechaCreacion".to_string(), AttributeValue::S(record.created_at.clone())),
    ])
}

/// Convert a JSON value to the matching DynamoDB attribute type.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, item)| (key.clone(), json_to_attribute(item)))
                .collect(),
        ),
    }
}
