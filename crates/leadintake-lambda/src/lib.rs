//! AWS Lambda function capturing travel leads.
//!
//! Each invocation receives one API Gateway proxy event. A CORS preflight is
//! answered immediately; any other request is parsed, scored, stored in
//! DynamoDB, and classified. Every failure surfaces as a 500 response.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use leadintake_lambda_shared::{init_runtime, init_tracing, ProxyEvent, ProxyResponse};
use leadintake_lib::{LeadIntake, LeadStore, ScoreSource, ThreadRngScore};

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    let runtime = init_runtime().await;
    let intake = LeadIntake::new(runtime.into_store(), ThreadRngScore);

    lambda_runtime::run(service_fn(|event| handler(&intake, event))).await
}

/// Lambda handler invoked per request.
///
/// Request-level failures never become an `Err`; they are reported to the
/// caller as a 500 [`ProxyResponse`].
pub async fn handler<S, R>(
    intake: &LeadIntake<S, R>,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, Error>
where
    S: LeadStore,
    R: ScoreSource,
{
    let request_id = event.context.request_id.clone();
    Ok(handle_proxy_event(intake, event.payload, &request_id).await)
}

/// Core handler logic separated for reuse in tests.
async fn handle_proxy_event<S, R>(
    intake: &LeadIntake<S, R>,
    payload: Value,
    request_id: &str,
) -> ProxyResponse
where
    S: LeadStore,
    R: ScoreSource,
{
    let event: ProxyEvent = match serde_json::from_value(payload) {
        Ok(event) => event,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to parse proxy event");
            return ProxyResponse::internal_error(&e);
        }
    };

    info!(
        request_id = %request_id,
        gateway_request_id = ?event.gateway_request_id(),
        method = ?event.http_method,
        "handling lead request"
    );

    if event.is_preflight() {
        return ProxyResponse::preflight();
    }

    let receipt = match intake.submit(event.body_or_empty()).await {
        Ok(receipt) => receipt,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "error processing lead");
            return ProxyResponse::internal_error(&e);
        }
    };

    info!(
        request_id = %request_id,
        lead_id = %receipt.lead_id,
        probability = receipt.probability.value(),
        classification = %receipt.classification,
        "lead processed successfully"
    );

    match ProxyResponse::accepted(&receipt) {
        Ok(response) => response,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to serialize response");
            ProxyResponse::internal_error(&e)
        }
    }
}
