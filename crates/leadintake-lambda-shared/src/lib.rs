//! Shared infrastructure for the lead intake AWS Lambda function.
//!
//! - [`ProxyEvent`] / [`ProxyResponse`]: API Gateway proxy shapes with CORS headers
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//! - [`RuntimeConfig`]: table name resolved from the environment
//! - [`init_runtime`]: cold-start construction of the [`DynamoLeadStore`]
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides deterministic score sources, failing
//! stores, and event builders. Enable the `test-utils` feature to access it
//! from dependent crates.

#![deny(warnings)]

mod config;
mod dynamo;
mod requests;
mod response;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{RuntimeConfig, DEFAULT_TABLE_NAME, TABLE_NAME_ENV};
pub use dynamo::{json_to_attribute, record_to_item, DynamoLeadStore};
pub use requests::{ProxyEvent, RequestContext, EMPTY_BODY, PREFLIGHT_METHOD};
pub use response::{
    cors_headers, ErrorBody, LeadAccepted, ProxyResponse, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS,
    INTERNAL_ERROR_PREFIX, LEAD_ACCEPTED_MESSAGE,
};
pub use runtime::{init_runtime, init_runtime_with, LambdaRuntime};
pub use tracing_init::{init_tracing, DEFAULT_LOG_FILTER};
