//! Cold-start initialization of the Lambda runtime state.
//!
//! Configuration and the DynamoDB client are resolved once per container and
//! handed to the handler explicitly; nothing is kept in a global.
//!
//! # Cold-Start Performance
//!
//! The runtime logs timing during initialization:
//!
//! - `config_load_ms`: Time to resolve the AWS SDK configuration chain
//! - `total_init_ms`: Total initialization time

use std::time::Instant;

use aws_config::{BehaviorVersion, SdkConfig};
use tracing::info;

use crate::config::RuntimeConfig;
use crate::dynamo::DynamoLeadStore;

/// Initialized runtime state shared by every invocation of a container.
#[derive(Debug, Clone)]
pub struct LambdaRuntime {
    store: DynamoLeadStore,
}

impl LambdaRuntime {
    /// Build the store for `config.table_name` from a loaded SDK configuration.
    pub fn from_sdk_config(config: &RuntimeConfig, sdk_config: &SdkConfig) -> Self {
        let client = aws_sdk_dynamodb::Client::new(sdk_config);
        Self {
            store: DynamoLeadStore::new(client, config.table_name.clone()),
        }
    }

    /// Consume the runtime, keeping only the store.
    pub fn into_store(self) -> DynamoLeadStore {
        self.store
    }
}

/// Resolve configuration from the environment and build the DynamoDB client.
pub async fn init_runtime() -> LambdaRuntime {
    init_runtime_with(RuntimeConfig::from_env()).await
}

/// Build the runtime from an already resolved configuration.
pub async fn init_runtime_with(config: RuntimeConfig) -> LambdaRuntime {
    let total_start = Instant::now();

    info!(table_name = %config.table_name, "initializing Lambda runtime");

    let config_start = Instant::now();
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let config_load_ms = config_start.elapsed().as_millis();

    let runtime = LambdaRuntime::from_sdk_config(&config, &sdk_config);

    info!(
        total_init_ms = total_start.elapsed().as_millis(),
        config_load_ms = config_load_ms,
        region = ?sdk_config.region(),
        "Lambda runtime initialization complete"
    );

    runtime
}
