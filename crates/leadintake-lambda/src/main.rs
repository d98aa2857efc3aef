//! AWS Lambda function for lead intake.

use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    leadintake_lambda::run().await
}
