use lambda_runtime::{service_fn, tracing, Error};

use crate::handler::function_handler;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let func = service_fn(function_handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
