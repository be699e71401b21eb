use std::collections::BTreeMap;

use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;
use serde_json::{json, Value};

const SUCCESS_MESSAGE: &str = "Order processed successfully!";

const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// API Gateway proxy response returned for every accepted order event.
///
/// Header names keep their casing, which an `http::HeaderMap` would not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl OrderResponse {
    fn processed() -> Self {
        let headers = RESPONSE_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self {
            status_code: 200,
            headers,
            body: json!({ "message": SUCCESS_MESSAGE }).to_string(),
        }
    }
}

/// Logs the event and acknowledges it. The event content is never inspected.
///
/// Fails only when `event` cannot be rendered as JSON; nothing is logged then.
pub(crate) fn handle_order<E>(event: &E) -> Result<OrderResponse, Error>
where
    E: Serialize + ?Sized,
{
    let payload = serde_json::to_string(event)?;
    tracing::info!("Event received: {payload}");

    Ok(OrderResponse::processed())
}

pub(crate) async fn function_handler(event: LambdaEvent<Value>) -> Result<OrderResponse, Error> {
    handle_order(&event.payload)
}
