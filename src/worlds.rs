//! World generation against the Marble API: submit a prompt, poll the
//! resulting operation until it reports done, fetch the finished world.

use std::time::Duration;

use log::info;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::time::sleep;

use crate::{ApiClient, ApiError, MARBLE_MODEL};

/// Poll cadence and total wait budget for [`poll_until_done`].
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: Duration::from_secs(600),
        }
    }
}

/// One observed snapshot of a server-side operation. `response` is only
/// present once the operation is done and stays opaque apart from the
/// world id.
#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub done: bool,
    pub response: Option<Value>,
}

impl Operation {
    /// The generated world's id, available once the operation is done.
    pub fn world_id(&self) -> Result<&str, ApiError> {
        self.response
            .as_ref()
            .and_then(|r| r.get("world_id"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ApiError::MalformedResponse("operation response has no `world_id`".into())
            })
    }
}

fn generation_request_body(prompt: &str) -> Value {
    json!({
        "world_prompt": {
            "type": "text",
            "text_prompt": prompt,
            "is_pano": true,
        },
        "model": MARBLE_MODEL,
    })
}

/// Submits a text-to-world generation request and returns the operation id.
pub async fn generate_world(client: &ApiClient, prompt: &str) -> Result<String, ApiError> {
    if prompt.is_empty() {
        return Err(ApiError::InvalidInput("prompt must not be empty".into()));
    }

    let resp = client
        .send(
            "worlds:generate",
            Method::POST,
            Some(&generation_request_body(prompt)),
        )
        .await?;

    resp.get("operation_id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            ApiError::MalformedResponse("generate response has no `operation_id`".into())
        })
}

/// Polls an operation at a fixed interval until it reports done, logging a
/// progress line for every pending observation.
///
/// Elapsed time counts only the sleeps between polls, not request latency,
/// so at most `ceil(timeout / interval)` polls are made and wall-clock time
/// can exceed the nominal timeout by the cumulative poll latency.
pub async fn poll_until_done(
    client: &ApiClient,
    operation_id: &str,
    options: PollOptions,
) -> Result<Operation, ApiError> {
    let mut elapsed = Duration::ZERO;
    while elapsed < options.timeout {
        let resp = client
            .send(&format!("operations/{operation_id}"), Method::GET, None)
            .await?;
        let op: Operation = serde_json::from_value(resp)
            .map_err(|e| ApiError::MalformedResponse(format!("operations/{operation_id}: {e}")))?;
        if op.done {
            return Ok(op);
        }

        info!(
            "Operation {operation_id} still processing... ({}s)",
            elapsed.as_secs()
        );
        sleep(options.interval).await;
        elapsed += options.interval;
    }

    Err(ApiError::OperationTimeout {
        operation_id: operation_id.to_string(),
        elapsed,
    })
}

/// Fetches a generated world record verbatim, no schema imposed.
pub async fn fetch_world(client: &ApiClient, world_id: &str) -> Result<Value, ApiError> {
    client
        .send(&format!("worlds/{world_id}"), Method::GET, None)
        .await
}
