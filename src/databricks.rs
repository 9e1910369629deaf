use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("prompt is missing or empty")]
    MissingPrompt,
    #[error("downstream request failed: {0}")]
    DownstreamUnavailable(String),
    #[error("downstream returned no data")]
    EmptyDownstreamResponse,
}

/// Client for a Databricks model serving endpoint.
#[derive(Clone)]
pub struct DatabricksClient {
    http: reqwest::Client,
    endpoint_url: String,
    token: String,
    request_timeout: Duration,
}

impl DatabricksClient {
    pub fn new(endpoint_url: impl Into<String>, token: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
            token: token.into(),
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Forward a prompt to the serving endpoint and return its JSON reply
    /// verbatim. Exactly one outbound call is made per invocation; failures
    /// are never retried.
    pub async fn forward(&self, prompt: &str) -> Result<Value, ForwardError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            warn!("received request with no prompt");
            return Err(ForwardError::MissingPrompt);
        }

        let payload = query_payload(prompt);

        info!(%prompt, "sending request to Databricks");

        let fut = self
            .http
            .post(&self.endpoint_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send();

        let response = match timeout(self.request_timeout, fut).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                error!(%err, "error posting query to Databricks");
                return Err(ForwardError::DownstreamUnavailable(err.to_string()));
            }
            Err(_) => {
                error!(timeout = ?self.request_timeout, "Databricks request timed out");
                return Err(ForwardError::DownstreamUnavailable(
                    "request timed out".to_string(),
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(%status, "Databricks endpoint returned an error status");
            return Err(ForwardError::DownstreamUnavailable(format!(
                "endpoint returned {status}"
            )));
        }

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(err) => {
                error!(%err, "failed to parse Databricks response body");
                return Err(ForwardError::DownstreamUnavailable(err.to_string()));
            }
        };

        info!(response = %data, "Databricks endpoint replied");

        if is_empty_payload(&data) {
            warn!("Databricks endpoint returned no data");
            return Err(ForwardError::EmptyDownstreamResponse);
        }

        Ok(data)
    }
}

fn query_payload(prompt: &str) -> Value {
    json!({ "inputs": { "query": prompt } })
}

// The original backend treats any falsy parsed body as "no data".
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
