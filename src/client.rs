use log::debug;
use reqwest::{Client, Method, header::CONTENT_TYPE};
use serde_json::Value;

use crate::Config;

mod error;
pub use error::ApiError;

const API_KEY_HEADER: &str = "WLT-Api-Key";

/// Stateless JSON transport for the Marble API. Every request carries the
/// API key header and a JSON content type.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Sends one request to `{base_url}/{path}` and decodes the JSON body.
    /// An empty success body decodes to an empty object. A non-success
    /// status fails with the status code and the raw body text.
    pub async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.config.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("request: {request:#?}");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                path: path.to_string(),
                status,
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&text)
            .map_err(|e| ApiError::MalformedResponse(format!("{path}: invalid JSON body: {e}")))
    }
}
