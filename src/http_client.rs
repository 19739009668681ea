//! HTTP plumbing shared by the adapter operations.
//!
//! Thin wrapper over `reqwest` that applies the crate's timeout and
//! User-Agent, maps status codes to the error taxonomy, and deserializes
//! JSON bodies. Each call is a single round trip.

use crate::error::{GiphyError, GiphyResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "giphy-client/0.1";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> GiphyResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                GiphyError::TransportError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Make a GET request and deserialize the JSON response body.
    pub async fn get<T>(&self, url: &str) -> GiphyResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        handle_response_status(response.status())?;

        let response_text = response.text().await.map_err(|e| {
            GiphyError::TransportError(format!("Failed to read Giphy response: {}", e))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            GiphyError::ResponseFormatError(format!(
                "Failed to parse Giphy response: {}. Response: {}",
                e,
                if response_text.len() > 200 {
                    format!("{}...", &response_text[..200])
                } else {
                    response_text
                }
            ))
        })
    }
}

/// Map HTTP status codes to the error taxonomy consistently.
pub fn handle_response_status(status: StatusCode) -> GiphyResult<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GiphyError::AuthError(
            "Giphy rejected the API key".to_string(),
        )),
        StatusCode::NOT_FOUND => Err(GiphyError::NotFound("Resource not found".to_string())),
        StatusCode::BAD_REQUEST => Err(GiphyError::ApiError(
            "Bad request to Giphy API".to_string(),
        )),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::BAD_GATEWAY
        | StatusCode::GATEWAY_TIMEOUT => {
            Err(GiphyError::ApiError("Giphy service unavailable".to_string()))
        }
        _ => Err(GiphyError::ApiError(format!(
            "Unexpected status code from Giphy: {}",
            status
        ))),
    }
}
