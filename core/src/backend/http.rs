//! HTTP implementation of the research backend client

use super::ResearchBackend;
use crate::config::BackendConfig;
use crate::error::{BackendError, ConfigError, Result};
use crate::mission::types::{MissionResults, MissionStatus, StartedMission};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;

/// HTTP client for the research backend
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client from a full configuration (timeout, extra headers)
    pub fn new(config: &BackendConfig) -> Result<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ConfigError::InvalidValue {
                    field: "headers".to_string(),
                    value: name.clone(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidValue {
                field: "headers".to_string(),
                value: value.clone(),
            })?;
            default_headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(default_headers)
            .build()
            .map_err(|e| BackendError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// Create a client with default settings for the given base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Map a non-success response to `RequestFailed`, carrying the body text
    /// as the server-supplied detail when one is available.
    async fn check(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed { status, message }.into());
        }
        Ok(response)
    }
}

#[derive(Debug, Serialize)]
struct StartResearchRequest<'a> {
    topic: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

#[async_trait]
impl ResearchBackend for HttpBackend {
    async fn health(&self) -> Result<()> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(|e| BackendError::Network {
                message: e.to_string(),
            })?;

        Self::check(response).await?;
        Ok(())
    }

    async fn start_research(
        &self,
        topic: &str,
        user_id: Option<&str>,
    ) -> Result<StartedMission> {
        let request = StartResearchRequest { topic, user_id };

        let response = self
            .client
            .post(self.endpoint("start-research"))
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Network {
                message: e.to_string(),
            })?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| {
                BackendError::Network {
                    message: format!("Failed to parse response: {}", e),
                }
                .into()
            })
    }

    async fn fetch_status(&self, session_id: &str) -> Result<MissionStatus> {
        let response = self
            .client
            .get(self.endpoint(&format!("research-status/{}", session_id)))
            .send()
            .await
            .map_err(|e| BackendError::Network {
                message: e.to_string(),
            })?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| {
                BackendError::Network {
                    message: format!("Failed to parse response: {}", e),
                }
                .into()
            })
    }

    async fn fetch_results(&self, session_id: &str) -> Result<MissionResults> {
        let response = self
            .client
            .get(self.endpoint(&format!("research-results/{}", session_id)))
            .send()
            .await
            .map_err(|e| BackendError::Network {
                message: e.to_string(),
            })?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| {
                BackendError::Network {
                    message: format!("Failed to parse response: {}", e),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn endpoints_join_cleanly_with_trailing_slash() {
        let backend = HttpBackend::with_base_url("http://localhost:8000/");
        assert_eq!(backend.endpoint("health"), "http://localhost:8000/api/health");
        assert_eq!(
            backend.endpoint("research-status/abc123"),
            "http://localhost:8000/api/research-status/abc123"
        );
    }

    #[test]
    fn invalid_extra_header_is_a_config_error() {
        let mut headers = HashMap::new();
        headers.insert("bad header name".to_string(), "value".to_string());
        let config = BackendConfig::new("http://localhost:8000").with_headers(headers);
        assert!(HttpBackend::new(&config).is_err());
    }

    #[test]
    fn config_is_validated_on_construction() {
        let config = BackendConfig::new("not-a-url");
        assert!(HttpBackend::new(&config).is_err());
    }

    #[test]
    fn start_request_omits_absent_user_id() {
        let request = StartResearchRequest {
            topic: "coffee market Brazil",
            user_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"topic":"coffee market Brazil"}"#);
    }
}
