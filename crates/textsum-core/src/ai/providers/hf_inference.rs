use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Proxy, Response};
use serde::Serialize;
use std::time::Duration;
use url::{Host, Url};

use super::InferenceProvider;
use crate::ai::Prompt;
use crate::config::{ApiToken, AppConfig};
use crate::{Error, Result};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Request body of the hosted summarization task
#[derive(Debug, Serialize)]
pub struct SummarizationRequest<'a> {
    pub inputs: &'a str,
}

/// Hugging Face inference endpoint provider
pub struct HfInferenceProvider {
    client: Client,
    endpoint: Url,
    api_token: ApiToken,
    timeout: Duration,
}

impl HfInferenceProvider {
    /// Create a provider from configuration; fails if no token is configured
    pub fn new(config: &AppConfig) -> Result<Self> {
        let endpoint = config.api.endpoint_url()?;
        let api_token = config.api_token()?.clone();
        let timeout = Duration::from_secs(config.api.request_timeout_secs.max(1));
        let connect_timeout = Duration::from_secs(config.api.connect_timeout_secs.max(1));

        let client = Self::build_client(timeout, connect_timeout, &config.api.proxy_url, &endpoint)?;

        Ok(Self {
            client,
            endpoint,
            api_token,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build HTTP client with deadlines and optional proxy
    fn build_client(
        timeout: Duration,
        connect_timeout: Duration,
        proxy_url: &Option<String>,
        endpoint: &Url,
    ) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!("textsum/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .deflate(true)
            .brotli(true);

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for inference requests");
        } else if is_loopback(endpoint) {
            // A local inference server must not be routed through a system proxy
            builder = builder.no_proxy();
        }

        builder
            .build()
            .map_err(|e| Error::RequestConstruction(format!("HTTP client: {}", e)))
    }

    fn request_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Transport(err)
        }
    }

    /// Read the full body of a failed response so it can be shown to the user;
    /// an unreadable body becomes a marker and the status is still reported
    async fn failure_body(response: Response) -> String {
        match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read error response body");
                format!("<unreadable body: {e}>")
            }
        }
    }
}

#[async_trait::async_trait]
impl InferenceProvider for HfInferenceProvider {
    fn name(&self) -> &str {
        "hf-inference"
    }

    async fn send(&self, prompt: &Prompt) -> Result<Bytes> {
        let body = serde_json::to_vec(&SummarizationRequest {
            inputs: prompt.as_str(),
        })
        .map_err(|e| Error::RequestConstruction(e.to_string()))?;

        let request = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_token.expose())
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(body)
            .build()
            .map_err(|e| Error::RequestConstruction(e.to_string()))?;

        tracing::info!(
            endpoint = %self.endpoint,
            prompt_bytes = prompt.len(),
            "Sending summarization request"
        );

        // The response owns the connection; every return below drops it.
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let body = Self::failure_body(response).await;
            return Err(Error::NonSuccessStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.bytes().await.map_err(|e| self.request_error(e))
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token() -> AppConfig {
        let mut config = AppConfig::default();
        config.api.api_token = Some(ApiToken::new("hf_test"));
        config
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SummarizationRequest {
            inputs: "Resume esto:\n\n\"quoted\" text",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "inputs": "Resume esto:\n\n\"quoted\" text" }));
    }

    #[test]
    fn test_new_requires_token() {
        let err = HfInferenceProvider::new(&AppConfig::default()).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_new_uses_configured_endpoint() {
        let mut config = config_with_token();
        config.api.model = "sshleifer/distilbart-cnn-12-6".to_string();
        let provider = HfInferenceProvider::new(&config).unwrap();
        assert_eq!(
            provider.endpoint().as_str(),
            "https://router.huggingface.co/hf-inference/models/sshleifer/distilbart-cnn-12-6"
        );
    }

    #[test]
    fn test_invalid_proxy_is_config_error() {
        let mut config = config_with_token();
        config.api.proxy_url = Some("::not a proxy::".to_string());
        let err = HfInferenceProvider::new(&config).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_is_loopback() {
        assert!(is_loopback(&Url::parse("http://127.0.0.1:9000/x").unwrap()));
        assert!(is_loopback(&Url::parse("http://localhost/x").unwrap()));
        assert!(is_loopback(&Url::parse("http://[::1]:8080/").unwrap()));
        assert!(!is_loopback(&Url::parse("https://router.huggingface.co/").unwrap()));
    }
}
