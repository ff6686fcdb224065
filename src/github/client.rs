use crate::error::{FetchError, GhpeekError, Result};
use crate::github::transport::{RawResponse, Transport};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    /// Every read is sent exactly once; octocrab's retry layer is disabled.
    pub fn new(api_base_url: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(api_base_url)
            .map_err(|e| GhpeekError::GitHub(e.to_string()))?
            .build()
            .map_err(|e| GhpeekError::GitHub(e.to_string()))?;

        Ok(Self { octo })
    }
}

impl Transport for GitHubClient {
    async fn get(&self, path: &str) -> std::result::Result<RawResponse, FetchError> {
        let response = self
            .octo
            ._get(path)
            .await
            .map_err(|e| FetchError::TransportFailure(e.to_string()))?;

        let status = response.status().as_u16();
        let body = self
            .octo
            .body_to_string(response)
            .await
            .map_err(|e| FetchError::TransportFailure(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
