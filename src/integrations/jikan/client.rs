// src/integrations/jikan/client.rs
//
// Typed HTTP client for the Jikan metadata API.
//
// This is infrastructure, not domain: it builds request URLs, performs the
// fetch, and decodes the body. Retries are a caller policy; none happen
// here.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Path of the anime listing endpoint under the API base
pub const ANIME_PATH: &str = "/anime";

pub struct JikanClient {
    base_url: String,
    http_client: Client,
}

impl JikanClient {
    /// Create a client against the given API base URL.
    ///
    /// Every request carries the timeout; expiry surfaces as a network
    /// failure like any other transport error.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Build an endpoint URL from the configured base, a path suffix, and
    /// query parameters.
    ///
    /// Fails with `InvalidUrl` unless the base is an absolute URL with both
    /// scheme and host.
    pub fn build_query_url(&self, path: &str, params: &[(&str, String)]) -> ApiResult<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        if base.host_str().is_none() {
            return Err(ApiError::InvalidUrl(format!(
                "{}: missing host",
                self.base_url
            )));
        }

        let mut url = base;
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Fetch and decode a JSON response.
    ///
    /// Any transport error or non-2xx status is a `NetworkFailure`; a body
    /// that does not match the expected schema is a `DecodeFailure`.
    pub async fn fetch<T>(&self, url: Url) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(url = %url, "Fetching from metadata API");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::NetworkFailure(format!(
                "metadata API returned status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkFailure(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode metadata API response");
            ApiError::DecodeFailure(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> JikanClient {
        JikanClient::new(base, Duration::from_secs(5))
    }

    #[test]
    fn test_build_query_url_with_params() {
        let client = client("https://api.jikan.moe/v4");
        let url = client
            .build_query_url(ANIME_PATH, &[("q", "naruto".to_string()), ("limit", "10".to_string())])
            .unwrap();

        assert_eq!(url.as_str(), "https://api.jikan.moe/v4/anime?q=naruto&limit=10");
    }

    #[test]
    fn test_build_query_url_without_params() {
        let client = client("https://api.jikan.moe/v4");
        let url = client.build_query_url(ANIME_PATH, &[]).unwrap();

        assert_eq!(url.as_str(), "https://api.jikan.moe/v4/anime");
    }

    #[test]
    fn test_build_query_url_rejects_unparseable_base() {
        let client = client("not a url");

        let err = client.build_query_url(ANIME_PATH, &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_query_url_rejects_base_without_scheme() {
        let client = client("api.jikan.moe/v4");

        let err = client.build_query_url(ANIME_PATH, &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_query_url_rejects_base_without_host() {
        let client = client("mailto:someone@example.com");

        let err = client.build_query_url(ANIME_PATH, &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let client = client("https://api.jikan.moe/v4");
        let url = client
            .build_query_url(ANIME_PATH, &[("q", "fullmetal alchemist".to_string())])
            .unwrap();

        assert!(url.as_str().contains("q=fullmetal+alchemist"));
    }
}
