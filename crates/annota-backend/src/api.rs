//! Client for the annotation API server.
//!
//! Every endpoint path is resolved against the single configured base URL,
//! and every authenticated request carries `Authorization: Bearer <token>`
//! when (and only when) a non-empty token exists. There is no retry logic
//! and no caching: each call is a single HTTP request whose failure surfaces
//! as an error to the calling service.

use std::path::Path;

use annota_bridge::article::{Article, ArticleDraft, ArticlePage, AudioAsset, Credentials, Profile, Speaker};
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Errors that can occur while talking to the API server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL does not parse.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    /// The HTTP request failed, or the response body did not match the
    /// expected shape.
    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    /// Reading a local audio file for upload failed.
    #[error("failed to read audio file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Wire shape of the authenticate response. The server omits `access_token`
/// entirely when the credentials are rejected.
#[derive(Debug, Default, Deserialize)]
struct AuthenticateResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Builds request headers carrying the bearer token.
///
/// Returns an empty header map when no token (or an empty token) is present,
/// so unauthenticated requests stay untouched.
pub fn bearer_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(token) = token.filter(|token| !token.is_empty())
        && let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}"))
    {
        headers.insert(AUTHORIZATION, value);
    }
    headers
}

/// Client for the annotation API, sharing one pooled HTTP client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|error| ApiError::InvalidBaseUrl(error.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Resolves an absolute endpoint path against the configured base URL.
    fn endpoint(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("failed to resolve endpoint path against base URL")
    }

    /// The playback URL for an uploaded audio file.
    pub fn storage_url(&self, filename: &str) -> Url {
        self.endpoint(&format!("/api/storage/{filename}"))
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// Returns `Ok(None)` when the server answered without a usable
    /// `access_token` field; the caller treats that the same way as a
    /// transport error.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Option<String>, ApiError> {
        let response: AuthenticateResponse = self
            .http
            .post(self.endpoint("/api/authenticate"))
            .json(credentials)
            .send()
            .await?
            .json()
            .await?;
        Ok(response.access_token.filter(|token| !token.is_empty()))
    }

    pub async fn fetch_speakers(&self) -> Result<Vec<Speaker>, ApiError> {
        let speakers = self
            .http
            .get(self.endpoint("/api/speakers"))
            .send()
            .await?
            .json()
            .await?;
        Ok(speakers)
    }

    /// Fetches one page of the article listing (1-based).
    pub async fn fetch_articles_page(&self, page: u64) -> Result<ArticlePage, ApiError> {
        let mut url = self.endpoint("/api/articles");
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());

        let listing = self.http.get(url).send().await?.json().await?;
        Ok(listing)
    }

    pub async fn fetch_article(&self, id: u64) -> Result<Article, ApiError> {
        let article = self
            .http
            .get(self.endpoint(&format!("/api/articles/{id}")))
            .send()
            .await?
            .json()
            .await?;
        Ok(article)
    }

    pub async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile, ApiError> {
        let profile = self
            .http
            .get(self.endpoint("/api/profile"))
            .headers(bearer_headers(token))
            .send()
            .await?
            .json()
            .await?;
        Ok(profile)
    }

    /// Submits the draft: create when `id` is `None`, update otherwise. The
    /// response body is not inspected; completing the request is all the
    /// caller acts on.
    pub async fn save_article(
        &self,
        id: Option<u64>,
        draft: &ArticleDraft,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = match id {
            Some(id) => self.endpoint(&format!("/api/articles/{id}/update")),
            None => self.endpoint("/api/articles"),
        };

        let response = self
            .http
            .post(url)
            .headers(bearer_headers(token))
            .json(draft)
            .send()
            .await?;
        log::debug!("Article save responded with status {}", response.status());
        Ok(())
    }

    /// Uploads the audio file at `path` as a multipart form and returns the
    /// created asset.
    pub async fn upload_audio(&self, path: &Path, token: Option<&str>) -> Result<AudioAsset, ApiError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let bytes = tokio::fs::read(path).await?;

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let asset = self
            .http
            .post(self.endpoint("/api/audio"))
            .headers(bearer_headers(token))
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: the bearer header is attached exactly when a non-empty token
    /// exists.
    #[test]
    fn test_bearer_headers() {
        assert!(bearer_headers(None).is_empty());
        assert!(bearer_headers(Some("")).is_empty());

        let headers = bearer_headers(Some("abc"));
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    /// Test: endpoint paths resolve against the base URL regardless of a
    /// trailing slash.
    #[test]
    fn test_endpoint_resolution() {
        let client = ApiClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            client.endpoint("/api/authenticate").as_str(),
            "http://127.0.0.1:8000/api/authenticate"
        );

        let client = ApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            client.endpoint("/api/speakers").as_str(),
            "http://127.0.0.1:8000/api/speakers"
        );
    }

    /// Test: playback URLs point at the storage endpoint for the uploaded
    /// filename.
    #[test]
    fn test_storage_url() {
        let client = ApiClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            client.storage_url("sample-7.wav").as_str(),
            "http://127.0.0.1:8000/api/storage/sample-7.wav"
        );
    }

    /// Test: a rejected login parses to no token, and a blank token is not
    /// treated as a login.
    #[test]
    fn test_authenticate_response_shapes() {
        let rejected: AuthenticateResponse = serde_json::from_str(r#"{"ok": false}"#).unwrap();
        assert_eq!(rejected.access_token, None);

        let accepted: AuthenticateResponse =
            serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(accepted.access_token.as_deref(), Some("abc"));

        let blank: AuthenticateResponse =
            serde_json::from_str(r#"{"access_token": ""}"#).unwrap();
        assert_eq!(blank.access_token.filter(|token| !token.is_empty()), None);
    }

    /// Test: an invalid base URL is reported instead of panicking later.
    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
