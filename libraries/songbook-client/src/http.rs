//! Thin HTTP access layer: one request per call against a fixed base URL.

use crate::error::{Result, ServerClientError};
use bytes::Bytes;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Request body for `post`/`put`.
#[derive(Debug)]
pub enum Body {
    /// Serialized as `application/json`
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`
    Multipart(Form),
}

impl Body {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ServerClientError::ParseError(e.to_string()))
    }
}

/// HTTP wrapper with a fixed base URL and optional bearer token per call.
///
/// All four verbs share one contract: the decoded body on a 2xx response,
/// otherwise a [`ServerClientError`]. Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: Client,
    base_url: String,
}

impl HttpApi {
    /// Wrap `http` with a base URL. Trailing slashes are removed.
    pub fn new(http: Client, base_url: &str) -> Result<Self> {
        if base_url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !is_absolute(&base_url) {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ServerClientError::InvalidUrl(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs pass through; paths are appended to the base URL.
    pub fn resolve(&self, url: &str) -> String {
        if is_absolute(url) {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str, token: Option<&str>) -> Result<T> {
        let response = self.send(Method::GET, url, None, token).await?;
        decode(response).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Body,
        token: Option<&str>,
    ) -> Result<T> {
        let response = self.send(Method::POST, url, Some(body), token).await?;
        decode(response).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Body,
        token: Option<&str>,
    ) -> Result<T> {
        let response = self.send(Method::PUT, url, Some(body), token).await?;
        decode(response).await
    }

    pub async fn del<T: DeserializeOwned>(&self, url: &str, token: Option<&str>) -> Result<T> {
        let response = self.send(Method::DELETE, url, None, token).await?;
        decode(response).await
    }

    /// GET returning the raw body (binary assets such as thumbnails).
    pub async fn get_bytes(&self, url: &str, token: Option<&str>) -> Result<Bytes> {
        let response = self.send(Method::GET, url, None, token).await?;
        response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read response body");
            ServerClientError::Network(e)
        })
    }

    /// Issue the request and reject non-success statuses.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Body>,
        token: Option<&str>,
    ) -> Result<Response> {
        let response = self.execute(method, url, body, token).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        debug!(status = %status, "Request rejected");
        Err(ServerClientError::ServerError {
            status: status.as_u16(),
            message: server_message(&error_text),
        })
    }

    /// Issue the request and hand back the response whatever its status.
    ///
    /// Only transport failures are errors here.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Body>,
        token: Option<&str>,
    ) -> Result<Response> {
        let url = self.resolve(url);
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.http.request(method.clone(), &url);
        request = authorize(request, token);
        request = match body {
            Some(Body::Json(value)) => request.json(&value),
            Some(Body::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "{} error", method);
            ServerClientError::Network(e)
        })?;

        debug!(status = %response.status(), url = %url, "Response received");
        Ok(response)
    }
}

/// Attach `Authorization: Bearer` only for a non-empty token.
fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await.map_err(|e| {
        warn!(error = %e, "Failed to read response body");
        ServerClientError::Network(e)
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Failed to parse response");
        ServerClientError::ParseError(format!("Failed to parse response: {e}"))
    })
}

/// Prefer the JSON `message` field of an error body, else the raw text.
pub(crate) fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(Client::new(), base).expect("valid url")
    }

    #[test]
    fn test_url_validation() {
        assert!(HttpApi::new(Client::new(), "https://example.com").is_ok());
        assert!(HttpApi::new(Client::new(), "http://localhost:8080").is_ok());

        assert!(HttpApi::new(Client::new(), "").is_err());
        assert!(HttpApi::new(Client::new(), "not-a-url").is_err());
        assert!(HttpApi::new(Client::new(), "ftp://example.com").is_err());
    }

    #[test]
    fn resolve_keeps_base_path() {
        let api = api("https://host.example/ukl2/");
        assert_eq!(api.base_url(), "https://host.example/ukl2");
        assert_eq!(api.resolve("/playlists"), "https://host.example/ukl2/playlists");
        assert_eq!(api.resolve("playlists"), "https://host.example/ukl2/playlists");
        assert_eq!(
            api.resolve("https://other.example/x"),
            "https://other.example/x"
        );
    }

    #[test]
    fn server_message_prefers_json_field() {
        assert_eq!(server_message(r#"{"success":false,"message":"dup"}"#), "dup");
        assert_eq!(server_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(server_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }
}
