//! Thumbnail asset access.

use crate::error::Result;
use crate::http::HttpApi;
use bytes::Bytes;
use tracing::debug;

/// Client for `/thumbnail/{file}` assets.
pub struct ThumbnailClient<'a> {
    http: &'a HttpApi,
}

impl<'a> ThumbnailClient<'a> {
    pub(crate) fn new(http: &'a HttpApi) -> Self {
        Self { http }
    }

    /// Public URL of a thumbnail file, suitable for an `<img src>`.
    pub fn url(&self, file: &str) -> String {
        self.http.resolve(&format!("/thumbnail/{file}"))
    }

    /// Download the image bytes.
    pub async fn fetch(&self, file: &str) -> Result<Bytes> {
        let url = self.url(file);
        debug!(url = %url, "Downloading thumbnail");

        let bytes = self.http.get_bytes(&url, None).await?;
        debug!(file = %file, size = bytes.len(), "Thumbnail downloaded");
        Ok(bytes)
    }
}
