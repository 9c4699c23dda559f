//! Song creation (multipart upload) for the playlist API.

use crate::error::{Result, ServerClientError};
use crate::http::{server_message, Body, HttpApi};
use crate::types::Envelope;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use songbook_core::{SongSubmission, Thumbnail};
use std::path::Path;
use tracing::{debug, info, warn};

/// Upload client for new songs.
pub struct UploadClient<'a> {
    http: &'a HttpApi,
    access_token: Option<&'a str>,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a HttpApi, access_token: Option<&'a str>) -> Self {
        Self { http, access_token }
    }

    /// `POST /playlists/song` with fields `title, artist, description,
    /// source, thumbnail`.
    ///
    /// Returns the `{ success, message? }` envelope whatever the status
    /// code; interpreting a falsy `success` is up to the caller. A
    /// non-success status without such a body is a `ServerError`.
    pub async fn create_song(&self, submission: &SongSubmission) -> Result<Envelope<serde_json::Value>> {
        let thumbnail = &submission.thumbnail;
        debug!(
            title = %submission.title,
            thumbnail = %thumbnail.file_name,
            size = thumbnail.size(),
            "Uploading song"
        );

        let file_part = Part::bytes(thumbnail.bytes.clone())
            .file_name(thumbnail.file_name.clone())
            .mime_str(&thumbnail.mime_type)
            .map_err(|e| ServerClientError::ParseError(format!("Invalid thumbnail type: {e}")))?;

        let form = Form::new()
            .text("title", submission.title.clone())
            .text("artist", submission.artist.clone())
            .text("description", submission.description.clone())
            .text("source", submission.source.clone())
            .part("thumbnail", file_part);

        let response = self
            .http
            .execute(
                Method::POST,
                "/playlists/song",
                Some(Body::Multipart(form)),
                self.access_token,
            )
            .await?;

        let status = response.status();
        let text = response.text().await.map_err(ServerClientError::Network)?;

        let envelope: Envelope<serde_json::Value> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                warn!(error = %e, "Failed to parse response");
                return Err(ServerClientError::ParseError(format!(
                    "Failed to parse response: {e}"
                )));
            }
            Err(_) => {
                debug!(status = %status, "Song upload rejected without envelope");
                return Err(ServerClientError::ServerError {
                    status: status.as_u16(),
                    message: server_message(&text),
                });
            }
        };

        if envelope.is_success() {
            info!(title = %submission.title, "Song created");
        } else {
            debug!(status = %status, message = ?envelope.message, "Song rejected by server");
        }

        Ok(envelope)
    }
}

/// Load a thumbnail from disk, guessing its MIME type from the extension.
pub async fn thumbnail_from_path(path: &Path) -> Result<Thumbnail> {
    if !path.exists() {
        return Err(ServerClientError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("thumbnail")
        .to_string();

    let bytes = tokio::fs::read(path).await?;
    let mime_type = mime_type_for_file(path);

    Ok(Thumbnail::new(file_name, mime_type, bytes))
}

/// Get MIME type for an image file.
fn mime_type_for_file(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type_for_file(Path::new("cover.png")), "image/png");
        assert_eq!(mime_type_for_file(Path::new("cover.jpg")), "image/jpeg");
        assert_eq!(mime_type_for_file(Path::new("cover.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for_file(Path::new("cover.gif")), "image/gif");
        assert_eq!(
            mime_type_for_file(Path::new("cover.unknown")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn reads_thumbnail_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let thumbnail = thumbnail_from_path(&path).await.unwrap();
        assert_eq!(thumbnail.file_name, "cover.png");
        assert_eq!(thumbnail.mime_type, "image/png");
        assert_eq!(thumbnail.size(), 4);
    }

    #[tokio::test]
    async fn missing_thumbnail_file() {
        let result = thumbnail_from_path(Path::new("/definitely/not/here.png")).await;
        assert!(matches!(result, Err(ServerClientError::FileNotFound(_))));
    }
}
