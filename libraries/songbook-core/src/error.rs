/// Core error types for Songbook
use thiserror::Error;

/// Result type alias using `SongbookError`
pub type Result<T> = std::result::Result<T, SongbookError>;

/// Message shown for any caught transport failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Errors surfaced to a page.
///
/// Every variant is terminal for the current attempt; nothing is retried.
#[derive(Error, Debug)]
pub enum SongbookError {
    /// Local input check failed before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport or decoding failure
    #[error("Network error")]
    Network,

    /// Server answered but flagged the operation as failed
    #[error("{0}")]
    Application(String),

    /// Server answered with a body that does not have the expected shape
    #[error("Invalid response")]
    InvalidResponse,

    /// Login rejected
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A configured or requested URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O errors (reading thumbnail files)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SongbookError {
    /// Create an application error from an optional server message
    pub fn application(message: Option<String>, fallback: &str) -> Self {
        match message {
            Some(m) if !m.is_empty() => Self::Application(m),
            _ => Self::Application(fallback.to_string()),
        }
    }
}

/// Field-specific rejection raised before a song is submitted.
///
/// The display text is the message shown next to the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or no thumbnail was picked
    #[error("All fields are required.")]
    MissingFields,

    /// `source` does not parse as a URL
    #[error("Source must be a valid URL.")]
    InvalidSource,

    /// Thumbnail MIME type outside the allow-list
    #[error("Thumbnail must be PNG, JPG, or JPEG.")]
    UnsupportedThumbnailType,

    /// Thumbnail larger than the upload limit
    #[error("Thumbnail size must be less than 2MB.")]
    ThumbnailTooLarge,

    /// Login form submitted with an empty field
    #[error("Username and password are required.")]
    MissingCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_text_matches_sentinel() {
        assert_eq!(SongbookError::Network.to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn application_error_prefers_server_message() {
        let err = SongbookError::application(Some("dup".into()), "Failed");
        assert_eq!(err.to_string(), "dup");

        let err = SongbookError::application(Some(String::new()), "Failed");
        assert_eq!(err.to_string(), "Failed");

        let err = SongbookError::application(None, "Failed");
        assert_eq!(err.to_string(), "Failed");
    }

    #[test]
    fn validation_converts_transparently() {
        let err: SongbookError = ValidationError::ThumbnailTooLarge.into();
        assert_eq!(err.to_string(), "Thumbnail size must be less than 2MB.");
        assert!(matches!(err, SongbookError::Validation(_)));
    }
}
