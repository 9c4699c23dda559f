//! Client-side checks for new songs and login credentials.
//!
//! Rules run in a fixed order and the first failure wins. Nothing here
//! touches the network.

use crate::error::ValidationError;
use crate::types::Thumbnail;
use url::Url;

/// MIME types accepted for song thumbnails.
pub const ALLOWED_THUMBNAIL_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// Largest accepted thumbnail, in bytes (2 MiB).
pub const MAX_THUMBNAIL_BYTES: u64 = 2 * 1024 * 1024;

/// Form contents of the "add song" page while being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub source: String,
    pub thumbnail: Option<Thumbnail>,
}

/// A draft that passed every check, ready to be sent as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSubmission {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub source: String,
    pub thumbnail: Thumbnail,
}

impl NewSong {
    /// Whether every field is at its initial value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Run the checks in order and build a submission.
    ///
    /// 1. all text fields non-empty and a thumbnail present
    /// 2. `source` parses as a URL
    /// 3. thumbnail MIME type is allowed
    /// 4. thumbnail is at most [`MAX_THUMBNAIL_BYTES`]
    pub fn validate(&self) -> Result<SongSubmission, ValidationError> {
        let thumbnail = match &self.thumbnail {
            Some(t)
                if !self.title.is_empty()
                    && !self.artist.is_empty()
                    && !self.description.is_empty()
                    && !self.source.is_empty() =>
            {
                t
            }
            _ => return Err(ValidationError::MissingFields),
        };

        validate_source(&self.source)?;
        validate_thumbnail(thumbnail)?;

        Ok(SongSubmission {
            title: self.title.clone(),
            artist: self.artist.clone(),
            description: self.description.clone(),
            source: self.source.clone(),
            thumbnail: thumbnail.clone(),
        })
    }
}

/// Check that a media source is an absolute URL.
pub fn validate_source(source: &str) -> Result<(), ValidationError> {
    Url::parse(source)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidSource)
}

/// Check thumbnail type, then size.
pub fn validate_thumbnail(thumbnail: &Thumbnail) -> Result<(), ValidationError> {
    if !ALLOWED_THUMBNAIL_TYPES.contains(&thumbnail.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedThumbnailType);
    }
    if thumbnail.size() > MAX_THUMBNAIL_BYTES {
        return Err(ValidationError::ThumbnailTooLarge);
    }
    Ok(())
}

/// Username/password pair typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields are required before a login request is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> Thumbnail {
        Thumbnail::new("cover.png", "image/png", vec![0u8; size])
    }

    fn complete() -> NewSong {
        NewSong {
            title: "Cats Eye".into(),
            artist: "Anri".into(),
            description: "city pop".into(),
            source: "https://youtu.be/abc123".into(),
            thumbnail: Some(png(1024)),
        }
    }

    #[test]
    fn complete_draft_passes() {
        let submission = complete().validate().unwrap();
        assert_eq!(submission.title, "Cats Eye");
        assert_eq!(submission.thumbnail.file_name, "cover.png");
    }

    #[test]
    fn each_empty_field_is_rejected() {
        let cases: [fn(&mut NewSong); 5] = [
            |d| d.title.clear(),
            |d| d.artist.clear(),
            |d| d.description.clear(),
            |d| d.source.clear(),
            |d| d.thumbnail = None,
        ];

        for clear in cases {
            let mut draft = complete();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn unparseable_sources_are_rejected() {
        for source in ["not a url", "youtu.be/abc", "://missing-scheme", "http://"] {
            let mut draft = complete();
            draft.source = source.into();
            assert_eq!(
                draft.validate(),
                Err(ValidationError::InvalidSource),
                "{source}"
            );
        }
    }

    #[test]
    fn mime_allow_list() {
        for mime in ALLOWED_THUMBNAIL_TYPES {
            let t = Thumbnail::new("a", mime, vec![1]);
            assert!(validate_thumbnail(&t).is_ok());
        }
        for mime in ["image/gif", "image/webp", "application/pdf", ""] {
            let t = Thumbnail::new("a", mime, vec![1]);
            assert_eq!(
                validate_thumbnail(&t),
                Err(ValidationError::UnsupportedThumbnailType)
            );
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_thumbnail(&png(MAX_THUMBNAIL_BYTES as usize)).is_ok());
        assert_eq!(
            validate_thumbnail(&png(MAX_THUMBNAIL_BYTES as usize + 1)),
            Err(ValidationError::ThumbnailTooLarge)
        );
    }

    #[test]
    fn rules_run_in_order() {
        // Bad source and bad type: the source rule is reported first.
        let mut draft = complete();
        draft.source = "nope".into();
        draft.thumbnail = Some(Thumbnail::new("a.gif", "image/gif", vec![0u8; 3 * 1024 * 1024]));
        assert_eq!(draft.validate(), Err(ValidationError::InvalidSource));

        // Bad type and too large: type wins.
        draft.source = "https://example.com".into();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::UnsupportedThumbnailType)
        );
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::new("emilys", "emilyspass").validate().is_ok());
        assert_eq!(
            Credentials::new("", "x").validate(),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            Credentials::new("x", "").validate(),
            Err(ValidationError::MissingCredentials)
        );
    }
}
