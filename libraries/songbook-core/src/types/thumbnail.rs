/// Thumbnail image picked for a new song
use std::fmt;

/// An image file held in memory until the song is submitted.
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Original file name, sent as the multipart file name
    pub file_name: String,

    /// MIME type as reported by the picker (e.g. `image/png`)
    pub mime_type: String,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Thumbnail {
    /// Create a thumbnail from already-loaded bytes
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// Keep image bytes out of debug output.
impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size())
            .finish()
    }
}
