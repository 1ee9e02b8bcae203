//! Upload ingestion.
//!
//! A photo arrives as raw bytes, gets sniffed for a supported format
//! (PNG, JPEG, WEBP), and is carried through the engine as a base64
//! payload plus MIME type, which is exactly the shape the image model's
//! image-to-image call wants. The payload can also render itself as a data
//! URI so the session has a preview to show while the restyle runs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::Artifact;

/// An uploaded photo, encoded and ready for the restyle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    base64: String,
    mime_type: String,
}

impl UploadPayload {
    /// Wraps an already-encoded payload.
    pub fn new(base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encodes raw bytes under the given MIME type.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Sniffs the image format from magic bytes and encodes. Returns `None`
    /// for anything that is not PNG, JPEG, or WEBP.
    pub fn from_image_bytes(bytes: &[u8]) -> Option<Self> {
        let mime_type = sniff_mime(bytes)?;
        Some(Self::from_bytes(bytes, mime_type))
    }

    /// Base64-encoded image data.
    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// MIME type, e.g. `image/png`.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The payload as a `data:` URI.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }

    /// A preview artifact of the original photo, shown while the restyle
    /// is in flight.
    pub fn preview_artifact(&self) -> Artifact {
        Artifact::from_data_uri(self.data_uri())
    }
}

/// Magic-byte sniffing for the supported upload formats.
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    #[test]
    fn sniffs_png() {
        let payload = UploadPayload::from_image_bytes(PNG_HEADER).unwrap();
        assert_eq!(payload.mime_type(), "image/png");
    }

    #[test]
    fn sniffs_jpeg() {
        let payload = UploadPayload::from_image_bytes(JPEG_HEADER).unwrap();
        assert_eq!(payload.mime_type(), "image/jpeg");
    }

    #[test]
    fn sniffs_webp() {
        let mut bytes = Vec::from(*b"RIFF");
        bytes.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        bytes.extend_from_slice(b"WEBP");
        bytes.extend_from_slice(b"VP8 ");
        let payload = UploadPayload::from_image_bytes(&bytes).unwrap();
        assert_eq!(payload.mime_type(), "image/webp");
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(UploadPayload::from_image_bytes(b"GIF89a....").is_none());
        assert!(UploadPayload::from_image_bytes(b"").is_none());
        assert!(UploadPayload::from_image_bytes(b"RIFF1234WAVE").is_none());
    }

    #[test]
    fn data_uri_embeds_mime_and_payload() {
        let payload = UploadPayload::from_bytes(b"abc", "image/png");
        assert_eq!(payload.data_uri(), "data:image/png;base64,YWJj");
        assert_eq!(payload.preview_artifact().as_str(), "data:image/png;base64,YWJj");
    }
}
