//! Turning a user-supplied image into a transport-ready payload.
//!
//! Three sources are accepted and treated identically: a path typed at the
//! prompt, a path pasted by dropping a file onto the terminal, and an image
//! on the system clipboard.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Failed to encode clipboard image: {0}")]
    Encode(String),
}

/// Base64 image data ready to be embedded in a gateway request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Raw base64 text, without any `data:` URL prefix.
    pub data: String,
}

impl ImagePayload {
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Build a payload from base64 text, stripping a `data:<mime>;base64,`
    /// prefix when present. Returns `None` for blank input.
    pub fn from_base64_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let (mime_type, data) = split_data_url(text);
        if data.is_empty() {
            return None;
        }
        Some(Self {
            mime_type: mime_type.unwrap_or(DEFAULT_MIME).to_string(),
            data: data.to_string(),
        })
    }
}

/// Split `data:<mime>;base64,<payload>` into its MIME type and payload.
/// Text without the prefix is returned unchanged.
fn split_data_url(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("data:") else {
        return (None, text);
    };
    let Some((header, payload)) = rest.split_once(',') else {
        return (None, text);
    };
    let mime = header.split(';').next().filter(|m| !m.is_empty());
    (mime, payload)
}

/// Read an image file fully and encode it. A blank path is a no-op.
pub fn capture_file(path: &Path) -> Result<Option<ImagePayload>, CaptureError> {
    if path.as_os_str().is_empty() {
        return Ok(None);
    }
    let bytes = std::fs::read(path).map_err(|source| CaptureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(ImagePayload::from_bytes(&bytes, mime_from_extension(path))))
}

/// Handle pasted text: either a data URL or a (possibly quoted) dropped path.
pub fn capture_pasted(text: &str) -> Result<Option<ImagePayload>, CaptureError> {
    let trimmed = text.trim();
    if trimmed.starts_with("data:") {
        return Ok(ImagePayload::from_base64_text(trimmed));
    }
    match normalize_dropped_path(trimmed) {
        Some(path) => capture_file(&path),
        None => Ok(None),
    }
}

/// Grab an image from the system clipboard and encode it as PNG.
/// Returns `Ok(None)` when the clipboard holds no image.
pub fn capture_clipboard() -> Result<Option<ImagePayload>, CaptureError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| CaptureError::Clipboard(e.to_string()))?;
    let image = match clipboard.get_image() {
        Ok(image) => image,
        Err(arboard::Error::ContentNotAvailable) => return Ok(None),
        Err(e) => return Err(CaptureError::Clipboard(e.to_string())),
    };

    let png = encode_png(image.width as u32, image.height as u32, image.bytes.into_owned())?;
    Ok(Some(ImagePayload::from_bytes(&png, "image/png")))
}

fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Result<Vec<u8>, CaptureError> {
    let buffer = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| CaptureError::Encode("clipboard buffer size mismatch".to_string()))?;
    let mut out = Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| CaptureError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Terminals paste dropped files as quoted or escaped paths, sometimes as
/// `file://` URLs. Only the first line is considered.
fn normalize_dropped_path(text: &str) -> Option<PathBuf> {
    let first = text.lines().next()?.trim();
    let unquoted = first
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| first.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(first);
    let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let unescaped = without_scheme.replace("\\ ", " ");
    if unescaped.is_empty() {
        return None;
    }
    Some(PathBuf::from(unescaped))
}

fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => DEFAULT_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn data_url_prefix_is_stripped() {
        let payload = ImagePayload::from_base64_text("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "aGVsbG8=");
    }

    #[test]
    fn plain_base64_defaults_to_jpeg() {
        let payload = ImagePayload::from_base64_text("aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
        assert_eq!(payload.data, "aGVsbG8=");
    }

    #[test]
    fn blank_text_is_noop() {
        assert!(ImagePayload::from_base64_text("   ").is_none());
        assert!(ImagePayload::from_base64_text("data:image/png;base64,").is_none());
    }

    #[test]
    fn file_is_read_fully_and_encoded() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"hello").unwrap();

        let payload = capture_file(file.path()).unwrap().unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "aGVsbG8=");
    }

    #[test]
    fn empty_path_is_noop() {
        assert!(capture_file(Path::new("")).unwrap().is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = capture_file(Path::new("/definitely/not/here.jpg")).unwrap_err();
        assert!(matches!(err, CaptureError::Read { .. }));
    }

    #[test]
    fn dropped_paths_are_normalized() {
        assert_eq!(
            normalize_dropped_path("'/tmp/my fridge.jpg'"),
            Some(PathBuf::from("/tmp/my fridge.jpg"))
        );
        assert_eq!(
            normalize_dropped_path("file:///tmp/fridge.jpg\n"),
            Some(PathBuf::from("/tmp/fridge.jpg"))
        );
        assert_eq!(
            normalize_dropped_path("/tmp/my\\ fridge.jpg"),
            Some(PathBuf::from("/tmp/my fridge.jpg"))
        );
        assert_eq!(normalize_dropped_path(""), None);
    }

    #[test]
    fn pasted_data_url_skips_filesystem() {
        let payload = capture_pasted("data:image/webp;base64,AAAA").unwrap().unwrap();
        assert_eq!(payload.mime_type, "image/webp");
    }

    #[test]
    fn unknown_extension_defaults_to_jpeg() {
        assert_eq!(mime_from_extension(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("photo.PNG")), "image/png");
        assert_eq!(mime_from_extension(Path::new("photo")), "image/jpeg");
    }

    #[test]
    fn png_encoding_rejects_wrong_buffer_size() {
        assert!(encode_png(2, 2, vec![0; 3]).is_err());
        let png = encode_png(1, 1, vec![255, 0, 0, 255]).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
