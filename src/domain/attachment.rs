// src/domain/attachment.rs
//
// Local, synchronous validation of image attachments: a file is accepted only
// if its bytes carry a known image signature and the payload stays under the
// size ceiling. No network round-trip is involved.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::constants::MAX_IMAGE_BYTES;
use crate::domain::DomainError;

/// A validated image attachment, ready to be uploaded alongside a note.
#[derive(Clone)]
pub struct ImageAttachment {
    file_name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Read and validate a local file. Type is checked before size, so a
    /// non-image never reaches the size check.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| DomainError::AttachmentUnreadable(format!("{}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        Self::from_bytes(file_name, bytes)
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let file_name = file_name.into();

        let mime = sniff_mime(&file_name, &bytes).ok_or(DomainError::NotAnImage)?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::ImageTooLarge);
        }

        debug!(%file_name, mime, size = bytes.len(), "Accepted image attachment");
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// One-line summary shown in the form once an attachment is accepted.
    pub fn preview(&self) -> String {
        format!(
            "{} ({}, {})",
            self.file_name,
            self.mime,
            human_size(self.bytes.len())
        )
    }
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Identify the image type from the file's leading bytes. SVG is text and has
/// no signature, so it falls back to the file extension.
fn sniff_mime(file_name: &str, bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.starts_with(b"BM") {
        return Some("image/bmp");
    }
    if file_name.rsplit('.').next().is_some_and(|ext| ext.eq_ignore_ascii_case("svg")) {
        return Some("image/svg+xml");
    }
    None
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
