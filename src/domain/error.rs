// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Only image files are allowed")]
    NotAnImage,
    #[error("Image is too large (max 2MB)")]
    ImageTooLarge,
    #[error("Could not read attachment: {0}")]
    AttachmentUnreadable(String),
    #[error("Invalid note: {0}")]
    InvalidDraft(String),
    /// Failure reported by the notes service. Display carries the server
    /// message verbatim so it can be shown inline next to the form.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Could not reach notes service: {0}")]
    Transport(String),
}
