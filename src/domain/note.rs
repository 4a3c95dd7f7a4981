// src/domain/note.rs
use serde::{Deserialize, Serialize};

use crate::domain::form::{self, FieldErrors};
use crate::domain::ImageAttachment;

/// A note as the service reports it. `image` is the URL of a previously
/// uploaded attachment; the service sends an empty string when there is none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Note {
    /// Attachment URL, treating both a missing field and an empty string as
    /// "no image".
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Client-side form state for a note that is being created or edited.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub attachment: Option<ImageAttachment>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: ImageAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn field_errors(&self) -> FieldErrors {
        form::validate(&self.title, &self.content)
    }

    /// Whether the form's save control would be enabled for this draft.
    pub fn is_submittable(&self) -> bool {
        form::submit_enabled(&self.title, &self.content)
    }
}
