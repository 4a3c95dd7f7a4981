// src/application/note_creator.rs
use tracing::info;

use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteDraft};

pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a note from a draft. Drafts that fail client-side validation
    /// are refused here and never reach the service.
    pub fn create(&mut self, draft: &NoteDraft) -> Result<(), DomainError> {
        if !draft.is_submittable() {
            return Err(DomainError::InvalidDraft(rejection_summary(draft)));
        }

        self.repository.create_note(draft)?;
        info!(title = %draft.title, "Created note");
        Ok(())
    }
}

/// Human-readable reason a draft was refused. Field error messages when there
/// are any; otherwise the only remaining cause is a below-minimum field.
pub(crate) fn rejection_summary(draft: &NoteDraft) -> String {
    let errors = draft.field_errors();
    if errors.is_empty() {
        "title or content is too short".to_string()
    } else {
        errors.summary()
    }
}
