// src/application/note_updater.rs
use tracing::info;

use crate::application::note_creator::rejection_summary;
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteDraft};

pub struct NoteUpdater<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteUpdater<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Apply an edited draft to an existing note. Validation mirrors create:
    /// an unsubmittable draft never produces a request.
    pub fn update(&mut self, note_id: i64, draft: &NoteDraft) -> Result<(), DomainError> {
        if !draft.is_submittable() {
            return Err(DomainError::InvalidDraft(rejection_summary(draft)));
        }

        self.repository.update_note(note_id, draft)?;
        info!(note_id, title = %draft.title, "Updated note");
        Ok(())
    }
}
