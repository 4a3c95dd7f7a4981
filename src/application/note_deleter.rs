// src/application/note_deleter.rs
use tracing::info;

use crate::application::NoteRepository;
use crate::domain::DomainError;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note. Confirmation is the caller's responsibility; this
    /// service issues the request unconditionally.
    pub fn delete_note(&mut self, note_id: i64) -> Result<(), DomainError> {
        self.repository.delete_note(note_id)?;
        info!(note_id, "Deleted note");
        Ok(())
    }
}
