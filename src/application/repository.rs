// src/application/repository.rs
use crate::domain::{DomainError, Note, NoteDraft, Page};

/// Port to the notes service. The client only ever sees one page of notes at
/// a time; mutations return nothing and the caller re-fetches.
pub trait NoteRepository {
    fn list_notes(&mut self, page: u32, limit: u32) -> Result<Page<Note>, DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    fn create_note(&mut self, draft: &NoteDraft) -> Result<(), DomainError>;

    /// Partial update of an existing note.
    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<(), DomainError>;

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError>;
}

/// Lets use-case services borrow a repository instead of consuming it, so the
/// caller can keep using it for the re-fetch after a mutation.
impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn list_notes(&mut self, page: u32, limit: u32) -> Result<Page<Note>, DomainError> {
        (**self).list_notes(page, limit)
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        (**self).get_note(id)
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<(), DomainError> {
        (**self).create_note(draft)
    }

    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<(), DomainError> {
        (**self).update_note(id, draft)
    }

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        (**self).delete_note(id)
    }
}
