// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, Page};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch one page of notes
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `limit` - page size requested from the service
    ///
    /// # Returns
    /// The page items plus the service's pagination metadata
    pub fn list_page(&mut self, page: u32, limit: u32) -> Result<Page<Note>, DomainError> {
        self.repository.list_notes(page, limit)
    }
}
