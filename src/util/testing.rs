// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft, Page, PageMeta};

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP"];

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// Notes live in insertion order so pagination is deterministic. Call
/// counters are public so tests can assert that a use case did (or did not)
/// reach the service.
///
/// # Examples
///
/// ```
/// use noteview::util::testing::MockNoteRepository;
/// use noteview::application::NoteRepository;
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note(1, "Note 1", "Content 1")
///     .with_create_failure(500, "Internal Server Error")
///     .build();
/// assert_eq!(mock.get_note(1).unwrap().title, "Note 1");
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    create_failure: Option<(u16, String)>,
    update_failure: Option<(u16, String)>,
    next_id: i64,
    pub list_calls: u32,
    pub create_calls: u32,
    pub update_calls: u32,
    pub delete_calls: Vec<i64>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&mut self, page: u32, limit: u32) -> Result<Page<Note>, DomainError> {
        self.list_calls += 1;

        let total_items = self.notes.len() as u64;
        let total_pages = (total_items.div_ceil(limit as u64)).max(1) as u32;
        let start = ((page.max(1) - 1) * limit) as usize;
        let items = self
            .notes
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(Page {
            items,
            meta: PageMeta {
                page,
                limit,
                total_items,
                total_pages,
            },
        })
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<(), DomainError> {
        self.create_calls += 1;

        if let Some((status, message)) = &self.create_failure {
            return Err(DomainError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            image: draft
                .attachment
                .as_ref()
                .map(|a| format!("/uploads/{}", a.file_name())),
        });
        Ok(())
    }

    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<(), DomainError> {
        self.update_calls += 1;

        if let Some((status, message)) = &self.update_failure {
            return Err(DomainError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        if let Some(attachment) = &draft.attachment {
            note.image = Some(format!("/uploads/{}", attachment.file_name()));
        }
        Ok(())
    }

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        self.delete_calls.push(id);

        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        self.notes.remove(index);
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    create_failure: Option<(u16, String)>,
    update_failure: Option<(u16, String)>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            create_failure: None,
            update_failure: None,
        }
    }

    /// Seed a note without an attachment
    pub fn with_note(
        mut self,
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.notes.push(Note {
            id,
            title: title.into(),
            content: content.into(),
            image: None,
        });
        self
    }

    /// Seed a note that carries an uploaded image URL
    pub fn with_image_note(
        mut self,
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        self.notes.push(Note {
            id,
            title: title.into(),
            content: content.into(),
            image: Some(image_url.into()),
        });
        self
    }

    /// Make create_note fail with a service error
    pub fn with_create_failure(mut self, status: u16, message: impl Into<String>) -> Self {
        self.create_failure = Some((status, message.into()));
        self
    }

    /// Make update_note fail with a service error
    pub fn with_update_failure(mut self, status: u16, message: impl Into<String>) -> Self {
        self.update_failure = Some((status, message.into()));
        self
    }

    pub fn build(self) -> MockNoteRepository {
        let next_id = self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        MockNoteRepository {
            notes: self.notes,
            create_failure: self.create_failure,
            update_failure: self.update_failure,
            next_id,
            list_calls: 0,
            create_calls: 0,
            update_calls: 0,
            delete_calls: Vec::new(),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
