// src/infrastructure/api.rs
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft, Page};

/// Blocking HTTP repository for the remote notes service. All calls are
/// sequential; there is no retry policy and no offline handling.
pub struct ApiRepository {
    base_url: String,
    client: Client,
}

impl ApiRepository {
    pub fn new(base_url: &str) -> Self {
        debug!(base_url, "Creating new ApiRepository");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    /// Draft as a write-request body: JSON when there is no attachment,
    /// multipart with an `image` file part when there is one.
    fn write_request(
        &self,
        request: reqwest::blocking::RequestBuilder,
        draft: &NoteDraft,
    ) -> Result<Response, DomainError> {
        let request = match &draft.attachment {
            None => request.json(&json!({
                "title": draft.title,
                "content": draft.content,
            })),
            Some(attachment) => {
                let part = Part::bytes(attachment.bytes().to_vec())
                    .file_name(attachment.file_name().to_string())
                    .mime_str(attachment.mime())
                    .map_err(|e| DomainError::Transport(e.to_string()))?;
                let form = Form::new()
                    .text("title", draft.title.clone())
                    .text("content", draft.content.clone())
                    .part("image", part);
                request.multipart(form)
            }
        };

        request
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-2xx response to a domain error, surfacing the server-provided
/// message when the body carries one.
fn api_error(response: Response) -> DomainError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    DomainError::Api {
        status: status.as_u16(),
        message,
    }
}

impl NoteRepository for ApiRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self, page: u32, limit: u32) -> Result<Page<Note>, DomainError> {
        let response = self
            .client
            .get(self.notes_url())
            .query(&[("page", page), ("limit", limit)])
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response));
        }

        let notes_page: Page<Note> = response
            .json()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        debug!(
            items = notes_page.items.len(),
            total = notes_page.meta.total_items,
            "Fetched notes page"
        );
        Ok(notes_page)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        let response = self
            .client
            .get(self.note_url(id))
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NoteNotFound(id));
        }
        if !response.status().is_success() {
            return Err(api_error(response));
        }

        response
            .json()
            .map_err(|e| DomainError::Transport(e.to_string()))
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    fn create_note(&mut self, draft: &NoteDraft) -> Result<(), DomainError> {
        let request = self.client.post(self.notes_url());
        let response = self.write_request(request, draft)?;

        if !response.status().is_success() {
            return Err(api_error(response));
        }

        info!(title = %draft.title, "Service accepted new note");
        Ok(())
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<(), DomainError> {
        let request = self.client.patch(self.note_url(id));
        let response = self.write_request(request, draft)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NoteNotFound(id));
        }
        if !response.status().is_success() {
            return Err(api_error(response));
        }

        info!(note_id = id, "Service accepted note update");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NoteNotFound(id));
        }
        if !response.status().is_success() {
            return Err(api_error(response));
        }

        info!(note_id = id, "Service deleted note");
        Ok(())
    }
}
