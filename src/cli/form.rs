// src/cli/form.rs
//
// The interactive note form. Line-oriented counterpart of a modal dialog:
// fields are prompted in order, re-validated after every entry, and the form
// only closes on a successful submit or an explicit cancel. A failed submit
// keeps the form open with all values retained.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::domain::{form, DomainError, ImageAttachment, NoteDraft};

/// Entering this at any prompt cancels the form.
pub const CANCEL_WORD: &str = ":q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted,
    Cancelled,
}

pub struct FormSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the form until the draft is submitted or cancelled. `submit` is
    /// called once per save attempt; a `DomainError` from it is shown inline
    /// and the form stays open for retry with the entered values kept.
    pub fn run<F>(&mut self, mut draft: NoteDraft, mut submit: F) -> Result<FormOutcome>
    where
        F: FnMut(&NoteDraft) -> Result<(), DomainError>,
    {
        loop {
            let Some(title) = self.edit_text_field("Title", &draft.title, form::title_error)?
            else {
                return self.cancelled();
            };
            draft.title = title;

            let Some(content) =
                self.edit_text_field("Content", &draft.content, form::content_error)?
            else {
                return self.cancelled();
            };
            draft.content = content;

            let Some(attachment) = self.edit_attachment(draft.attachment.as_ref())? else {
                return self.cancelled();
            };
            draft.attachment = attachment;

            if !draft.is_submittable() {
                writeln!(self.output, "Save is disabled until the form is valid.")?;
                continue;
            }

            match submit(&draft) {
                Ok(()) => {
                    writeln!(self.output, "Saved.")?;
                    return Ok(FormOutcome::Submitted);
                }
                Err(e) => {
                    debug!(error = %e, "Submit failed, form stays open");
                    writeln!(self.output, "  ✗ {e}")?;
                }
            }
        }
    }

    /// Prompt for one text field until it carries no error message. Entering
    /// nothing keeps the current value when there is one.
    fn edit_text_field(
        &mut self,
        label: &str,
        current: &str,
        error_for: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<String>> {
        loop {
            let prompt = if current.is_empty() {
                format!("{label}: ")
            } else {
                format!("{label} [{current}]: ")
            };
            let Some(entry) = self.read_entry(&prompt)? else {
                return Ok(None);
            };

            let candidate = if entry.is_empty() && !current.is_empty() {
                current.to_string()
            } else {
                entry
            };

            match error_for(&candidate) {
                Some(message) => writeln!(self.output, "  ✗ {message}")?,
                None => return Ok(Some(candidate)),
            }
        }
    }

    /// Prompt for an image path until a valid image is attached or the field
    /// is left blank (keeping the current attachment, if any).
    fn edit_attachment(
        &mut self,
        current: Option<&ImageAttachment>,
    ) -> Result<Option<Option<ImageAttachment>>> {
        loop {
            let prompt = match current {
                Some(attachment) => {
                    format!("Image [{}] (path, blank to keep): ", attachment.file_name())
                }
                None => "Image (path, blank for none): ".to_string(),
            };
            let Some(entry) = self.read_entry(&prompt)? else {
                return Ok(None);
            };

            if entry.is_empty() {
                return Ok(Some(current.cloned()));
            }

            match ImageAttachment::from_file(&entry) {
                Ok(attachment) => {
                    writeln!(self.output, "  Attached: {}", attachment.preview())?;
                    return Ok(Some(Some(attachment)));
                }
                Err(e) => writeln!(self.output, "  ✗ {e}")?,
            }
        }
    }

    /// One prompt/answer round trip. Returns None on end of input or the
    /// cancel word.
    fn read_entry(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buffer = String::new();
        let bytes_read = self
            .input
            .read_line(&mut buffer)
            .context("Failed to read form input")?;
        if bytes_read == 0 {
            return Ok(None);
        }

        let entry = buffer.trim().to_string();
        if entry == CANCEL_WORD {
            return Ok(None);
        }
        Ok(Some(entry))
    }

    fn cancelled(&mut self) -> Result<FormOutcome> {
        writeln!(self.output, "Cancelled.")?;
        Ok(FormOutcome::Cancelled)
    }
}

/// Yes/no confirmation prompt. Anything but an explicit yes declines.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut buffer = String::new();
    let bytes_read = input
        .read_line(&mut buffer)
        .context("Error reading confirmation")?;
    if bytes_read == 0 {
        return Ok(false);
    }

    let answer = buffer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
