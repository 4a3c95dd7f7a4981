// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{
    NoteCreator, NoteDeleter, NoteLister, NoteRepository, NoteUpdater, NoteViewer,
};
use crate::cli::args::{Args, Command};
use crate::cli::form::{confirm, FormOutcome, FormSession};
use crate::domain::{ImageAttachment, Note, NoteDraft};
use crate::infrastructure::renderer::ContentRenderer;
use crate::infrastructure::{ApiRepository, AppConfig};
use crate::ports::{HtmlPresenter, TextPresenter};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting noteview with arguments");

    // Initialize infrastructure
    let config = AppConfig::discover(args.config.as_deref())?;
    let base_url = args.api_url.unwrap_or_else(|| config.api_url.clone());
    let mut repository = ApiRepository::new(&base_url);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match args.command {
        Command::List { page, limit } => {
            let limit = limit.unwrap_or(config.page_size);
            info!(page, limit, "Listing notes");
            let notes_page = NoteLister::new(&mut repository).list_page(page, limit)?;
            print!("{}", TextPresenter::new().render_list(&notes_page));
        }

        Command::View {
            note_id,
            json,
            open,
        } => {
            info!(note_id, "Viewing note");
            let note = NoteViewer::new(&mut repository).view_note(note_id)?;
            debug!(?note, "Retrieved note");

            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else if open {
                let html = HtmlPresenter::with_base_url(&base_url).render(&note);
                let mut renderer = ContentRenderer::new();
                let temp_path = renderer.create_temp_file(&html)?;
                renderer.open_in_browser(&temp_path)?;
            } else {
                print!("{}", TextPresenter::new().render_detail(&note));
            }
        }

        Command::Add {
            title,
            content,
            image,
            no_input,
        } => {
            let draft = draft_from_flags(title, content, image.as_deref(), None)?;
            add_note(
                &mut repository,
                &mut stdin.lock(),
                &mut stdout.lock(),
                draft,
                !no_input,
                config.page_size,
            )?;
        }

        Command::Edit {
            note_id,
            title,
            content,
            image,
            no_input,
        } => {
            let current = NoteViewer::new(&mut repository).view_note(note_id)?;
            let draft = draft_from_flags(title, content, image.as_deref(), Some(current))?;
            edit_note(
                &mut repository,
                &mut stdin.lock(),
                &mut stdout.lock(),
                note_id,
                draft,
                !no_input,
                config.page_size,
            )?;
        }

        Command::Delete { note_id, yes } => {
            delete_note(
                &mut repository,
                &mut stdin.lock(),
                &mut stdout.lock(),
                note_id,
                yes,
                config.page_size,
            )?;
        }

        Command::About => {
            print!("{}", about_text());
        }
    }

    Ok(())
}

/// Open the create form (or submit directly with `interactive` false). On a
/// successful submit the first page is re-fetched and rendered, mirroring the
/// list refresh after the modal closes.
pub fn add_note<R, I, W>(
    repository: &mut R,
    input: &mut I,
    output: &mut W,
    draft: NoteDraft,
    interactive: bool,
    page_size: u32,
) -> Result<()>
where
    R: NoteRepository,
    I: BufRead,
    W: Write,
{
    let outcome = {
        let mut creator = NoteCreator::new(&mut *repository);
        if interactive {
            FormSession::new(&mut *input, &mut *output).run(draft, |d| creator.create(d))?
        } else {
            creator.create(&draft)?;
            FormOutcome::Submitted
        }
    };

    refresh_list_after(outcome, repository, output, page_size)
}

/// Open the edit form pre-filled with the note's current values and submit
/// the changes as a partial update.
pub fn edit_note<R, I, W>(
    repository: &mut R,
    input: &mut I,
    output: &mut W,
    note_id: i64,
    draft: NoteDraft,
    interactive: bool,
    page_size: u32,
) -> Result<()>
where
    R: NoteRepository,
    I: BufRead,
    W: Write,
{
    let outcome = {
        let mut updater = NoteUpdater::new(&mut *repository);
        if interactive {
            FormSession::new(&mut *input, &mut *output)
                .run(draft, |d| updater.update(note_id, d))?
        } else {
            updater.update(note_id, &draft)?;
            FormOutcome::Submitted
        }
    };

    refresh_list_after(outcome, repository, output, page_size)
}

/// Confirm, delete, re-fetch. Without confirmation no request is made.
pub fn delete_note<R, I, W>(
    repository: &mut R,
    input: &mut I,
    output: &mut W,
    note_id: i64,
    skip_confirm: bool,
    page_size: u32,
) -> Result<()>
where
    R: NoteRepository,
    I: BufRead,
    W: Write,
{
    if !skip_confirm {
        let prompt = format!("Delete note {note_id}? This cannot be undone. [y/N] ");
        if !confirm(input, output, &prompt)? {
            writeln!(output, "Aborted.")?;
            return Ok(());
        }
    }

    NoteDeleter::new(&mut *repository).delete_note(note_id)?;
    writeln!(output, "Deleted note {note_id}.")?;

    refresh_list_after(FormOutcome::Submitted, repository, output, page_size)
}

fn refresh_list_after<R: NoteRepository, W: Write>(
    outcome: FormOutcome,
    repository: &mut R,
    output: &mut W,
    page_size: u32,
) -> Result<()> {
    if outcome == FormOutcome::Submitted {
        let page = NoteLister::new(repository).list_page(1, page_size)?;
        write!(output, "{}", TextPresenter::new().render_list(&page))?;
    }
    Ok(())
}

/// Build the initial form draft from command-line flags, on top of the note
/// being edited when there is one.
fn draft_from_flags(
    title: Option<String>,
    content: Option<String>,
    image: Option<&Path>,
    base: Option<Note>,
) -> Result<NoteDraft> {
    let mut draft = match base {
        Some(note) => NoteDraft::new(note.title, note.content),
        None => NoteDraft::default(),
    };
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(content) = content {
        draft.content = content;
    }
    if let Some(path) = image {
        draft.attachment = Some(ImageAttachment::from_file(path)?);
    }
    Ok(draft)
}

fn about_text() -> String {
    format!(
        "{} {}\n{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
    )
}
