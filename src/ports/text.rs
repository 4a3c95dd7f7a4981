// src/ports/text.rs
use crate::domain::{Note, Page};
use crate::util::text::preview_line;

/// Width of the content preview column in list rows, in characters.
const PREVIEW_CHARS: usize = 40;

#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Render one page of the note list: header, one row per note, and a
    /// pagination footer with navigation hints.
    pub fn render_list(&self, page: &Page<Note>) -> String {
        let mut out = String::from("Note List\n");

        if page.items.is_empty() {
            out.push_str("\nNo notes yet.\n");
        } else {
            let id_width = page
                .items
                .iter()
                .map(|n| n.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let title_width = page
                .items
                .iter()
                .map(|n| n.title.chars().count())
                .max()
                .unwrap_or(5)
                .max(5);

            out.push('\n');
            for note in &page.items {
                let marker = if note.image_url().is_some() {
                    "  [img]"
                } else {
                    ""
                };
                out.push_str(&format!(
                    "{:>id_width$}  {:<title_width$}  {}{}\n",
                    note.id,
                    note.title,
                    preview_line(&note.content, PREVIEW_CHARS),
                    marker,
                ));
            }
        }

        let meta = &page.meta;
        let noun = if meta.total_items == 1 { "note" } else { "notes" };
        out.push_str(&format!(
            "\nPage {} of {} ({} {})\n",
            meta.page, meta.total_pages, meta.total_items, noun
        ));

        let mut hints = Vec::new();
        if meta.has_previous() {
            hints.push(format!("previous: --page {}", meta.page - 1));
        }
        if meta.has_next() {
            hints.push(format!("next: --page {}", meta.page + 1));
        }
        if !hints.is_empty() {
            out.push_str(&format!("({})\n", hints.join(", ")));
        }

        out
    }

    /// Render a single note as a text detail view.
    pub fn render_detail(&self, note: &Note) -> String {
        let mut out = format!("Note {}\n\nTitle:   {}\nContent: ", note.id, note.title);

        // Indent continuation lines so the content block stays aligned
        let mut lines = note.content.lines();
        out.push_str(lines.next().unwrap_or(""));
        for line in lines {
            out.push_str("\n         ");
            out.push_str(line);
        }
        out.push('\n');

        if let Some(url) = note.image_url() {
            out.push_str(&format!("Image:   {url}\n"));
        }

        out
    }
}
