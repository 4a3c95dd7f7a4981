// src/ports/html.rs
use crate::domain::Note;
use html_escape::encode_text;
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    base_url: Option<String>,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Resolve relative image paths (as the service reports them) against
    /// the service's base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    #[instrument(level = "debug", ret)]
    fn image_src(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        match &self.base_url {
            Some(base) => format!("{}/{}", base, url.trim_start_matches('/')),
            None => url.to_string(),
        }
    }

    pub fn render(&self, note: &Note) -> String {
        let title = encode_text(&note.title).into_owned();
        let content = encode_text(&note.content).replace('\n', "<br>\n");
        let image_block = match note.image_url() {
            Some(url) => format!(
                "\n        <img class=\"note-image\" src=\"{}\" alt=\"attachment\">",
                encode_text(&self.image_src(url))
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Note {id}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .card-title {{
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 2px solid #eee;
        }}
        .note-image {{
            display: block;
            max-width: 100%;
            margin-top: 1.5rem;
            border-radius: 4px;
        }}
        .note-info {{
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }}
    </style>
</head>
<body>
    <div class="card">
        <div class="card-title">
            <h2>{title}</h2>
        </div>
        <div class="card-content">{content}</div>{image_block}
        <div class="note-info">
            <div>Note ID: {id}</div>
        </div>
    </div>
</body>
</html>"#,
            id = note.id,
            title = title,
            content = content,
            image_block = image_block,
        )
    }
}
