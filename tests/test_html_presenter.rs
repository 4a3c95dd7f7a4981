mod helpers;

use anyhow::Result;
use helpers::{CannedResponse, StubServer};
use noteview::application::NoteViewer;
use noteview::infrastructure::ApiRepository;
use noteview::ports::HtmlPresenter;

#[test]
fn given_note_with_image_when_rendering_then_resolves_against_service_url() -> Result<()> {
    // Arrange
    let server = StubServer::start(vec![CannedResponse::ok(
        helpers::note_body(
            7,
            "Note with Image",
            "This note has an image",
            "/uploads/photo.png",
        )
        .to_string(),
    )]);
    let base_url = server.base_url().to_string();
    let repo = ApiRepository::new(&base_url);
    let mut viewer = NoteViewer::new(repo);
    let presenter = HtmlPresenter::with_base_url(&base_url);

    // Act
    let note = viewer.view_note(7)?;
    let html = presenter.render(&note);

    // Assert
    assert!(html.contains(r#"<img class="note-image""#));
    assert!(html.contains(&format!("{base_url}/uploads/photo.png")));
    assert!(html.contains("Note with Image"));
    server.finish();
    Ok(())
}

#[test]
fn given_plain_note_when_rendering_then_produces_detail_page_without_image() -> Result<()> {
    // Arrange
    let server = StubServer::start(vec![CannedResponse::ok(
        helpers::note_body(8, "Plain Note", "Line one\nLine two", "").to_string(),
    )]);
    let repo = ApiRepository::new(server.base_url());
    let mut viewer = NoteViewer::new(repo);
    let presenter = HtmlPresenter::new();

    // Act
    let note = viewer.view_note(8)?;
    let html = presenter.render(&note);

    // Assert
    assert!(html.contains("<h2>Plain Note</h2>"));
    assert!(html.contains("Line one<br>"));
    assert!(html.contains("Note ID: 8"));
    assert!(!html.contains("<img"));
    server.finish();
    Ok(())
}
