use std::path::PathBuf;

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::Model;
use crate::document::Document;

use super::render;
use super::render::content_rect;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn create_test_model() -> Model {
    let doc = Document::from_text("alpha\nbravo\ncharlie");
    Model::new(PathBuf::from("notes.txt"), doc, (80, 24))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|col| buffer[(col, row)].symbol().to_string())
        .collect()
}

#[test]
fn test_content_rect_applies_active_padding() {
    let mut model = create_test_model();
    model.activate_layout();
    model.layout.apply(10.0, 6.0);
    let rect = content_rect(&model, Rect::new(0, 0, 80, 23));
    assert_eq!(rect.x, 10);
    assert_eq!(rect.width, 64);
}

#[test]
fn test_content_rect_survives_oversized_margins() {
    let mut model = create_test_model();
    model.margin_left = 200;
    model.margin_right = 200;
    let rect = content_rect(&model, Rect::new(0, 0, 80, 23));
    assert!(rect.width >= 1);
    assert!(rect.x < 80);
}

#[test]
fn test_document_renders_at_padding_offset() {
    let mut model = create_test_model();
    model.activate_layout();
    model.layout.apply(12.0, 0.0);

    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let first_row = row_text(&terminal, 0);
    assert_eq!(&first_row[12..17], "alpha");
}

#[test]
fn test_handle_rails_render_when_visible() {
    let mut model = create_test_model();
    model.handles_visible = true;
    model.activate_layout();
    model.layout.apply(8.0, 8.0);

    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    // Rails sit at the inner edge of each gutter.
    assert_eq!(buffer[(8, 0)].symbol(), "│");
    assert_eq!(buffer[(71, 0)].symbol(), "│");
}

#[test]
fn test_handles_hidden_by_default() {
    let mut model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();
    assert!(!buffer_text(&terminal).contains('│'));
}

#[test]
fn test_status_bar_shows_filename_and_gutter_state() {
    let mut model = create_test_model();
    model.activate_layout();
    model.layout.apply(5.0, 7.0);

    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let status = row_text(&terminal, 23);
    assert!(status.contains("notes.txt"));
    assert!(status.contains("[gutters 5+7]"));
}

#[test]
fn test_help_overlay_renders() {
    let mut model = create_test_model();
    model.help_visible = true;

    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    assert!(buffer_text(&terminal).contains("gutters"));
    assert!(buffer_text(&terminal).contains("quit"));
}
