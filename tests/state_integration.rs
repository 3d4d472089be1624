use std::path::PathBuf;

use gutters::app::{update, Message, Model};
use gutters::document::Document;
use gutters::layout::Side;
use gutters::persist::{load_record, save_record, PersistedRecord};

fn model_with_state_path(path: PathBuf) -> Model {
    let text = "line\n".repeat(40);
    let mut model = Model::new(PathBuf::from("doc.txt"), Document::from_text(&text), (120, 30));
    model.state_path = Some(path);
    model.handles_visible = true;
    model
}

#[test]
fn test_drag_session_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gutters").join("state.json");

    // First session: drag the left handle out to 18 columns and flush.
    let model = model_with_state_path(path.clone());
    let model = update(model, Message::BeginDrag(Side::Left, 0, 100));
    let mut model = update(model, Message::DragTo(18));
    assert!(model.apply_drag_frame());
    let model = update(model, Message::EndDrag);
    save_record(&path, &model.persisted_record()).unwrap();

    // Second session: the record seeds the layout and reactivates it.
    let mut next = model_with_state_path(path.clone());
    next.seed_from_record(load_record(&path));
    assert!(next.layout.is_active());
    assert_eq!(next.layout.padding_left(), 18.0);
    assert_eq!(next.layout.padding_right(), 0.0);
}

#[test]
fn test_record_from_wider_terminal_is_refitted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    // Written on a very wide terminal.
    save_record(
        &path,
        &PersistedRecord {
            padding_left: 180.0,
            padding_right: 60.0,
            active: true,
        },
    )
    .unwrap();

    // Loaded on a 120-column terminal: budget 100, ratio 3:1 preserved.
    let mut model = model_with_state_path(path.clone());
    model.seed_from_record(load_record(&path));
    assert_eq!(model.layout.padding_left(), 75.0);
    assert_eq!(model.layout.padding_right(), 25.0);
}

#[test]
fn test_partial_record_seeds_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"padding_right": 14.0}"#).unwrap();

    let mut model = model_with_state_path(path.clone());
    model.seed_from_record(load_record(&path));
    assert!(!model.layout.is_active());
    assert_eq!(model.layout.padding_left(), 0.0);
    assert_eq!(model.layout.padding_right(), 14.0);
}
