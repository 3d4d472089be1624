use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::event_loop::ResizeDebouncer;
use crate::app::{App, Message, Model};
use crate::layout::Side;

/// Columns on either side of a handle that still count as grabbing it.
const HANDLE_HIT_SLOP: u16 = 1;

/// Two presses on the same handle within this window count as a
/// double-click, which resets that edge.
const DOUBLE_CLICK_MS: u64 = 400;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model, now_ms),
            Event::Resize(w, h) => {
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model, now_ms: u64) -> Option<Message> {
        if model.help_visible {
            return None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if model.handles_visible
                    && let Some(side) = handle_at_column(model, mouse.column)
                {
                    let double_click = model
                        .last_handle_press
                        .is_some_and(|(last_side, last_ms)| {
                            last_side == side && now_ms.saturating_sub(last_ms) < DOUBLE_CLICK_MS
                        });
                    if double_click {
                        return Some(Message::ResetEdge(side));
                    }
                    return Some(Message::BeginDrag(side, mouse.column, now_ms));
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) if model.dragging() => {
                Some(Message::DragTo(mouse.column))
            }
            MouseEventKind::Up(MouseButton::Left) if model.dragging() => Some(Message::EndDrag),
            MouseEventKind::ScrollDown if model.viewport.can_scroll_down() => {
                Some(Message::ScrollDown(3))
            }
            MouseEventKind::ScrollUp if model.viewport.can_scroll_up() => {
                Some(Message::ScrollUp(3))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            let _ = key;
            return Some(Message::HideHelp);
        }

        match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => {
                model.viewport.can_scroll_down().then_some(Message::ScrollDown(1))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                model.viewport.can_scroll_up().then_some(Message::ScrollUp(1))
            }
            KeyCode::Char(' ') | KeyCode::PageDown => {
                model.viewport.can_scroll_down().then_some(Message::PageDown)
            }
            KeyCode::Char('b') | KeyCode::PageUp => {
                model.viewport.can_scroll_up().then_some(Message::PageUp)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.viewport.can_scroll_down().then_some(Message::HalfPageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.viewport.can_scroll_up().then_some(Message::HalfPageUp)
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

            // Gutters
            KeyCode::Char('m') => Some(Message::ToggleHandles),
            KeyCode::Char('M') => Some(Message::ToggleLayout),

            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Quit
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }

            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// Which handle, if any, a mouse column lands on. When the gutters are
/// narrow enough that both hit zones overlap, the nearer handle wins.
fn handle_at_column(model: &Model, column: u16) -> Option<Side> {
    let (left_col, right_col) = model.handle_columns();
    let near = |handle: u16| column.abs_diff(handle) <= HANDLE_HIT_SLOP;
    match (near(left_col), near(right_col)) {
        (true, false) => Some(Side::Left),
        (false, true) => Some(Side::Right),
        (true, true) => {
            if column.abs_diff(left_col) <= column.abs_diff(right_col) {
                Some(Side::Left)
            } else {
                Some(Side::Right)
            }
        }
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use std::path::PathBuf;

    fn model_with_margins(left: f64, right: f64) -> Model {
        let mut model = Model::new(
            PathBuf::from("test.txt"),
            Document::from_text("line\n".repeat(50).as_str()),
            (100, 24),
        );
        model.handles_visible = true;
        model.activate_layout();
        model.layout.apply(left, right);
        model
    }

    #[test]
    fn test_handle_hit_zone_includes_slop() {
        let model = model_with_margins(10.0, 20.0);
        assert_eq!(handle_at_column(&model, 10), Some(Side::Left));
        assert_eq!(handle_at_column(&model, 11), Some(Side::Left));
        assert_eq!(handle_at_column(&model, 9), Some(Side::Left));
        assert_eq!(handle_at_column(&model, 13), None);
        // Right handle sits at 100 - 1 - 20 = 79.
        assert_eq!(handle_at_column(&model, 79), Some(Side::Right));
        assert_eq!(handle_at_column(&model, 78), Some(Side::Right));
    }

    #[test]
    fn test_overlapping_zones_pick_nearer_handle() {
        // Both handles near the middle of a narrow layout.
        let mut model = model_with_margins(48.0, 49.0);
        model.viewport.resize(100, 23);
        let (left_col, right_col) = model.handle_columns();
        assert!(right_col.abs_diff(left_col) <= 2);
        assert_eq!(handle_at_column(&model, left_col), Some(Side::Left));
        assert_eq!(handle_at_column(&model, right_col), Some(Side::Right));
    }
}
