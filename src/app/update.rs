use crate::app::Model;
use crate::layout::Side;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Scroll up half page
    HalfPageUp,
    /// Scroll down half page
    HalfPageDown,
    /// Go to beginning of document
    GoToTop,
    /// Go to end of document
    GoToBottom,

    // Gutters
    /// Show or hide the gutter handles
    ToggleHandles,
    /// Activate or deactivate the gutter override
    ToggleLayout,
    /// Mouse-down on a handle at a column, with an event timestamp for
    /// double-click detection
    BeginDrag(Side, u16, u64),
    /// Mouse moved to a column while dragging
    DragTo(u16),
    /// Mouse released, ending the drag
    EndDrag,
    /// Reset one edge's padding to zero (double-click)
    ResetEdge(Side),

    // Terminal
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    /// Quit the application
    Quit,
}

/// Pure state transition: apply a message to the model.
///
/// Side effects (persistence scheduling, toasts) happen in
/// `handle_message_side_effects` after this returns.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::HalfPageUp => model.viewport.half_page_up(),
        Message::HalfPageDown => model.viewport.half_page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        // Gutters
        Message::ToggleHandles => {
            model.handles_visible = !model.handles_visible;
            if !model.handles_visible {
                // Hiding the handles cancels a live drag but leaves any
                // applied padding in place.
                model.cancel_drag();
            }
        }
        Message::ToggleLayout => {
            if model.layout.is_active() {
                model.cancel_drag();
                model.deactivate_layout();
            } else {
                model.activate_layout();
                let width = f64::from(model.viewport.width());
                model
                    .layout
                    .set_padding(model.layout.padding_left(), model.layout.padding_right(), width);
            }
        }
        Message::BeginDrag(side, column, at_ms) => {
            model.last_handle_press = Some((side, at_ms));
            model.begin_drag(side, column);
        }
        Message::DragTo(column) => {
            let width = f64::from(model.viewport.width());
            if let Some(session) = model.drag.as_mut() {
                session.update(column, width);
            }
        }
        Message::EndDrag => {
            model.end_drag();
        }
        Message::ResetEdge(side) => {
            model.last_handle_press = None;
            model.activate_layout();
            let width = f64::from(model.viewport.width());
            let (left, right) = match side {
                Side::Left => (0.0, model.layout.padding_right()),
                Side::Right => (model.layout.padding_left(), 0.0),
            };
            model.layout.set_padding(left, right, width);
        }

        // Terminal
        Message::Resize(width, height) => {
            model.viewport.resize(width, height.saturating_sub(1));
            if model.layout.is_active() {
                // Re-fit the stored pair against the new budget.
                model.layout.set_padding(
                    model.layout.padding_left(),
                    model.layout.padding_right(),
                    f64::from(width),
                );
            }
            // A resize invalidates drag-start geometry.
            model.cancel_drag();
        }

        // Overlays
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        Message::Quit => model.should_quit = true,
    }

    model
}
