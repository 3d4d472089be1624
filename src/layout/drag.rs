//! Live drag gestures on the gutter handles.
//!
//! A [`DragSession`] exists only while a mouse button is held on a handle.
//! Mouse-move events compute padding requests eagerly, but the results are
//! parked as a single pending pair: later moves within the same render
//! frame overwrite earlier ones, and the event loop applies at most one
//! pair per frame. This bounds layout work to the frame rate no matter how
//! fast the terminal reports motion.

use super::solver::fit_drag;
use super::state::LayoutState;
use super::{Side, MIN_CONTENT_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    side: Side,
    start_column: u16,
    initial_left: f64,
    initial_right: f64,
    pending: Option<(f64, f64)>,
}

impl DragSession {
    /// Start a drag on `side`, capturing the paddings and pointer column
    /// as they are at mouse-down.
    pub const fn begin(side: Side, start_column: u16, layout: &LayoutState) -> Self {
        Self {
            side,
            start_column,
            initial_left: layout.padding_left(),
            initial_right: layout.padding_right(),
            pending: None,
        }
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    /// Fold a mouse-move into the session's pending update.
    ///
    /// The dragged edge follows the pointer from its drag-start value; the
    /// other edge is held at its drag-start value. Over-budget excess is
    /// taken from the dragged edge only, so the stationary handle never
    /// moves under the user.
    pub fn update(&mut self, current_column: u16, viewport_width: f64) {
        if viewport_width <= 0.0 {
            return;
        }

        let delta = f64::from(current_column) - f64::from(self.start_column);
        let (requested_left, requested_right) = match self.side {
            Side::Left => (self.initial_left + delta, self.initial_right),
            Side::Right => (self.initial_left, self.initial_right - delta),
        };

        self.pending = Some(fit_drag(
            requested_left,
            requested_right,
            viewport_width,
            MIN_CONTENT_WIDTH,
            self.side,
        ));
    }

    /// Take the pending padding pair for this frame, if any. The slot is
    /// cleared so the pair is applied at most once.
    pub const fn take_pending(&mut self) -> Option<(f64, f64)> {
        self.pending.take()
    }

    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
