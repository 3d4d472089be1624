use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::Document;
use crate::layout::{DragSession, LayoutState, MarginSnapshot, Side};
use crate::persist::PersistedRecord;
use crate::ui::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - the layout engine, the drag session, and the
/// presentation flags are owned fields, never globals.
pub struct Model {
    /// The loaded document
    pub document: Document,
    /// Viewport managing scroll position and terminal width
    pub viewport: Viewport,
    /// Path to the source file
    pub file_path: PathBuf,
    /// Gutter padding state
    pub layout: LayoutState,
    /// The pager's own margins (`--margin`), snapshotted on activation
    pub margin_left: u16,
    /// Right base margin
    pub margin_right: u16,
    /// Whether the gutter handles are shown
    pub handles_visible: bool,
    /// Live drag session, if a handle is being dragged
    pub drag: Option<DragSession>,
    /// Where layout state is persisted; None disables persistence
    pub state_path: Option<PathBuf>,
    /// Last mouse-down on a handle, for double-click detection
    pub(super) last_handle_press: Option<(Side, u64)>,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    toast: Option<Toast>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("layout", &self.layout)
            .field("handles_visible", &self.handles_visible)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model. The bottom row is reserved for the status bar.
    pub fn new(file_path: PathBuf, document: Document, terminal_size: (u16, u16)) -> Self {
        let total_lines = document.line_count();
        Self {
            document,
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(1),
                total_lines,
            ),
            file_path,
            layout: LayoutState::new(),
            margin_left: 0,
            margin_right: 0,
            handles_visible: false,
            drag: None,
            state_path: None,
            last_handle_press: None,
            help_visible: false,
            should_quit: false,
            toast: None,
        }
    }

    /// Seed layout state from the persisted record, activating the
    /// override if the previous session left it on.
    pub fn seed_from_record(&mut self, record: PersistedRecord) {
        self.layout = LayoutState::new().with_padding(record.padding_left, record.padding_right);
        if record.active {
            self.activate_layout();
            // Re-fit against this terminal's width, which may differ from
            // the session the record was written in.
            self.layout.set_padding(
                self.layout.padding_left(),
                self.layout.padding_right(),
                f64::from(self.viewport.width()),
            );
        }
    }

    pub const fn base_snapshot(&self) -> MarginSnapshot {
        MarginSnapshot {
            left: self.margin_left,
            right: self.margin_right,
        }
    }

    /// Margins in effect for rendering: the gutter override when active,
    /// the pager's own margins otherwise.
    pub fn effective_margins(&self) -> (u16, u16) {
        if self.layout.is_active() {
            (self.layout.applied_left(), self.layout.applied_right())
        } else {
            (self.margin_left, self.margin_right)
        }
    }

    /// Screen columns of the left and right handles. Each handle sits on
    /// the inner edge of its gutter, rounded to a whole cell.
    pub fn handle_columns(&self) -> (u16, u16) {
        let (left, right) = self.effective_margins();
        let width = self.viewport.width();
        let left_col = left.min(width.saturating_sub(1));
        let right_col = width.saturating_sub(1).saturating_sub(right);
        (left_col, right_col.max(left_col))
    }

    /// Activate the gutter override, capturing the base margins once.
    pub fn activate_layout(&mut self) -> bool {
        self.layout.activate(self.base_snapshot())
    }

    /// Deactivate the override and restore the snapshotted base margins.
    pub const fn deactivate_layout(&mut self) {
        if let Some(snapshot) = self.layout.deactivate() {
            self.margin_left = snapshot.left;
            self.margin_right = snapshot.right;
        }
    }

    /// Start dragging a handle. Activates the layout first so the drag
    /// has padding state to work against.
    pub fn begin_drag(&mut self, side: Side, column: u16) {
        self.activate_layout();
        self.drag = Some(DragSession::begin(side, column, &self.layout));
    }

    /// End the drag session, applying any pending update it still holds.
    /// Returns true when a session was actually live.
    pub fn end_drag(&mut self) -> bool {
        let Some(mut session) = self.drag.take() else {
            return false;
        };
        if let Some((left, right)) = session.take_pending() {
            self.layout.apply(left, right);
        }
        true
    }

    /// Drop the drag session without applying its pending update (e.g.
    /// when the handles are hidden mid-drag).
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    pub const fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply the single pending drag update for this frame, if any.
    pub fn apply_drag_frame(&mut self) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        let Some((left, right)) = session.take_pending() else {
            return false;
        };
        self.layout.apply(left, right);
        true
    }

    /// The record mirroring current layout state, as written on flush.
    pub fn persisted_record(&self) -> PersistedRecord {
        PersistedRecord {
            padding_left: self.layout.padding_left(),
            padding_right: self.layout.padding_right(),
            active: self.layout.is_active(),
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), Document::empty(), (80, 24))
    }
}
