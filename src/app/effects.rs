use crate::app::{App, Message, Model, ToastLevel};
use crate::persist::{save_record, SaveDebouncer};

impl App {
    /// Persistence and toast side effects, run after the pure update.
    ///
    /// Debounced saves capture nothing: the record is built from the model
    /// at the moment the debouncer fires, so the latest state always wins.
    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        save_debouncer: &mut SaveDebouncer,
        now_ms: u64,
        msg: &Message,
    ) {
        match msg {
            Message::ToggleLayout => {
                if model.layout.is_active() {
                    model.show_toast(ToastLevel::Info, "Gutters applied");
                    save_debouncer.queue(now_ms);
                } else {
                    model.show_toast(ToastLevel::Info, "Gutters restored");
                    // Deactivation flushes immediately so the stored
                    // record never claims an override that is gone.
                    Self::flush_save(model, save_debouncer);
                }
            }
            Message::ToggleHandles => {
                let state = if model.handles_visible { "shown" } else { "hidden" };
                model.show_toast(ToastLevel::Info, format!("Handles {state}"));
            }
            Message::EndDrag => {
                if model.layout.is_active() {
                    Self::flush_save(model, save_debouncer);
                }
            }
            Message::ResetEdge(side) => {
                model.show_toast(ToastLevel::Info, format!("Reset {} gutter", side.label()));
                if model.layout.is_active() {
                    save_debouncer.queue(now_ms);
                }
            }
            Message::Resize(..) => {
                if model.layout.is_active() {
                    save_debouncer.queue(now_ms);
                }
            }
            Message::Quit => {
                Self::flush_save(model, save_debouncer);
            }
            _ => {}
        }
    }

    /// Cancel any pending debounced save and write immediately. A forced
    /// write always supersedes the debounced one.
    pub(super) fn flush_save(model: &Model, save_debouncer: &mut SaveDebouncer) {
        save_debouncer.cancel();
        Self::write_state(model);
    }

    /// Best-effort write of the current layout state. Skipped silently
    /// when no state path was resolved; failures are logged, not shown.
    pub(super) fn write_state(model: &Model) {
        let Some(path) = model.state_path.as_deref() else {
            return;
        };
        let record = model.persisted_record();
        match save_record(path, &record) {
            Ok(()) => tracing::debug!(
                path = %path.display(),
                left = record.padding_left,
                right = record.padding_right,
                active = record.active,
                "layout state saved"
            ),
            Err(err) => tracing::debug!(path = %path.display(), %err, "layout state save failed"),
        }
    }
}
