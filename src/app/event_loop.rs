use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{update, App, Message, Model};
use crate::document::Document;
use crate::persist::{load_record, SaveDebouncer, SAVE_DEBOUNCE_MS};

/// Coalesces terminal resize events: only the most recent size matters,
/// and it is applied once the terminal has been quiet for the delay.
pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization, file reading, or the
    /// event loop encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let document = Document::load(&self.file_path)?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — gutters requires an interactive terminal")?;
        let size = terminal.size()?;
        execute!(stdout(), EnableMouseCapture)?;

        let mut model = Model::new(self.file_path.clone(), document, (size.width, size.height));
        model.margin_left = self.margin;
        model.margin_right = self.margin;
        model.handles_visible = self.handles_visible;
        model.state_path.clone_from(&self.state_path);

        // Seed the layout from the previous session before the first frame.
        if let Some(path) = model.state_path.clone() {
            let record = load_record(&path);
            tracing::debug!(
                path = %path.display(),
                left = record.padding_left,
                right = record.padding_right,
                active = record.active,
                "layout state loaded"
            );
            model.seed_from_record(record);
        }

        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut save_debouncer = SaveDebouncer::new(SAVE_DEBOUNCE_MS);
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                let msg = Message::Resize(width, height);
                *model = update(std::mem::take(model), msg.clone());
                Self::handle_message_side_effects(model, &mut save_debouncer, now_ms, &msg);
                needs_render = true;
            }

            // The debounced save reads the model at fire time, so it
            // always reflects the latest state.
            if save_debouncer.take_ready(now_ms) {
                Self::write_state(model);
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() || save_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so debouncers use
                // accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let msg =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    *model = update(std::mem::take(model), msg.clone());
                    Self::handle_message_side_effects(model, &mut save_debouncer, event_ms, &msg);
                    needs_render = true;
                }

                // Coalesce event bursts (key repeat, rapid mouse motion)
                // into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg =
                        Self::handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        *model = update(std::mem::take(model), msg.clone());
                        Self::handle_message_side_effects(model, &mut save_debouncer, drain_ms, &msg);
                        needs_render = true;
                    }
                }
            }

            // Apply at most one pending drag computation per frame; moves
            // drained above overwrote each other and only the latest
            // survives.
            let frame_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if model.apply_drag_frame() {
                save_debouncer.queue(frame_ms);
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
