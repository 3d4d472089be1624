use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::layout::Side;

use super::{overlays, status, style, HANDLE_GRIP_ROWS};

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let doc_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_rows),
    };

    render_document(model, frame, doc_area);
    if model.handles_visible {
        render_handles(model, frame, doc_area);
    }

    if toast_active {
        let toast_area = Rect::new(area.x, area.height.saturating_sub(2), area.width, 1);
        status::render_toast_bar(model, frame, toast_area);
    }
    let status_area = Rect::new(area.x, area.height.saturating_sub(1), area.width, 1);
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

/// The rect the content column occupies inside `area` after the
/// effective margins are applied. Margins are clamped so at least one
/// column of content survives a pathological pair.
pub(super) fn content_rect(model: &Model, area: Rect) -> Rect {
    let (left, right) = model.effective_margins();
    let left = left.min(area.width.saturating_sub(1));
    let width = area.width.saturating_sub(left).saturating_sub(right).max(1);
    Rect {
        x: area.x + left,
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_document(model: &Model, frame: &mut Frame, area: Rect) {
    let content = content_rect(model, area);
    let lines: Vec<Line> = model
        .viewport
        .visible_range()
        .filter_map(|idx| model.document.line_at(idx))
        .map(|line| Line::raw(truncate_to_width(line, content.width)))
        .collect();
    frame.render_widget(Paragraph::new(lines), content);
}

fn render_handles(model: &Model, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (left_col, right_col) = model.handle_columns();
    let dragged = model.drag.as_ref().map(crate::layout::DragSession::side);

    render_handle_rail(frame, area, left_col, dragged == Some(Side::Left));
    render_handle_rail(frame, area, right_col, dragged == Some(Side::Right));
}

/// One vertical rail with a centered grip, mirroring the handle position
/// to the nearest whole column.
fn render_handle_rail(frame: &mut Frame, area: Rect, column: u16, engaged: bool) {
    let column = column.min(area.x + area.width - 1);
    let grip_start = area.height.saturating_sub(HANDLE_GRIP_ROWS) / 2;
    let grip_end = grip_start + HANDLE_GRIP_ROWS;

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            if (grip_start..grip_end).contains(&row) {
                Line::styled("┃", style::grip_style(engaged))
            } else {
                Line::styled("│", style::handle_style(engaged))
            }
        })
        .collect();

    let rail = Rect {
        x: column,
        y: area.y,
        width: 1,
        height: area.height,
    };
    frame.render_widget(Paragraph::new(lines), rail);
}

/// Truncate a line to at most `max_width` display columns, never
/// splitting a wide character in half.
fn truncate_to_width(line: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    let mut width = 0usize;
    let mut out = String::new();
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}
