use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model
        .file_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());

    let percent = model.viewport.scroll_percent();
    let line_info = format!(
        "Line {}/{}",
        model.viewport.offset() + 1,
        model.viewport.total_lines()
    );

    let gutters_indicator = if model.layout.is_active() {
        let (left, right) = model.effective_margins();
        format!(" [gutters {left}+{right}]")
    } else {
        String::new()
    };
    let handles_indicator = if model.handles_visible {
        " [handles]"
    } else {
        ""
    };

    let status = format!(
        " {filename}  [{percent}%]  {line_info}{gutters_indicator}{handles_indicator}  ?:help"
    );

    let status_bar = Paragraph::new(status).style(style::status_bar_style());
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, toast_style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(toast_style);
    frame.render_widget(toast, area);
}
