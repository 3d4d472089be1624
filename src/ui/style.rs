//! Chrome and handle styling.
//!
//! Uses semantic ANSI colors that respect the terminal's palette.

use ratatui::style::{Color, Modifier, Style};

/// Style for a gutter handle rail. An engaged handle (hovered by a live
/// drag) is highlighted so the user can see which edge is moving.
pub fn handle_style(engaged: bool) -> Style {
    if engaged {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

/// Style for the handle grip segment.
pub fn grip_style(engaged: bool) -> Style {
    handle_style(engaged).add_modifier(Modifier::BOLD)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn help_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
