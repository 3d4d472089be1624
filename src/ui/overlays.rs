use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use super::style;

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("j/k, arrows", "scroll"),
    ("space/b, PgDn/PgUp", "page down / up"),
    ("Ctrl-d / Ctrl-u", "half page down / up"),
    ("g / G", "top / bottom"),
    ("m", "show or hide gutter handles"),
    ("M", "apply or restore the gutter layout"),
    ("drag handle", "resize the reading column"),
    ("double-click handle", "reset that gutter"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let needed_rows = u16::try_from(HELP_ENTRIES.len()).unwrap_or(u16::MAX) + 4;
    let popup = centered_popup_rect(44, needed_rows, area);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<20}"), style::help_key_style()),
                Span::raw((*action).to_string()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" gutters — keys ")
        .borders(Borders::ALL)
        .border_style(style::help_border_style())
        .padding(Padding::vertical(1));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
