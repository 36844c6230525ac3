//! Key-binding overlay, toggled with `?` or F1.

use crate::ui::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Up/Down, j/k", "Scroll the page by section"),
    ("PgUp/PgDn", "Scroll the page by section"),
    ("g / Home", "Jump to the top"),
    ("G / End", "Jump to the bottom"),
    ("Tab / Shift-Tab", "Edit column names (next/previous field)"),
    ("Enter / Esc", "Leave the rename fields"),
    ("? / F1", "Toggle this help"),
    ("q, Ctrl-C", "Quit"),
];

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(f: &mut Frame, area: Rect) {
        let width = 56.min(area.width);
        let height = (BINDINGS.len() as u16 + 4).min(area.height);
        let popup = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        let mut lines = vec![Line::from("")];
        lines.extend(BINDINGS.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<16}", keys), Styles::help_key()),
                Span::raw(*action),
            ])
        }));

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help (press ? to close)")
                    .title_style(Styles::section_title()),
            ),
            popup,
        );
    }
}
