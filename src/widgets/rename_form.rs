//! Column rename form: one text input per column, pre-filled with the
//! schema names. The current field values *are* the labels: every render
//! pass applies all of them to the table at once, so a half-typed label is
//! still a complete, atomic rename of all nine columns.

use crate::config::config::DisplayConfig;
use crate::data::DataTable;
use crate::ui::theme::Styles;
use crate::widgets::preview::DatasetPreview;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// Result of handling a key while a rename field has focus
#[derive(Debug, Clone, PartialEq)]
pub enum RenameAction {
    /// Keep editing
    Continue,
    /// Focus left the form (Esc or Enter)
    Released,
    /// Not ours, let the app handle it
    PassThrough,
}

pub struct RenameForm {
    inputs: Vec<Input>,
    focus: Option<usize>,
}

impl RenameForm {
    /// One input per column, pre-filled with the current names
    pub fn new(column_names: &[String]) -> Self {
        Self {
            inputs: column_names
                .iter()
                .map(|name| Input::default().with_value(name.clone()))
                .collect(),
            focus: None,
        }
    }

    /// The labels as typed right now, in positional order
    pub fn labels(&self) -> Vec<String> {
        self.inputs.iter().map(|i| i.value().to_string()).collect()
    }

    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focused_field(&self) -> Option<usize> {
        self.focus
    }

    pub fn focus_first(&mut self) {
        self.focus = Some(0);
    }

    fn focus_step(&mut self, forward: bool) {
        let len = self.inputs.len();
        if len == 0 {
            return;
        }
        let current = self.focus.unwrap_or(0);
        self.focus = Some(if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        });
    }

    /// Handle a key while editing
    pub fn handle_key(&mut self, key: KeyEvent) -> RenameAction {
        let Some(focused) = self.focus else {
            return RenameAction::PassThrough;
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                RenameAction::PassThrough
            }
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = None;
                RenameAction::Released
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_step(true);
                RenameAction::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_step(false);
                RenameAction::Continue
            }
            _ => {
                self.inputs[focused].handle_event(&crossterm::event::Event::Key(key));
                RenameAction::Continue
            }
        }
    }

    /// Rows this section needs: borders + inputs + echo + head preview
    pub fn height(&self, display: &DisplayConfig) -> u16 {
        2 + self.inputs.len() as u16 + 3 + display.head_rows as u16 + 3
    }

    /// Render the form plus the updated-columns echo and head preview.
    /// `renamed` is the table with this form's labels already applied.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        renamed: &DataTable,
        display: &DisplayConfig,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Rename Columns (Tab to edit)")
            .title_style(Styles::section_title());
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.inputs.len() as u16),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        // input fields
        for (idx, input) in self.inputs.iter().enumerate() {
            let y = chunks[0].y + idx as u16;
            if y >= chunks[0].bottom() {
                break;
            }
            let line_area = Rect::new(chunks[0].x, y, chunks[0].width, 1);
            let focused = self.focus == Some(idx);
            let prefix = format!("Column {}: ", idx + 1);
            let value_style = if focused {
                Styles::focused_input()
            } else {
                Default::default()
            };
            let line = Line::from(vec![
                Span::styled(prefix.clone(), Styles::dim()),
                Span::styled(input.value().to_string(), value_style),
            ]);
            f.render_widget(Paragraph::new(line), line_area);

            if focused {
                let x = line_area.x + prefix.len() as u16 + input.visual_cursor() as u16;
                f.set_cursor_position((x.min(line_area.right().saturating_sub(1)), y));
            }
        }

        // echo of the applied labels
        let echo = Paragraph::new(vec![
            Line::styled("Updated Columns:", Styles::section_title()),
            Line::from(renamed.column_names().join(", ")),
        ])
        .wrap(Wrap { trim: false });
        f.render_widget(echo, chunks[1]);

        // head preview with the new labels in place
        DatasetPreview::new(renamed, "Head")
            .with_max_rows(display.head_rows)
            .render(f, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> RenameForm {
        RenameForm::new(&["alpha".to_string(), "beta".to_string(), "gamma".to_string()])
    }

    #[test]
    fn test_labels_default_to_column_names() {
        let form = form();
        assert_eq!(form.labels(), vec!["alpha", "beta", "gamma"]);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = form();
        form.focus_first();
        assert_eq!(form.focused_field(), Some(0));
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focused_field(), Some(1));
        form.handle_key(key(KeyCode::BackTab));
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focused_field(), Some(2)); // wrapped
    }

    #[test]
    fn test_typing_edits_focused_label() {
        let mut form = form();
        form.focus_first();
        form.handle_key(key(KeyCode::Char('X')));
        assert_eq!(form.labels()[0], "alphaX");
        // other fields untouched
        assert_eq!(form.labels()[1], "beta");
    }

    #[test]
    fn test_escape_releases_focus() {
        let mut form = form();
        form.focus_first();
        assert_eq!(form.handle_key(key(KeyCode::Esc)), RenameAction::Released);
        assert!(!form.is_editing());
        assert_eq!(
            form.handle_key(key(KeyCode::Char('x'))),
            RenameAction::PassThrough
        );
    }

    #[test]
    fn test_blank_label_is_accepted() {
        let mut form = RenameForm::new(&["ab".to_string()]);
        form.focus_first();
        form.handle_key(key(KeyCode::Backspace));
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.labels()[0], "");
    }
}
