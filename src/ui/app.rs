//! App state and the blocking event loop.
//!
//! There is exactly one long-lived piece of state: the rename form (plus
//! scroll position and help toggle). The table itself is rebuilt from the
//! embedded fixture on every render pass, so a render is a pure function
//! of (fixture, current labels, config).

use crate::config::Config;
use crate::data::fixture;
use crate::ui::dashboard::{self, DashboardView, RENAME_SECTION_INDEX, SECTION_COUNT};
use crate::widgets::help_widget::HelpWidget;
use crate::widgets::rename_form::{RenameAction, RenameForm};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use tracing::{debug, info};

pub struct App {
    config: Config,
    form: RenameForm,
    scroll: usize,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let schema_names = fixture::electronics_purchases().column_names();
        Self {
            config,
            form: RenameForm::new(&schema_names),
            scroll: 0,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn form(&self) -> &RenameForm {
        &self.form
    }

    /// One full render pass
    pub fn render(&self, f: &mut Frame) {
        let area = f.area();
        let view = DashboardView::build(&self.form.labels(), &self.config);
        dashboard::render_dashboard(f, area, &view, &self.form, self.scroll, &self.config);
        if self.show_help {
            HelpWidget::render(f, area);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        debug!(target: "input", "key: {:?}", key.code);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        if self.form.is_editing() {
            if self.form.handle_key(key) == RenameAction::Released {
                debug!(target: "rename", "labels now: {:?}", self.form.labels());
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
                self.scroll = (self.scroll + 1).min(SECTION_COUNT - 1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll = SECTION_COUNT - 1,
            KeyCode::Tab | KeyCode::BackTab => {
                // entering edit mode scrolls the rename form into view
                self.form.focus_first();
                self.scroll = RENAME_SECTION_INDEX;
            }
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            _ => {}
        }
    }
}

/// Bring up the terminal, run the dashboard until quit, restore the
/// terminal even when the loop errors.
pub fn run(config: Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    info!(target: "system", "Dashboard started");
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!(target: "system", "Dashboard stopped");

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        // block until the next interaction; each event triggers a full
        // redraw of the page
        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = App::new(Config::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_scroll_clamps_to_sections() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll(), 0);
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.scroll(), SECTION_COUNT - 1);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll(), 0);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.scroll(), SECTION_COUNT - 1);
    }

    #[test]
    fn test_tab_enters_rename_form() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert!(app.form().is_editing());
        assert_eq!(app.scroll(), RENAME_SECTION_INDEX);
    }

    #[test]
    fn test_typed_keys_edit_instead_of_scrolling() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('j')));
        // 'j' went to the field, not to scrolling
        assert_eq!(app.scroll(), RENAME_SECTION_INDEX);
        assert_eq!(app.form().labels()[0], "ProductIDj");
    }

    #[test]
    fn test_escape_leaves_editing_then_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.form().is_editing());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')));
        // scroll keys are ignored while help is up
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll(), 0);
        app.handle_key(key(KeyCode::Char('?')));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll(), 1);
    }
}
