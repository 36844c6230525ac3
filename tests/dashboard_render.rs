//! Render-pass tests against a TestBackend buffer: the page is drawn for
//! real and assertions run on the produced text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use salesboard::config::Config;
use salesboard::data::fixture;
use salesboard::ui::app::App;
use salesboard::ui::dashboard::{self, DashboardView, SECTION_COUNT};
use salesboard::widgets::rename_form::RenameForm;

fn schema_labels() -> Vec<String> {
    fixture::electronics_purchases().column_names()
}

fn render_page(labels: &[String], scroll: usize, width: u16, height: u16) -> Buffer {
    let config = Config::default();
    let form = RenameForm::new(labels);
    let view = DashboardView::build(&form.labels(), &config);
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            dashboard::render_dashboard(f, area, &view, &form, scroll, &config);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_top_of_page_shows_title_and_preview() {
    let buffer = render_page(&schema_labels(), 0, 140, 45);
    let text = buffer_text(&buffer);

    assert!(text.contains("Electronics Sales Data Analysis"));
    assert!(text.contains("Dataset Preview"));
    assert!(text.contains("Missing Values"));
    assert!(text.contains("ProductID"));
    assert!(text.contains("Samsung"));
}

#[test]
fn test_correlation_section_renders_matrix() {
    let buffer = render_page(&schema_labels(), 4, 160, 45);
    let text = buffer_text(&buffer);

    assert!(text.contains("Correlation Matrix"));
    // the diagonal annotation
    assert!(text.contains("1.00"));
    assert!(text.contains("vs"));
}

#[test]
fn test_distribution_section_renders_charts() {
    let buffer = render_page(&schema_labels(), 5, 160, 45);
    let text = buffer_text(&buffer);

    assert!(text.contains("Count by ProductBrand"));
    assert!(text.contains("Distribution of ProductPrice"));
    assert!(text.contains("Other Brands") || text.contains("Other Bra"));
}

#[test]
fn test_renamed_labels_reach_every_section() {
    let labels: Vec<String> = (0..9).map(|i| format!("Field{}", i)).collect();

    let top = buffer_text(&render_page(&labels, 0, 140, 45));
    assert!(top.contains("Field0"));
    assert!(!top.contains("ProductID"));

    let charts = buffer_text(&render_page(&labels, 5, 160, 45));
    assert!(charts.contains("Count by Field2"));
    assert!(charts.contains("Distribution of Field3"));
}

#[test]
fn test_rename_section_echoes_updated_columns() {
    let buffer = render_page(&schema_labels(), 3, 140, 45);
    let text = buffer_text(&buffer);

    assert!(text.contains("Rename Columns"));
    assert!(text.contains("Updated Columns:"));
    assert!(text.contains("Column 1:"));
    assert!(text.contains("Head"));
}

#[test]
fn test_every_section_survives_small_terminals() {
    for scroll in 0..SECTION_COUNT {
        for (width, height) in [(20, 6), (80, 10), (10, 40), (3, 3)] {
            // must render something without panicking, nothing more
            let _ = render_page(&schema_labels(), scroll, width, height);
        }
    }
}

#[test]
fn test_typed_rename_shows_up_in_full_app_render() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let mut app = App::new(Config::default());
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    for c in "!!".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    let backend = TestBackend::new(140, 45);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    // Tab jumped to the rename section and the edit applied atomically
    assert!(text.contains("ProductID!!"));
}
