//! Color scheme and styles for the dashboard panels.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const TITLE: Color = Color::Cyan;
    pub const SECTION_TITLE: Color = Color::Yellow;
    pub const TABLE_HEADER: Color = Color::Cyan;

    // The two halves of the gender split in scatter plots
    pub const GENDER_ZERO: Color = Color::Rgb(59, 76, 192);
    pub const GENDER_ONE: Color = Color::Rgb(180, 4, 38);

    // Series colors for the bar charts, one per chart
    pub const BAR_SERIES: [Color; 3] = [
        Color::Rgb(76, 114, 176),
        Color::Rgb(221, 132, 82),
        Color::Rgb(85, 168, 104),
    ];

    // Histogram bars and their density overlays
    pub const HIST_SERIES: [Color; 3] = [
        Color::Rgb(135, 206, 235),
        Color::Rgb(144, 238, 144),
        Color::Rgb(250, 128, 114),
    ];
    pub const DENSITY_CURVE: Color = Color::White;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(Theme::TITLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Theme::SECTION_TITLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::TABLE_HEADER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn focused_input() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }
}

/// Map a correlation coefficient in [-1, 1] onto a cool-warm ramp:
/// saturated blue at -1 through near-white at 0 to saturated red at +1.
pub fn coolwarm(value: f64) -> Color {
    let v = value.clamp(-1.0, 1.0);
    let (low, high): ((u8, u8, u8), (u8, u8, u8)) = if v < 0.0 {
        ((221, 221, 221), (59, 76, 192))
    } else {
        ((221, 221, 221), (180, 4, 38))
    };
    let t = v.abs();
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(lerp(low.0, high.0), lerp(low.1, high.1), lerp(low.2, high.2))
}

/// Readable text color on top of a cool-warm cell
pub fn coolwarm_text(value: f64) -> Color {
    if value.abs() > 0.55 {
        Color::White
    } else {
        Color::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), Color::Rgb(59, 76, 192));
        assert_eq!(coolwarm(0.0), Color::Rgb(221, 221, 221));
        assert_eq!(coolwarm(1.0), Color::Rgb(180, 4, 38));
    }

    #[test]
    fn test_coolwarm_clamps() {
        assert_eq!(coolwarm(5.0), coolwarm(1.0));
        assert_eq!(coolwarm(-5.0), coolwarm(-1.0));
    }

    #[test]
    fn test_text_contrast_flips_on_saturated_cells() {
        assert_eq!(coolwarm_text(0.1), Color::Black);
        assert_eq!(coolwarm_text(0.9), Color::White);
        assert_eq!(coolwarm_text(-0.9), Color::White);
    }
}
