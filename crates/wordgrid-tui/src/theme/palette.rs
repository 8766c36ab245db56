use ratatui::style::Color;
use wordgrid_domain::ThemeMode;

pub const HIGHLIGHT_BG: Color = Color::Rgb(220, 20, 60);
pub const ERROR_COLOR: Color = Color::Red;

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub label: Color,
    pub accent: Color,
    pub focused_border: Color,
    pub unfocused_border: Color,
    pub cell_bg: Color,
    pub cell_text: Color,
    pub cursor_bg: Color,
    pub selected_bg: Color,
    pub popup_bg: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(24, 24, 28),
    text: Color::White,
    label: Color::DarkGray,
    accent: Color::Yellow,
    focused_border: Color::Cyan,
    unfocused_border: Color::Gray,
    cell_bg: Color::Rgb(44, 44, 52),
    cell_text: Color::White,
    cursor_bg: Color::Blue,
    selected_bg: Color::Blue,
    popup_bg: Color::Black,
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(245, 245, 240),
    text: Color::Black,
    label: Color::Gray,
    accent: Color::Magenta,
    focused_border: Color::Blue,
    unfocused_border: Color::DarkGray,
    cell_bg: Color::Rgb(225, 225, 215),
    cell_text: Color::Black,
    cursor_bg: Color::LightBlue,
    selected_bg: Color::LightBlue,
    popup_bg: Color::White,
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}
