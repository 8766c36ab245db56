use super::palette::{Palette, ERROR_COLOR, HIGHLIGHT_BG};
use ratatui::style::{Color, Modifier, Style};
use wordgrid_domain::{CellView, CursorAffordance};

pub fn base(palette: &Palette) -> Style {
    Style::default().fg(palette.text).bg(palette.background)
}

pub fn border(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().fg(palette.focused_border)
    } else {
        Style::default().fg(palette.unfocused_border)
    }
}

pub fn normal_text(palette: &Palette) -> Style {
    Style::default().fg(palette.text)
}

pub fn label_text(palette: &Palette) -> Style {
    Style::default().fg(palette.label)
}

pub fn bold_highlight(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().bg(palette.selected_bg)
    } else {
        Style::default()
    }
}

pub fn popup_bg(palette: &Palette) -> Style {
    Style::default().bg(palette.popup_bg).fg(palette.text)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
}

/// Style of one grid cell. Highlight wins over the cursor background so a
/// marked letter stays visible while the cursor sits on it.
///
/// `cursor` is set on the cell under the cursor: a text caret shows as a
/// plain background, the select-mode pointer adds an underline. Read-only
/// cells draw their letters muted.
pub fn cell_style(palette: &Palette, cell: &CellView, cursor: Option<CursorAffordance>) -> Style {
    let mut style = Style::default()
        .fg(palette.cell_text)
        .bg(palette.cell_bg)
        .add_modifier(Modifier::BOLD);
    if cell.read_only {
        style = style.fg(palette.label);
    }
    if cursor.is_some() {
        style = style.bg(palette.cursor_bg);
    }
    if cell.highlighted {
        style = style.bg(HIGHLIGHT_BG).fg(Color::White);
    }
    if cursor == Some(CursorAffordance::Pointer) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_domain::ThemeMode;

    fn cell(highlighted: bool, read_only: bool) -> CellView {
        CellView {
            index: 0,
            row: 0,
            col: 0,
            letter: "A".to_string(),
            highlighted,
            read_only,
        }
    }

    #[test]
    fn test_text_cursor_only_changes_background() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let style = cell_style(&palette, &cell(false, false), Some(CursorAffordance::Text));
        assert_eq!(style.bg, Some(palette.cursor_bg));
        assert_eq!(style.fg, Some(palette.cell_text));
        assert!(!style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_pointer_cursor_is_underlined() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        let style = cell_style(&palette, &cell(false, true), Some(CursorAffordance::Pointer));
        assert_eq!(style.bg, Some(palette.cursor_bg));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_read_only_cells_are_muted() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let style = cell_style(&palette, &cell(false, true), None);
        assert_eq!(style.fg, Some(palette.label));
        assert_eq!(style.bg, Some(palette.cell_bg));
    }

    #[test]
    fn test_highlight_wins_over_cursor() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let style = cell_style(&palette, &cell(true, true), Some(CursorAffordance::Pointer));
        assert_eq!(style.bg, Some(HIGHLIGHT_BG));
        assert_eq!(style.fg, Some(Color::White));
    }
}
