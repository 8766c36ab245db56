use crate::theme::{border, Palette};
use ratatui::widgets::{Block, Borders};

pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub focused_title: &'a str,
    pub is_focused: bool,
    pub palette: Palette,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str, palette: Palette) -> Self {
        Self {
            title,
            focused_title: title,
            is_focused: false,
            palette,
        }
    }

    pub fn with_focus_indicator(mut self, focused_title: &'a str) -> Self {
        self.focused_title = focused_title;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn title_text(&self) -> &'a str {
        if self.is_focused {
            self.focused_title
        } else {
            self.title
        }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(border(&self.palette, self.is_focused))
            .title(self.title_text())
    }
}
