use crate::app::{App, AppMode, Focus, StatusMessage};
use crate::dialog::FieldForm;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wordgrid_domain::commands::{
    AutoFill, ClearCell, ClearFill, ClearHighlights, ClickCell, ToggleSelectMode,
    ToggleSettings, ToggleTheme, TypeLetter,
};

impl App {
    pub fn handle_grid_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = key.code {
                self.handle_grid_shortcut(c.to_ascii_lowercase());
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::Todos,
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Home => self.cursor.1 = 0,
            KeyCode::End => self.cursor.1 = self.workspace.config.cols - 1,
            KeyCode::PageUp => self.cursor.0 = 0,
            KeyCode::PageDown => self.cursor.0 = self.workspace.config.rows - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor_cell(),
            KeyCode::Backspace | KeyCode::Delete => self.handle_clear_cell_key(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.handle_type_letter_key(c)
            }
            _ => {}
        }
    }

    fn handle_grid_shortcut(&mut self, c: char) {
        match c {
            'r' => self.open_resize_grid_form(),
            'w' => self.open_resize_cells_form(),
            't' => {
                self.execute(&ToggleTheme);
            }
            's' => {
                self.execute(&ToggleSelectMode);
                let state = if self.workspace.select.is_enabled() {
                    "ON"
                } else {
                    "OFF"
                };
                self.status = Some(StatusMessage::info(format!("Select Mode: {state}")));
            }
            'x' => {
                self.execute(&ClearHighlights);
                self.status = Some(StatusMessage::info("Highlights cleared"));
            }
            'g' => {
                if self.execute(&AutoFill) {
                    self.status = Some(StatusMessage::info("Filled grid with random letters"));
                }
            }
            'e' => {
                if self.execute(&ClearFill) {
                    self.status = Some(StatusMessage::info("Cleared all letters"));
                }
            }
            'o' => {
                self.execute(&ToggleSettings);
            }
            _ => {}
        }
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let config = self.workspace.config;
        let row = self.cursor.0.saturating_add_signed(d_row).min(config.rows - 1);
        let col = self.cursor.1.saturating_add_signed(d_col).min(config.cols - 1);
        self.cursor = (row, col);
    }

    /// Click on the cursor cell: toggles its highlight in select mode
    pub fn activate_cursor_cell(&mut self) {
        if let Some(index) = self.cursor_index() {
            self.execute(&ClickCell { index });
        }
    }

    fn handle_type_letter_key(&mut self, typed: char) {
        let Some(index) = self.cursor_index() else {
            return;
        };
        if self.workspace.select.cells_read_only() {
            self.status = Some(StatusMessage::info(
                "Select mode is on: cells are read-only (^S to edit)",
            ));
            return;
        }
        self.execute(&TypeLetter { index, typed });
    }

    fn handle_clear_cell_key(&mut self) {
        let Some(index) = self.cursor_index() else {
            return;
        };
        if self.workspace.select.cells_read_only() {
            return;
        }
        self.execute(&ClearCell { index });
    }

    pub fn open_resize_grid_form(&mut self) {
        let config = self.workspace.config;
        self.form = Some(FieldForm::new(&[
            ("Rows", config.rows.to_string()),
            ("Columns", config.cols.to_string()),
        ]));
        self.mode = AppMode::ResizeGrid;
    }

    pub fn open_resize_cells_form(&mut self) {
        let config = self.workspace.config;
        self.form = Some(FieldForm::new(&[
            ("Rows", config.rows.to_string()),
            ("Columns", config.cols.to_string()),
            ("Cell width (px)", config.cell_width.to_string()),
            ("Cell height (px)", config.cell_height.to_string()),
        ]));
        self.mode = AppMode::ResizeCells;
    }
}
