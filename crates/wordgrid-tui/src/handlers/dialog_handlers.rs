use crate::app::{App, AppMode, StatusMessage};
use crate::dialog::{handle_dialog_input, DialogAction};
use crossterm::event::KeyEvent;
use wordgrid_domain::commands::{AddTodo, ResizeCells, ResizeGrid};
use wordgrid_domain::grid::{parse_cell_size, parse_dimension};

impl App {
    pub fn handle_add_todo_key(&mut self, key: KeyEvent) {
        match handle_dialog_input(&mut self.todo_input, key.code, true) {
            DialogAction::Cancel => self.mode = AppMode::Normal,
            DialogAction::Confirm => self.submit_todo(),
            _ => {}
        }
    }

    fn submit_todo(&mut self) {
        let before = self.workspace.todos.len();
        let text = self.todo_input.as_str().to_string();
        if !self.execute(&AddTodo { text }) {
            return;
        }
        if self.workspace.todos.len() == before {
            self.status = Some(StatusMessage::info("Nothing to add"));
            return;
        }
        self.todo_input.clear();
        self.todo_selection.jump_to_last(self.workspace.todos.len());
        self.mode = AppMode::Normal;
    }

    pub fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };
        match handle_dialog_input(form.active_input(), key.code, true) {
            DialogAction::Cancel => self.close_form(),
            DialogAction::NextField => form.next_field(),
            DialogAction::PrevField => form.prev_field(),
            DialogAction::Confirm => self.submit_form(),
            DialogAction::None => {}
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        let current = self.workspace.config;
        let rows = parse_dimension(form.value(0), current.rows);
        let cols = parse_dimension(form.value(1), current.cols);

        let applied = match self.mode {
            AppMode::ResizeCells => {
                let cell_width = parse_cell_size(form.value(2), current.cell_width);
                let cell_height = parse_cell_size(form.value(3), current.cell_height);
                self.execute(&ResizeCells {
                    rows,
                    cols,
                    cell_width,
                    cell_height,
                })
            }
            _ => self.execute(&ResizeGrid { rows, cols }),
        };

        self.clamp_cursor();
        self.mode = AppMode::Normal;
        if applied {
            let config = self.workspace.config;
            self.status = Some(StatusMessage::info(format!(
                "Grid is {}x{} ({}x{}px cells)",
                config.rows, config.cols, config.cell_width, config.cell_height
            )));
        }
    }

    fn close_form(&mut self) {
        self.form = None;
        self.mode = AppMode::Normal;
    }
}
