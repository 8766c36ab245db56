use crate::app::{App, AppMode, Focus, StatusMessage};
use crossterm::event::{KeyCode, KeyEvent};
use wordgrid_domain::commands::{ClearTodos, RemoveTodo, ToggleTheme};

impl App {
    pub fn handle_todo_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.focus = Focus::Grid,
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.mode = AppMode::AddTodo;
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                self.remove_selected_todo()
            }
            KeyCode::Char('C') => self.clear_todos(),
            KeyCode::Char('t') => {
                self.execute(&ToggleTheme);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.todo_selection.next(self.workspace.todos.len())
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.workspace.todos.is_empty() {
                    self.todo_selection.prev()
                }
            }
            _ => {}
        }
    }

    pub fn remove_selected_todo(&mut self) {
        let Some(display_text) = self
            .todo_selection
            .get()
            .and_then(|idx| self.workspace.todos.get(idx))
            .map(str::to_string)
        else {
            return;
        };
        self.execute(&RemoveTodo { display_text });
        self.todo_selection.clamp(self.workspace.todos.len());
    }

    pub fn clear_todos(&mut self) {
        if self.execute(&ClearTodos) {
            self.todo_input.clear();
            self.todo_selection.clear();
            self.status = Some(StatusMessage::info("To-do list cleared"));
        }
    }
}
