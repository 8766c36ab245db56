use super::{
    dialog_modes::DialogInputProvider, grid::GridProvider, todo_list::TodoListProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode, Focus};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        Self::get_provider_for_mode(&app.mode, app.focus, app.workspace.select.is_enabled())
    }

    fn get_provider_for_mode(
        mode: &AppMode,
        focus: Focus,
        select_mode: bool,
    ) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Normal => match focus {
                Focus::Grid => Box::new(GridProvider::new(select_mode)),
                Focus::Todos => Box::new(TodoListProvider),
            },
            AppMode::ResizeGrid => Box::new(DialogInputProvider::new("Rows & Columns").with_fields()),
            AppMode::ResizeCells => Box::new(DialogInputProvider::new("Cell Size").with_fields()),
            AppMode::AddTodo => Box::new(DialogInputProvider::new("Add To-Do")),
            AppMode::Help(previous_mode) => {
                Self::get_provider_for_mode(previous_mode, focus, select_mode)
            }
        }
    }
}
