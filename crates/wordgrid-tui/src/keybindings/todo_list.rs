use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct TodoListProvider;

impl KeybindingProvider for TodoListProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "To-Do List",
            vec![
                Keybinding::new("?", "help", "Show help", KeybindingAction::ShowHelp),
                Keybinding::new("a", "add", "Add a to-do", KeybindingAction::AddTodo),
                Keybinding::new("d/x", "remove", "Remove selected to-do", KeybindingAction::RemoveTodo),
                Keybinding::new("C", "clear", "Remove all to-dos", KeybindingAction::ClearTodos),
                Keybinding::new("j/↓", "down", "Navigate down", KeybindingAction::NavigateDown),
                Keybinding::new("k/↑", "up", "Navigate up", KeybindingAction::NavigateUp),
                Keybinding::new("t", "theme", "Toggle dark/light theme", KeybindingAction::ToggleTheme),
                Keybinding::new("Tab", "grid", "Focus the grid", KeybindingAction::SwitchFocus),
                Keybinding::new("q", "quit", "Quit application", KeybindingAction::Quit),
            ],
        )
    }
}
