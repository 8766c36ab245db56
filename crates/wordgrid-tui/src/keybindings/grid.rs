use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct GridProvider {
    select_mode: bool,
}

impl GridProvider {
    pub fn new(select_mode: bool) -> Self {
        Self { select_mode }
    }
}

impl KeybindingProvider for GridProvider {
    fn get_context(&self) -> KeybindingContext {
        let (name, activate) = if self.select_mode {
            ("Grid - Select Mode", "Toggle highlight on cell")
        } else {
            ("Grid - Edit Mode", "Activate cell")
        };

        KeybindingContext::new(
            name,
            vec![
                Keybinding::new("F1", "help", "Show help", KeybindingAction::ShowHelp),
                Keybinding::new("A-Z", "type", "Type a letter into the cell", KeybindingAction::TypeLetter),
                Keybinding::new("←↑↓→", "move", "Move the cell cursor", KeybindingAction::MoveCursor),
                Keybinding::new("Enter/Space", "mark", activate, KeybindingAction::ActivateCell),
                Keybinding::new("Bksp/Del", "erase", "Clear the cell", KeybindingAction::ClearCell),
                Keybinding::new("^R", "rows/cols", "Change rows and columns", KeybindingAction::ResizeGrid),
                Keybinding::new("^W", "cell size", "Change cell width and height", KeybindingAction::ResizeCells),
                Keybinding::new("^G", "fill", "Fill grid with random letters", KeybindingAction::AutoFill),
                Keybinding::new("^E", "blank", "Clear all letters", KeybindingAction::ClearFill),
                Keybinding::new("^S", "select", "Toggle select mode", KeybindingAction::ToggleSelectMode),
                Keybinding::new("^X", "unmark", "Clear highlights and leave select mode", KeybindingAction::ClearHighlights),
                Keybinding::new("^T", "theme", "Toggle dark/light theme", KeybindingAction::ToggleTheme),
                Keybinding::new("^O", "settings", "Show/hide settings panel", KeybindingAction::ToggleSettings),
                Keybinding::new("Tab", "to-dos", "Focus the to-do list", KeybindingAction::SwitchFocus),
                Keybinding::new("^Q", "quit", "Quit application", KeybindingAction::Quit),
            ],
        )
    }
}
