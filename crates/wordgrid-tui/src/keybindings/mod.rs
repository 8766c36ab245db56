pub mod dialog_modes;
pub mod grid;
pub mod registry;
pub mod todo_list;

pub use registry::KeybindingRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    NavigateDown,
    NavigateUp,
    MoveCursor,
    TypeLetter,
    ClearCell,
    ActivateCell,
    ResizeGrid,
    ResizeCells,
    ToggleTheme,
    ToggleSelectMode,
    ClearHighlights,
    AutoFill,
    ClearFill,
    ToggleSettings,
    AddTodo,
    RemoveTodo,
    ClearTodos,
    SwitchFocus,
    ShowHelp,
    Confirm,
    NextField,
    Escape,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    pub description: String,
    pub action: KeybindingAction,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
        action: KeybindingAction,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
            action,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// One-line hint for the footer, e.g. `^T theme | ^S select`
    pub fn footer_hint(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{} {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}
