use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct DialogInputProvider {
    title: String,
    multi_field: bool,
}

impl DialogInputProvider {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            multi_field: false,
        }
    }

    pub fn with_fields(mut self) -> Self {
        self.multi_field = true;
        self
    }
}

impl KeybindingProvider for DialogInputProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("Enter", "confirm", "Apply", KeybindingAction::Confirm),
            Keybinding::new("Esc", "cancel", "Close without changes", KeybindingAction::Escape),
        ];
        if self.multi_field {
            bindings.push(Keybinding::new(
                "Tab",
                "next field",
                "Move to the next field",
                KeybindingAction::NextField,
            ));
        }
        KeybindingContext::new(self.title.clone(), bindings)
    }
}
