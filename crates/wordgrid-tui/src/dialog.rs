use crossterm::event::KeyCode;
use wordgrid_core::InputState;

pub enum DialogAction {
    None,
    Cancel,
    Confirm,
    NextField,
    PrevField,
}

pub fn handle_dialog_input(
    input: &mut InputState,
    key_code: KeyCode,
    allow_empty: bool,
) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if allow_empty || !input.as_str().trim().is_empty() {
                DialogAction::Confirm
            } else {
                DialogAction::None
            }
        }
        KeyCode::Tab | KeyCode::Down => DialogAction::NextField,
        KeyCode::BackTab | KeyCode::Up => DialogAction::PrevField,
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

/// Labelled text fields edited together in one popup
#[derive(Debug, Clone)]
pub struct FieldForm {
    labels: Vec<&'static str>,
    fields: Vec<InputState>,
    active: usize,
}

impl FieldForm {
    pub fn new(entries: &[(&'static str, String)]) -> Self {
        let (labels, fields) = entries
            .iter()
            .map(|(label, value)| {
                let mut input = InputState::with_max_chars(6);
                input.set(value.clone());
                (*label, input)
            })
            .unzip();
        Self {
            labels,
            fields,
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_input(&mut self) -> &mut InputState {
        &mut self.fields[self.active]
    }

    pub fn next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(InputState::as_str).unwrap_or("")
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &InputState)> {
        self.labels.iter().copied().zip(self.fields.iter())
    }
}
