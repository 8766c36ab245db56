/// Single-line text buffer backing the dialog inputs.
///
/// The cursor counts characters, not bytes, so multi-byte input such as the
/// to-do marker never splits a code point.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
    max_chars: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer that refuses input past `max_chars` characters
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        if self.max_chars.is_some_and(|max| self.char_count() >= max) {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        self.buffer.insert(offset, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.buffer.remove(offset);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.buffer.remove(offset);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: impl Into<String>) {
        let mut text: String = text.into();
        if let Some(max) = self.max_chars {
            text = text.chars().take(max).collect();
        }
        self.buffer = text;
        self.cursor = self.char_count();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}
