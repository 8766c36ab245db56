/// Ordered to-do entries, each stored with its decorative marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Display text for `raw`, or `None` when there is nothing but whitespace.
    ///
    /// Emptiness is judged on the trimmed user text before the marker is
    /// attached, so a lone marker never becomes an entry.
    pub fn decorate(marker: &str, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("{marker}{trimmed}"))
        }
    }

    pub fn push(&mut self, display_text: String) {
        self.items.push(display_text);
    }

    /// Remove the first entry equal to `display_text`. Returns its position.
    pub fn remove_first(&mut self, display_text: &str) -> Option<usize> {
        let position = self.items.iter().position(|item| item == display_text)?;
        self.items.remove(position);
        Some(position)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
