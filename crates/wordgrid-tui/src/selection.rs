/// Cursor into a list that can shrink underneath it
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    pub fn next(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(max_count - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Keep the selection inside a list of `len` items, clearing it when the
    /// list is empty
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_end() {
        let mut selection = SelectionState::new();
        selection.next(2);
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_next_on_empty_list_is_noop() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selection = SelectionState::new();
        selection.set(Some(4));
        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
    }
}
