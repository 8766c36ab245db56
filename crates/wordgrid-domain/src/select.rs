use std::collections::BTreeSet;

/// Pointer shown over grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    Text,
    Pointer,
}

/// Select mode flag and the set of highlighted cells.
///
/// Highlights are presentation only and never reach the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectMode {
    enabled: bool,
    highlighted: BTreeSet<usize>,
}

impl SelectMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the mode and return the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Cells refuse text edits while select mode is on
    pub fn cells_read_only(&self) -> bool {
        self.enabled
    }

    pub fn affordance(&self) -> CursorAffordance {
        if self.enabled {
            CursorAffordance::Pointer
        } else {
            CursorAffordance::Text
        }
    }

    /// Flip the highlight on `index`. Returns the new highlight state, or
    /// `None` when select mode is off and the click is ignored.
    pub fn click(&mut self, index: usize) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        if self.highlighted.remove(&index) {
            Some(false)
        } else {
            self.highlighted.insert(index);
            Some(true)
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    /// Drop every highlight without touching the mode
    pub fn reset_highlights(&mut self) {
        self.highlighted.clear();
    }

    /// Drop every highlight and leave select mode
    pub fn clear(&mut self) {
        self.highlighted.clear();
        self.enabled = false;
    }
}
