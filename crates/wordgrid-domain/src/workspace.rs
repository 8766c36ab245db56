use crate::grid::{CellView, GridConfig, GridData};
use crate::sanitize::apply_keystroke;
use crate::select::SelectMode;
use crate::storage;
use crate::theme::ThemeMode;
use crate::todo::TodoList;
use rand::{Rng, RngCore};
use wordgrid_core::{KeyValueStore, WordGridResult};

/// All state behind one session: the single authoritative model that every
/// handler mutates and every frame is rendered from.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: GridConfig,
    pub grid_data: GridData,
    pub theme: ThemeMode,
    pub todos: TodoList,
    pub select: SelectMode,
    pub settings_visible: bool,
    todo_marker: String,
}

impl Workspace {
    pub fn new(todo_marker: impl Into<String>) -> Self {
        Self {
            config: GridConfig::default(),
            grid_data: GridData::new(),
            theme: ThemeMode::default(),
            todos: TodoList::new(),
            select: SelectMode::new(),
            settings_visible: true,
            todo_marker: todo_marker.into(),
        }
    }

    /// Rebuild the whole model from the store. Never fails: every missing or
    /// unreadable key falls back to its default.
    pub fn load(store: &dyn KeyValueStore, todo_marker: impl Into<String>) -> Self {
        let defaults = GridConfig::default();
        let config = GridConfig::new(
            storage::read_number(store, storage::ROWS, defaults.rows),
            storage::read_number(store, storage::COLS, defaults.cols),
            storage::read_number(store, storage::CELL_WIDTH, defaults.cell_width),
            storage::read_number(store, storage::CELL_HEIGHT, defaults.cell_height),
        );
        let theme = ThemeMode::from_stored(store.get(storage::THEME_MODE).as_deref());
        let todos = TodoList::from_items(storage::read_json_or_default(store, storage::TODO_LIST));
        let grid_data: GridData = storage::read_json_or_default(store, storage::GRID_DATA);

        tracing::info!(
            "Loaded {}x{} grid ({} stored cells), {} theme, {} to-dos",
            config.rows,
            config.cols,
            grid_data.len(),
            theme,
            todos.len()
        );

        Self {
            config,
            grid_data,
            theme,
            todos,
            select: SelectMode::new(),
            settings_visible: true,
            todo_marker: todo_marker.into(),
        }
    }

    pub fn todo_marker(&self) -> &str {
        &self.todo_marker
    }

    // ---- GridManager ----

    /// Replace the rendered grid with a fresh one for `config`.
    ///
    /// Highlights belong to the discarded cells and are dropped; stored
    /// letters are kept, including ones outside the new bounds.
    pub fn create_grid(&mut self, config: GridConfig) {
        self.config = config;
        self.select.reset_highlights();
        tracing::debug!(
            "Created {}x{} grid with {}x{}px cells",
            config.rows,
            config.cols,
            config.cell_width,
            config.cell_height
        );
    }

    /// Persist new row/column counts and rebuild the grid
    pub fn resize_grid(
        &mut self,
        store: &mut dyn KeyValueStore,
        rows: usize,
        cols: usize,
    ) -> WordGridResult<()> {
        let config = self.config.with_dimensions(rows, cols);
        storage::write_batch(
            store,
            &[
                (storage::ROWS, config.rows.to_string()),
                (storage::COLS, config.cols.to_string()),
            ],
        )?;
        self.create_grid(config);
        tracing::info!("Resized grid to {}x{}", config.rows, config.cols);
        Ok(())
    }

    /// Persist new dimensions and cell size together, then rebuild the grid
    pub fn resize_cells(
        &mut self,
        store: &mut dyn KeyValueStore,
        rows: usize,
        cols: usize,
        cell_width: u32,
        cell_height: u32,
    ) -> WordGridResult<()> {
        let config = GridConfig::new(rows, cols, cell_width, cell_height);
        storage::write_batch(
            store,
            &[
                (storage::ROWS, config.rows.to_string()),
                (storage::COLS, config.cols.to_string()),
                (storage::CELL_WIDTH, config.cell_width.to_string()),
                (storage::CELL_HEIGHT, config.cell_height.to_string()),
            ],
        )?;
        self.create_grid(config);
        tracing::info!(
            "Resized cells to {}x{}px",
            config.cell_width,
            config.cell_height
        );
        Ok(())
    }

    /// Letter shown in cell `index`, empty outside the grid
    pub fn cell_letter(&self, index: usize) -> &str {
        if self.config.contains(index) {
            self.grid_data.get(index)
        } else {
            ""
        }
    }

    /// Feed one keystroke into cell `index`.
    ///
    /// Returns `Ok(false)` when the cell does not exist or is read-only and
    /// nothing changed.
    pub fn type_into_cell(
        &mut self,
        store: &mut dyn KeyValueStore,
        index: usize,
        typed: char,
    ) -> WordGridResult<bool> {
        if !self.config.contains(index) || self.select.cells_read_only() {
            return Ok(false);
        }
        let value = apply_keystroke(self.grid_data.get(index), typed);
        self.write_cell(store, index, value)?;
        Ok(true)
    }

    /// Erase the letter in cell `index`
    pub fn clear_cell(
        &mut self,
        store: &mut dyn KeyValueStore,
        index: usize,
    ) -> WordGridResult<bool> {
        if !self.config.contains(index) || self.select.cells_read_only() {
            return Ok(false);
        }
        self.write_cell(store, index, String::new())?;
        Ok(true)
    }

    fn write_cell(
        &mut self,
        store: &mut dyn KeyValueStore,
        index: usize,
        value: String,
    ) -> WordGridResult<()> {
        let mut next = self.grid_data.clone();
        next.set(index, value);
        self.commit_grid_data(store, next)
    }

    /// Persist `next` and adopt it; on a failed write the model stays as it was
    fn commit_grid_data(
        &mut self,
        store: &mut dyn KeyValueStore,
        next: GridData,
    ) -> WordGridResult<()> {
        storage::write_json(store, storage::GRID_DATA, &next)?;
        self.grid_data = next;
        Ok(())
    }

    /// Project the grid into per-cell views in row-major order
    pub fn cells(&self) -> Vec<CellView> {
        (0..self.config.cell_count())
            .map(|index| self.cell_view(index))
            .collect()
    }

    pub fn cell_view(&self, index: usize) -> CellView {
        let cols = self.config.cols;
        CellView {
            index,
            row: index / cols,
            col: index % cols,
            letter: self.cell_letter(index).to_string(),
            highlighted: self.select.is_highlighted(index),
            read_only: self.select.cells_read_only(),
        }
    }

    // ---- AutoFill / ClearFill ----

    /// Put a random letter in every rendered cell, persisting once
    pub fn auto_fill(
        &mut self,
        store: &mut dyn KeyValueStore,
        rng: &mut dyn RngCore,
    ) -> WordGridResult<()> {
        let mut next = self.grid_data.clone();
        for index in 0..self.config.cell_count() {
            let letter = char::from(rng.gen_range(b'A'..=b'Z'));
            next.set(index, letter.to_string());
        }
        self.commit_grid_data(store, next)?;
        tracing::info!("Auto-filled {} cells", self.config.cell_count());
        Ok(())
    }

    /// Blank every rendered cell, persisting once
    pub fn clear_fill(&mut self, store: &mut dyn KeyValueStore) -> WordGridResult<()> {
        let mut next = self.grid_data.clone();
        for index in 0..self.config.cell_count() {
            next.set(index, String::new());
        }
        self.commit_grid_data(store, next)?;
        tracing::info!("Cleared {} cells", self.config.cell_count());
        Ok(())
    }

    // ---- ThemeToggle ----

    pub fn toggle_theme(&mut self, store: &mut dyn KeyValueStore) -> WordGridResult<ThemeMode> {
        let next = self.theme.toggled();
        store.set(storage::THEME_MODE, next.as_str().to_string())?;
        self.theme = next;
        tracing::info!("Switched to {} theme", self.theme);
        Ok(self.theme)
    }

    // ---- TodoList ----

    /// Add a to-do from raw user text. Returns the stored display text, or
    /// `None` for blank input (in which case nothing is written).
    pub fn add_todo(
        &mut self,
        store: &mut dyn KeyValueStore,
        raw: &str,
    ) -> WordGridResult<Option<String>> {
        let Some(display_text) = TodoList::decorate(&self.todo_marker, raw) else {
            return Ok(None);
        };
        let mut next = self.todos.clone();
        next.push(display_text.clone());
        storage::write_json(store, storage::TODO_LIST, next.items())?;
        self.todos = next;
        tracing::info!("Added to-do '{}'", display_text);
        Ok(Some(display_text))
    }

    /// Remove the first to-do whose display text matches. Returns whether
    /// anything was removed; a miss writes nothing.
    pub fn remove_todo(
        &mut self,
        store: &mut dyn KeyValueStore,
        display_text: &str,
    ) -> WordGridResult<bool> {
        let mut next = self.todos.clone();
        if next.remove_first(display_text).is_none() {
            tracing::debug!("No to-do matching '{}'", display_text);
            return Ok(false);
        }
        storage::write_json(store, storage::TODO_LIST, next.items())?;
        self.todos = next;
        tracing::info!("Removed to-do '{}'", display_text);
        Ok(true)
    }

    /// Drop every to-do and delete the stored list key
    pub fn clear_todos(&mut self, store: &mut dyn KeyValueStore) -> WordGridResult<()> {
        store.remove(storage::TODO_LIST)?;
        self.todos.clear();
        tracing::info!("Cleared to-do list");
        Ok(())
    }

    // ---- SelectMode ----

    pub fn toggle_select_mode(&mut self) -> bool {
        let enabled = self.select.toggle();
        tracing::debug!("Select mode {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Activate cell `index`: flips its highlight in select mode, otherwise
    /// does nothing
    pub fn click_cell(&mut self, index: usize) -> Option<bool> {
        if !self.config.contains(index) {
            return None;
        }
        self.select.click(index)
    }

    pub fn clear_highlights(&mut self) {
        self.select.clear();
        tracing::debug!("Cleared highlights and left select mode");
    }

    // ---- Settings panel ----

    pub fn toggle_settings(&mut self) -> bool {
        self.settings_visible = !self.settings_visible;
        self.settings_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use wordgrid_persistence::MemoryStore;

    fn workspace() -> Workspace {
        Workspace::new("💡")
    }

    #[test]
    fn test_load_defaults_from_empty_store() {
        let store = MemoryStore::new();
        let ws = Workspace::load(&store, "💡");
        assert_eq!(ws.config, GridConfig::default());
        assert_eq!(ws.theme, ThemeMode::Light);
        assert!(ws.todos.is_empty());
        assert!(ws.grid_data.is_empty());
        assert!(!ws.select.is_enabled());
    }

    #[test]
    fn test_load_clamps_stored_zero_dimensions() {
        let store: MemoryStore = [("rows", "0"), ("cols", "abc")].into_iter().collect();
        let ws = Workspace::load(&store, "💡");
        assert_eq!(ws.config.rows, 1);
        assert_eq!(ws.config.cols, 25);
    }

    #[test]
    fn test_resize_keeps_cell_size_and_stale_letters() {
        let mut store = MemoryStore::new();
        let mut ws = workspace();
        ws.resize_cells(&mut store, 5, 5, 30, 40).unwrap();
        ws.type_into_cell(&mut store, 24, 'q').unwrap();

        ws.resize_grid(&mut store, 2, 2).unwrap();
        assert_eq!(ws.config.cell_width, 30);
        assert_eq!(ws.config.cell_height, 40);
        assert_eq!(ws.cell_letter(24), "");
        assert_eq!(ws.grid_data.get(24), "Q");

        ws.resize_grid(&mut store, 5, 5).unwrap();
        assert_eq!(ws.cell_letter(24), "Q");
    }

    #[test]
    fn test_resize_drops_highlights() {
        let mut store = MemoryStore::new();
        let mut ws = workspace();
        ws.toggle_select_mode();
        ws.click_cell(0);
        ws.resize_grid(&mut store, 3, 3).unwrap();
        assert!(!ws.select.is_highlighted(0));
        assert!(ws.select.is_enabled());
    }

    #[test]
    fn test_typing_outside_grid_is_ignored() {
        let mut store = MemoryStore::new();
        let mut ws = workspace();
        ws.resize_grid(&mut store, 2, 2).unwrap();
        assert!(!ws.type_into_cell(&mut store, 4, 'a').unwrap());
        assert!(!store.contains(storage::GRID_DATA));
    }

    #[test]
    fn test_clear_cell() {
        let mut store = MemoryStore::new();
        let mut ws = workspace();
        ws.type_into_cell(&mut store, 3, 'h').unwrap();
        assert!(ws.clear_cell(&mut store, 3).unwrap());
        assert_eq!(ws.cell_letter(3), "");
        assert_eq!(store.get(storage::GRID_DATA).as_deref(), Some(r#"{"3":""}"#));
    }

    #[test]
    fn test_auto_fill_is_deterministic_with_fixed_rng() {
        let mut store = MemoryStore::new();
        let mut ws = workspace();
        ws.resize_grid(&mut store, 1, 3).unwrap();
        let mut rng = StepRng::new(0, 0);
        ws.auto_fill(&mut store, &mut rng).unwrap();

        let letters: Vec<_> = ws.cells().into_iter().map(|c| c.letter).collect();
        assert_eq!(letters.len(), 3);
        assert!(letters.iter().all(|l| l == &letters[0]));
    }

    #[test]
    fn test_cells_projection() {
        let mut store = MemoryStore::new();
        let mut ws = workspace();
        ws.resize_grid(&mut store, 2, 3).unwrap();
        ws.type_into_cell(&mut store, 5, 'z').unwrap();
        ws.toggle_select_mode();
        ws.click_cell(4);

        let cells = ws.cells();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5].letter, "Z");
        assert_eq!((cells[5].row, cells[5].col), (1, 2));
        assert!(cells[4].highlighted);
        assert!(cells.iter().all(|c| c.read_only));
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut ws = workspace();
        ws.toggle_select_mode();
        assert_eq!(ws.click_cell(10_000), None);
    }

    #[test]
    fn test_toggle_settings() {
        let mut ws = workspace();
        assert!(ws.settings_visible);
        assert!(!ws.toggle_settings());
        assert!(ws.toggle_settings());
    }
}
