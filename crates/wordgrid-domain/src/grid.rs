use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 25;
pub const DEFAULT_CELL_WIDTH: u32 = 25;
pub const DEFAULT_CELL_HEIGHT: u32 = 25;

pub const MAX_DIMENSION: usize = 500;
pub const MAX_CELL_SIZE: u32 = 400;

/// Grid dimensions and per-cell pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Build a config, clamping every value into its usable range
    pub fn new(rows: usize, cols: usize, cell_width: u32, cell_height: u32) -> Self {
        Self {
            rows: clamp_dimension(rows),
            cols: clamp_dimension(cols),
            cell_width: clamp_cell_size(cell_width),
            cell_height: clamp_cell_size(cell_height),
        }
    }

    pub fn with_dimensions(self, rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, self.cell_width, self.cell_height)
    }

    pub fn with_cell_size(self, cell_width: u32, cell_height: u32) -> Self {
        Self::new(self.rows, self.cols, cell_width, cell_height)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index of `(row, col)`, or `None` outside the grid
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cell_count()).then(|| (index / self.cols, index % self.cols))
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.cell_count()
    }
}

pub fn clamp_dimension(value: usize) -> usize {
    value.clamp(1, MAX_DIMENSION)
}

pub fn clamp_cell_size(value: u32) -> u32 {
    value.clamp(1, MAX_CELL_SIZE)
}

/// Parse user-entered dimension text, keeping `fallback` for anything that
/// is not a non-negative integer
pub fn parse_dimension(text: &str, fallback: usize) -> usize {
    text.trim()
        .parse::<usize>()
        .map(clamp_dimension)
        .unwrap_or(fallback)
}

pub fn parse_cell_size(text: &str, fallback: u32) -> u32 {
    text.trim()
        .parse::<u32>()
        .map(clamp_cell_size)
        .unwrap_or(fallback)
}

/// Letters entered into the grid, keyed by row-major cell index
///
/// Entries outside the current grid are kept: shrinking and regrowing a grid
/// brings old letters back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridData {
    cells: BTreeMap<usize, String>,
}

impl GridData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter at `index`; empty when nothing was entered there
    pub fn get(&self, index: usize) -> &str {
        self.cells.get(&index).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        self.cells.insert(index, value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains_key(&self, index: usize) -> bool {
        self.cells.contains_key(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cells.iter().map(|(i, v)| (*i, v.as_str()))
    }
}

impl Serialize for GridData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Object keys are decimal strings, matching the stored layout
        let as_strings: BTreeMap<String, &str> = self
            .cells
            .iter()
            .map(|(i, v)| (i.to_string(), v.as_str()))
            .collect();
        as_strings.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GridData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let cells = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let index = key.trim().parse::<usize>().ok()?;
                let letter = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    _ => return None,
                };
                Some((index, letter))
            })
            .collect();
        Ok(Self { cells })
    }
}

/// What a single rendered cell looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub letter: String,
    pub highlighted: bool,
    pub read_only: bool,
}
