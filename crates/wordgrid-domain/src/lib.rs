pub mod commands;
pub mod grid;
pub mod sanitize;
pub mod select;
pub mod storage;
pub mod theme;
pub mod todo;
pub mod workspace;

pub use grid::{CellView, GridConfig, GridData};
pub use sanitize::{apply_keystroke, sanitize_cell_input};
pub use select::{CursorAffordance, SelectMode};
pub use theme::ThemeMode;
pub use todo::TodoList;
pub use workspace::Workspace;
