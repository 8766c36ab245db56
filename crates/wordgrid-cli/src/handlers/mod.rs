pub mod grid;
pub mod theme;
pub mod todo;
