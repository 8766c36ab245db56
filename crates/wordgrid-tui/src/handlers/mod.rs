pub mod dialog_handlers;
pub mod grid_handlers;
pub mod todo_handlers;
