pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod handlers;
pub mod keybindings;
pub mod layout;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::App;
