use rand::RngCore;
use wordgrid_core::{KeyValueStore, WordGridResult};

pub mod display_commands;
pub mod grid_commands;
pub mod todo_commands;

pub use display_commands::*;
pub use grid_commands::*;
pub use todo_commands::*;

/// Trait for user actions that mutate the workspace
/// Each command writes through to the store before it returns
pub trait Command {
    /// Execute this command against the workspace and store
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub workspace: &'a mut crate::Workspace,
    pub store: &'a mut dyn KeyValueStore,
    pub rng: &'a mut dyn RngCore,
}
