use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(about = "A terminal word-search grid with a to-do list", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the store file (or set WORDGRID_FILE env var)
    #[arg(value_name = "FILE", env = "WORDGRID_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the stored workspace
    Show,
    /// Grid operations
    Grid(GridCommand),
    /// To-do list operations
    Todo(TodoCommand),
    /// Theme operations
    Theme(ThemeCommand),
}

// Grid commands
#[derive(Args)]
pub struct GridCommand {
    #[command(subcommand)]
    pub action: GridAction,
}

#[derive(Subcommand)]
pub enum GridAction {
    /// Change the grid dimensions and, optionally, the cell size
    Resize {
        #[arg(long)]
        rows: Option<String>,
        #[arg(long)]
        cols: Option<String>,
        #[arg(long)]
        cell_width: Option<String>,
        #[arg(long)]
        cell_height: Option<String>,
    },
    /// Write a letter into one cell (1-based row and column)
    Set {
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        #[arg(long)]
        letter: String,
    },
    /// Fill every cell with a random letter
    Fill,
    /// Empty every cell
    Clear,
}

// To-do commands
#[derive(Args)]
pub struct TodoCommand {
    #[command(subcommand)]
    pub action: TodoAction,
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a to-do
    Add { text: String },
    /// List to-dos
    List,
    /// Remove the first to-do with this exact display text
    Remove { text: String },
    /// Remove every to-do
    Clear,
}

// Theme commands
#[derive(Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub action: ThemeAction,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the stored theme
    Get,
    /// Switch between dark and light
    Toggle,
}
