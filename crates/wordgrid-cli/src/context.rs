use rand::rngs::ThreadRng;
use serde::Serialize;
use std::path::Path;
use wordgrid_core::WordGridResult;
use wordgrid_domain::commands::{Command, CommandContext};
use wordgrid_domain::Workspace;
use wordgrid_persistence::JsonFileStore;

/// Placeholder printed for cells with no letter
const EMPTY_CELL: char = '.';

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u32,
    pub cell_height: u32,
    pub theme: &'static str,
    pub grid: Vec<String>,
    pub todos: Vec<String>,
}

pub struct CliContext {
    pub workspace: Workspace,
    store: JsonFileStore,
    rng: ThreadRng,
}

impl CliContext {
    pub fn load(file_path: &Path, todo_marker: &str) -> Self {
        let store = JsonFileStore::open(file_path);
        let workspace = Workspace::load(&store, todo_marker);
        Self {
            workspace,
            store,
            rng: rand::thread_rng(),
        }
    }

    pub fn execute(&mut self, command: &dyn Command) -> WordGridResult<()> {
        let mut ctx = CommandContext {
            workspace: &mut self.workspace,
            store: &mut self.store,
            rng: &mut self.rng,
        };
        command.execute(&mut ctx)?;
        tracing::debug!("Executed: {}", command.description());
        Ok(())
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let config = self.workspace.config;
        let grid = (0..config.rows)
            .map(|row| {
                (0..config.cols)
                    .map(|col| {
                        config
                            .index_of(row, col)
                            .and_then(|index| self.workspace.cell_letter(index).chars().next())
                            .unwrap_or(EMPTY_CELL)
                    })
                    .collect()
            })
            .collect();

        WorkspaceSnapshot {
            rows: config.rows,
            cols: config.cols,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            theme: self.workspace.theme.as_str(),
            grid,
            todos: self.workspace.todos.items().to_vec(),
        }
    }
}
