use super::{Command, CommandContext};
use wordgrid_core::WordGridResult;

/// Change the number of rows and columns
pub struct ResizeGrid {
    pub rows: usize,
    pub cols: usize,
}

impl Command for ResizeGrid {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context
            .workspace
            .resize_grid(context.store, self.rows, self.cols)
    }

    fn description(&self) -> String {
        format!("Resize grid to {}x{}", self.rows, self.cols)
    }
}

/// Change dimensions and cell pixel size together
pub struct ResizeCells {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Command for ResizeCells {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.resize_cells(
            context.store,
            self.rows,
            self.cols,
            self.cell_width,
            self.cell_height,
        )
    }

    fn description(&self) -> String {
        format!("Resize cells to {}x{}px", self.cell_width, self.cell_height)
    }
}

/// One keystroke into a grid cell
pub struct TypeLetter {
    pub index: usize,
    pub typed: char,
}

impl Command for TypeLetter {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context
            .workspace
            .type_into_cell(context.store, self.index, self.typed)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Type '{}' into cell {}", self.typed, self.index)
    }
}

/// Erase one grid cell
pub struct ClearCell {
    pub index: usize,
}

impl Command for ClearCell {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.clear_cell(context.store, self.index)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Clear cell {}", self.index)
    }
}

/// Fill every cell with a random letter
pub struct AutoFill;

impl Command for AutoFill {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.auto_fill(context.store, context.rng)
    }

    fn description(&self) -> String {
        "Auto-fill grid".to_string()
    }
}

/// Blank every cell
pub struct ClearFill;

impl Command for ClearFill {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.clear_fill(context.store)
    }

    fn description(&self) -> String {
        "Clear grid letters".to_string()
    }
}
