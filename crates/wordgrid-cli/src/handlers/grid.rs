use crate::cli::GridAction;
use crate::context::CliContext;
use crate::output;
use wordgrid_domain::commands::{AutoFill, ClearCell, ClearFill, ResizeCells, ResizeGrid, TypeLetter};
use wordgrid_domain::grid::{parse_cell_size, parse_dimension};

pub fn handle(ctx: &mut CliContext, action: GridAction) -> anyhow::Result<()> {
    match action {
        GridAction::Resize {
            rows,
            cols,
            cell_width,
            cell_height,
        } => {
            let current = ctx.workspace.config;
            let rows = rows.map_or(current.rows, |text| parse_dimension(&text, current.rows));
            let cols = cols.map_or(current.cols, |text| parse_dimension(&text, current.cols));

            if cell_width.is_none() && cell_height.is_none() {
                ctx.execute(&ResizeGrid { rows, cols })?;
            } else {
                let cell_width = cell_width.map_or(current.cell_width, |text| {
                    parse_cell_size(&text, current.cell_width)
                });
                let cell_height = cell_height.map_or(current.cell_height, |text| {
                    parse_cell_size(&text, current.cell_height)
                });
                ctx.execute(&ResizeCells {
                    rows,
                    cols,
                    cell_width,
                    cell_height,
                })?;
            }
            output::output_success(ctx.snapshot())
        }
        GridAction::Set { row, col, letter } => {
            let config = ctx.workspace.config;
            let Some(index) = row
                .checked_sub(1)
                .zip(col.checked_sub(1))
                .and_then(|(row, col)| config.index_of(row, col))
            else {
                output::output_error(&format!(
                    "Cell ({row}, {col}) is outside the {}x{} grid",
                    config.rows, config.cols
                ));
            };

            ctx.execute(&ClearCell { index })?;
            for typed in letter.chars() {
                ctx.execute(&TypeLetter { index, typed })?;
            }
            output::output_success(serde_json::json!({
                "row": row,
                "col": col,
                "letter": ctx.workspace.cell_letter(index),
            }))
        }
        GridAction::Fill => {
            ctx.execute(&AutoFill)?;
            output::output_success(ctx.snapshot())
        }
        GridAction::Clear => {
            ctx.execute(&ClearFill)?;
            output::output_success(ctx.snapshot())
        }
    }
}
