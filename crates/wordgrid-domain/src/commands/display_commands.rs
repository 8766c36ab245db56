use super::{Command, CommandContext};
use wordgrid_core::WordGridResult;

pub struct ToggleTheme;

impl Command for ToggleTheme {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.toggle_theme(context.store)?;
        Ok(())
    }

    fn description(&self) -> String {
        "Toggle theme".to_string()
    }
}

pub struct ToggleSelectMode;

impl Command for ToggleSelectMode {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.toggle_select_mode();
        Ok(())
    }

    fn description(&self) -> String {
        "Toggle select mode".to_string()
    }
}

/// Activate a cell: highlight toggle while select mode is on
pub struct ClickCell {
    pub index: usize,
}

impl Command for ClickCell {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.click_cell(self.index);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Click cell {}", self.index)
    }
}

pub struct ClearHighlights;

impl Command for ClearHighlights {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.clear_highlights();
        Ok(())
    }

    fn description(&self) -> String {
        "Clear highlights".to_string()
    }
}

pub struct ToggleSettings;

impl Command for ToggleSettings {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.toggle_settings();
        Ok(())
    }

    fn description(&self) -> String {
        "Toggle settings panel".to_string()
    }
}
