use crate::cli::ThemeAction;
use crate::context::CliContext;
use crate::output;
use wordgrid_domain::commands::ToggleTheme;

pub fn handle(ctx: &mut CliContext, action: ThemeAction) -> anyhow::Result<()> {
    if let ThemeAction::Toggle = action {
        ctx.execute(&ToggleTheme)?;
    }
    output::output_success(serde_json::json!({ "theme": ctx.workspace.theme.as_str() }))
}
