use crate::cli::TodoAction;
use crate::context::CliContext;
use crate::output;
use wordgrid_domain::commands::{AddTodo, ClearTodos, RemoveTodo};

pub fn handle(ctx: &mut CliContext, action: TodoAction) -> anyhow::Result<()> {
    match action {
        TodoAction::Add { text } => {
            let before = ctx.workspace.todos.len();
            ctx.execute(&AddTodo { text })?;
            if ctx.workspace.todos.len() == before {
                output::output_error("To-do text is empty");
            }
            let added = ctx.workspace.todos.items().last().cloned();
            output::output_success(added)
        }
        TodoAction::List => output::output_list(ctx.workspace.todos.items().to_vec()),
        TodoAction::Remove { text } => {
            if !ctx.workspace.todos.items().contains(&text) {
                output::output_error(&format!("To-do not found: {text}"));
            }
            ctx.execute(&RemoveTodo {
                display_text: text.clone(),
            })?;
            output::output_success(serde_json::json!({ "removed": text }))
        }
        TodoAction::Clear => {
            ctx.execute(&ClearTodos)?;
            output::output_list(ctx.workspace.todos.items().to_vec())
        }
    }
}
