use super::{Command, CommandContext};
use wordgrid_core::WordGridResult;

/// Add a to-do from raw input text
pub struct AddTodo {
    pub text: String,
}

impl Command for AddTodo {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.add_todo(context.store, &self.text)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add to-do: '{}'", self.text.trim())
    }
}

/// Remove the first to-do with this display text
pub struct RemoveTodo {
    pub display_text: String,
}

impl Command for RemoveTodo {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context
            .workspace
            .remove_todo(context.store, &self.display_text)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove to-do: '{}'", self.display_text)
    }
}

/// Remove all to-dos
pub struct ClearTodos;

impl Command for ClearTodos {
    fn execute(&self, context: &mut CommandContext) -> WordGridResult<()> {
        context.workspace.clear_todos(context.store)
    }

    fn description(&self) -> String {
        "Clear to-do list".to_string()
    }
}
