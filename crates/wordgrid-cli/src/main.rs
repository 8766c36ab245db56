mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;
use wordgrid_core::AppConfig;
use wordgrid_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("WORDGRID_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(file) = cli.file {
        config.store_path = Some(file);
    }

    match cli.command {
        None => {
            let mut app = App::open(&config);
            app.run().await?;
        }
        Some(cmd) => {
            let store_path = config.effective_store_path();
            let mut ctx = CliContext::load(&store_path, config.effective_todo_marker());

            match cmd {
                Commands::Show => output::output_success(ctx.snapshot())?,
                Commands::Grid(grid_cmd) => handlers::grid::handle(&mut ctx, grid_cmd.action)?,
                Commands::Todo(todo_cmd) => handlers::todo::handle(&mut ctx, todo_cmd.action)?,
                Commands::Theme(theme_cmd) => {
                    handlers::theme::handle(&mut ctx, theme_cmd.action)?
                }
            }
        }
    }

    Ok(())
}
