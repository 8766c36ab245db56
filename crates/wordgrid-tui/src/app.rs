use crate::dialog::FieldForm;
use crate::events::{Event, EventHandler};
use crate::layout::GridViewport;
use crate::selection::SelectionState;
use crate::ui;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use rand::rngs::ThreadRng;
use std::io;
use wordgrid_core::{AppConfig, InputState, KeyValueStore};
use wordgrid_domain::commands::{Command, CommandContext};
use wordgrid_domain::Workspace;
use wordgrid_persistence::JsonFileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Todos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    ResizeGrid,
    ResizeCells,
    AddTodo,
    Help(Box<AppMode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub workspace: Workspace,
    pub cursor: (usize, usize),
    pub todo_selection: SelectionState,
    pub todo_input: InputState,
    pub form: Option<FieldForm>,
    pub status: Option<StatusMessage>,
    pub grid_area: Option<Rect>,
    pub grid_viewport: Option<GridViewport>,
    store: Box<dyn KeyValueStore>,
    rng: ThreadRng,
}

impl App {
    /// Build the app from whatever the store holds
    pub fn new(config: &AppConfig, store: Box<dyn KeyValueStore>) -> Self {
        let workspace = Workspace::load(store.as_ref(), config.effective_todo_marker());
        let mut todo_selection = SelectionState::new();
        todo_selection.clamp(workspace.todos.len());
        if !workspace.todos.is_empty() {
            todo_selection.set(Some(0));
        }

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Grid,
            workspace,
            cursor: (0, 0),
            todo_selection,
            todo_input: InputState::new(),
            form: None,
            status: None,
            grid_area: None,
            grid_viewport: None,
            store,
            rng: rand::thread_rng(),
        }
    }

    /// Open the JSON store named by `config` and build the app from it
    pub fn open(config: &AppConfig) -> Self {
        let path = config.effective_store_path();
        tracing::info!("Using store at {}", path.display());
        Self::new(config, Box::new(JsonFileStore::open(path)))
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Run one command against the workspace, reporting failures in the
    /// status line instead of aborting the session
    pub fn execute(&mut self, command: &dyn Command) -> bool {
        let description = command.description();
        let mut ctx = CommandContext {
            workspace: &mut self.workspace,
            store: self.store.as_mut(),
            rng: &mut self.rng,
        };
        match command.execute(&mut ctx) {
            Ok(()) => {
                tracing::debug!("Executed: {}", description);
                true
            }
            Err(e) => {
                tracing::error!("{} failed: {}", description, e);
                self.status = Some(StatusMessage::error(format!("{description} failed: {e}")));
                false
            }
        }
    }

    pub fn cursor_index(&self) -> Option<usize> {
        self.workspace.config.index_of(self.cursor.0, self.cursor.1)
    }

    /// Pull the cursor back inside the grid after a resize
    pub fn clamp_cursor(&mut self) {
        let config = self.workspace.config;
        self.cursor = (
            self.cursor.0.min(config.rows - 1),
            self.cursor.1.min(config.cols - 1),
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit();
            return;
        }

        if !matches!(self.mode, AppMode::Help(_)) {
            self.status = None;
        }

        match self.mode.clone() {
            AppMode::Normal => match self.focus {
                Focus::Grid => self.handle_grid_key(key),
                Focus::Todos => self.handle_todo_list_key(key),
            },
            AppMode::ResizeGrid | AppMode::ResizeCells => self.handle_form_key(key),
            AppMode::AddTodo => self.handle_add_todo_key(key),
            AppMode::Help(previous) => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.mode = *previous;
                }
            }
        }
    }

    pub fn show_help(&mut self) {
        let previous = std::mem::replace(&mut self.mode, AppMode::Normal);
        self.mode = AppMode::Help(Box::new(previous));
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.mode != AppMode::Normal {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let (Some(area), Some(viewport)) = (self.grid_area, self.grid_viewport) else {
                return;
            };
            if let Some(position) = viewport.cell_at(area, mouse.column, mouse.row) {
                self.focus = Focus::Grid;
                self.cursor = position;
                self.activate_cursor_cell();
            }
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Mouse(mouse)) => self.handle_mouse_event(mouse),
                Some(Event::Resize(_, _)) | Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
