use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;
use ratatui::Terminal;
use wordgrid_core::{AppConfig, KeyValueStore};
use wordgrid_domain::{storage, ThemeMode, Workspace};
use wordgrid_persistence::{JsonFileStore, MemoryStore};
use wordgrid_tui::app::{AppMode, Focus};
use wordgrid_tui::{ui, App};

fn app_with(store: MemoryStore) -> App {
    App::new(&AppConfig::default(), Box::new(store))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn reload(app: &App) -> Workspace {
    Workspace::load(app.store(), "💡")
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_typing_fills_cursor_cell_and_persists() {
    let mut app = app_with(MemoryStore::new());

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.workspace.cell_letter(0), "Q");

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('7'));
    assert_eq!(app.workspace.cell_letter(1), "");

    press(&mut app, KeyCode::Char('z'));
    assert_eq!(app.workspace.cell_letter(1), "Z");

    let reloaded = reload(&app);
    assert_eq!(reloaded.cell_letter(0), "Q");
    assert_eq!(reloaded.cell_letter(1), "Z");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.workspace.cell_letter(1), "");
    assert_eq!(reload(&app).cell_letter(1), "");
}

#[test]
fn test_cursor_stays_inside_grid() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor, (0, 0));

    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.cursor, (24, 24));
    assert_eq!(app.cursor_index(), Some(624));
}

#[test]
fn test_select_mode_makes_cells_read_only_and_highlights() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::Char('a'));

    ctrl(&mut app, 's');
    assert!(app.workspace.select.is_enabled());

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.workspace.cell_letter(0), "A");

    press(&mut app, KeyCode::Enter);
    assert!(app.workspace.select.is_highlighted(0));
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.workspace.select.is_highlighted(0));

    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 's');
    assert!(!app.workspace.select.is_enabled());
    assert_eq!(app.workspace.select.highlighted_count(), 1);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.workspace.cell_letter(0), "C");

    ctrl(&mut app, 's');
    ctrl(&mut app, 'x');
    assert!(!app.workspace.select.is_enabled());
    assert_eq!(app.workspace.select.highlighted_count(), 0);
}

#[test]
fn test_clicks_outside_select_mode_do_nothing() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.workspace.select.highlighted_count(), 0);
}

#[test]
fn test_todo_add_remove_and_clear() {
    let mut app = app_with(MemoryStore::new());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Todos);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.mode, AppMode::AddTodo);
    type_text(&mut app, "  buy milk ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.workspace.todos.items(), ["💡buy milk".to_string()]);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "walk");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.workspace.todos.len(), 2);
    assert_eq!(app.todo_selection.get(), Some(1));
    assert_eq!(reload(&app).todos.len(), 2);

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.workspace.todos.items(), ["💡walk".to_string()]);

    press(&mut app, KeyCode::Char('C'));
    assert!(app.workspace.todos.is_empty());
    assert_eq!(app.todo_selection.get(), None);
    assert!(!app.store().contains(storage::TODO_LIST));
}

#[test]
fn test_blank_todo_is_not_added() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.workspace.todos.is_empty());
    assert_eq!(app.mode, AppMode::AddTodo);
    assert!(app.store().get(storage::TODO_LIST).is_none());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_resize_form_applies_and_persists() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::End);

    ctrl(&mut app, 'r');
    assert_eq!(app.mode, AppMode::ResizeGrid);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "4");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.workspace.config.rows, 3);
    assert_eq!(app.workspace.config.cols, 4);
    assert_eq!(app.cursor, (2, 3));
    assert_eq!(app.store().get(storage::ROWS).as_deref(), Some("3"));
    assert_eq!(app.store().get(storage::COLS).as_deref(), Some("4"));
}

#[test]
fn test_cell_size_form_falls_back_on_bad_input() {
    let mut app = app_with(MemoryStore::new());
    ctrl(&mut app, 'w');
    assert_eq!(app.mode, AppMode::ResizeCells);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "40");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "xx");
    press(&mut app, KeyCode::Enter);

    let config = app.workspace.config;
    assert_eq!((config.rows, config.cols), (25, 25));
    assert_eq!((config.cell_width, config.cell_height), (40, 25));
    assert_eq!(app.store().get(storage::CELL_WIDTH).as_deref(), Some("40"));
}

#[test]
fn test_form_escape_leaves_grid_alone() {
    let mut app = app_with(MemoryStore::new());
    ctrl(&mut app, 'r');
    type_text(&mut app, "0");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, AppMode::Normal);
    assert!(app.form.is_none());
    assert_eq!(app.workspace.config.rows, 25);
    assert!(app.store().get(storage::ROWS).is_none());
}

#[test]
fn test_theme_toggle_from_either_panel() {
    let mut app = app_with(MemoryStore::new());
    assert_eq!(app.workspace.theme, ThemeMode::Light);

    ctrl(&mut app, 't');
    assert_eq!(app.workspace.theme, ThemeMode::Dark);
    assert_eq!(app.store().get(storage::THEME_MODE).as_deref(), Some("dark"));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.workspace.theme, ThemeMode::Light);
}

#[test]
fn test_auto_fill_and_clear_fill() {
    let mut app = app_with(MemoryStore::new());
    ctrl(&mut app, 'g');

    let cells = app.workspace.config.cell_count();
    assert!((0..cells).all(|i| {
        let letter = app.workspace.cell_letter(i);
        letter.len() == 1 && letter.chars().all(|c| c.is_ascii_uppercase())
    }));
    assert_eq!(reload(&app).cell_letter(cells - 1), app.workspace.cell_letter(cells - 1));

    ctrl(&mut app, 'e');
    assert!((0..cells).all(|i| app.workspace.cell_letter(i).is_empty()));
}

#[test]
fn test_help_popup_returns_to_previous_mode() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::F(1));
    assert!(matches!(app.mode, AppMode::Help(_)));

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.workspace.cell_letter(0), "");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_quit_keys() {
    let mut app = app_with(MemoryStore::new());
    ctrl(&mut app, 'c');
    assert!(app.should_quit);

    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_startup_restores_stored_state() {
    let store: MemoryStore = [
        (storage::ROWS, "2"),
        (storage::COLS, "3"),
        (storage::THEME_MODE, "dark"),
        (storage::TODO_LIST, r#"["💡one","💡two"]"#),
        (storage::GRID_DATA, r#"{"4":"K"}"#),
    ]
    .into_iter()
    .collect();
    let app = app_with(store);

    assert_eq!(app.workspace.config.cell_count(), 6);
    assert_eq!(app.workspace.theme, ThemeMode::Dark);
    assert_eq!(app.workspace.todos.len(), 2);
    assert_eq!(app.todo_selection.get(), Some(0));
    assert_eq!(app.workspace.cell_letter(4), "K");
}

#[test]
fn test_render_shows_letters_and_todos() {
    let store: MemoryStore = [
        (storage::ROWS, "3"),
        (storage::COLS, "3"),
        (storage::TODO_LIST, r#"["💡find words"]"#),
    ]
    .into_iter()
    .collect();
    let mut app = app_with(store);
    press(&mut app, KeyCode::Char('w'));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains('W'));
    assert!(text.contains("Grid 3x3"));
    assert!(text.contains("find words"));
    assert!(app.grid_viewport.is_some());
}

#[test]
fn test_render_settings_and_help() {
    let mut app = app_with(MemoryStore::new());
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Settings"));
    assert!(text.contains("Select Mode:"));

    ctrl(&mut app, 'o');
    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    assert!(!screen_text(&terminal).contains("Select Mode:"));

    press(&mut app, KeyCode::F(1));
    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    assert!(screen_text(&terminal).contains("Keybindings"));
}

#[test]
fn test_app_open_uses_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let config = AppConfig {
        store_path: Some(path.clone()),
        ..AppConfig::default()
    };

    let mut app = App::open(&config);
    press(&mut app, KeyCode::Char('h'));
    drop(app);

    let store = JsonFileStore::open(&path);
    let workspace = Workspace::load(&store, "💡");
    assert_eq!(workspace.cell_letter(0), "H");
}

#[test]
fn test_selected_todo_scrolls_into_view() {
    let todos: Vec<String> = (0..40).map(|i| format!("💡task-{i:02}")).collect();
    let todos_json = serde_json::to_string(&todos).unwrap();
    let store: MemoryStore = [(storage::TODO_LIST, todos_json.as_str())]
        .into_iter()
        .collect();
    let mut app = app_with(store);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    assert!(screen_text(&terminal).contains("task-00"));
    assert!(!screen_text(&terminal).contains("task-39"));

    press(&mut app, KeyCode::Tab);
    for _ in 0..39 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.todo_selection.get(), Some(39));

    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    assert!(screen_text(&terminal).contains("task-39"));
}

#[test]
fn test_long_todo_input_keeps_cursor_in_popup() {
    let mut app = app_with(MemoryStore::new());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, &"w".repeat(300));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();

    let position = terminal.get_cursor_position().unwrap();
    assert!(position.x >= 20, "cursor left of popup: {position:?}");
    assert!(position.x < 80, "cursor right of popup: {position:?}");
}

#[test]
fn test_select_mode_cursor_renders_as_pointer() {
    let store: MemoryStore = [(storage::ROWS, "3"), (storage::COLS, "3")]
        .into_iter()
        .collect();
    let mut app = app_with(store);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    let cursor_cell = terminal.backend().buffer()[(1, 1)].clone();
    assert!(!cursor_cell.modifier.contains(Modifier::UNDERLINED));

    ctrl(&mut app, 's');
    terminal.draw(|frame| ui::render(&mut app, frame)).unwrap();
    let cursor_cell = terminal.backend().buffer()[(1, 1)].clone();
    assert!(cursor_cell.modifier.contains(Modifier::UNDERLINED));
}
