use crate::app::{App, AppMode, Focus};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::layout::GridViewport;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use wordgrid_domain::CellView;

const SIDE_PANEL_WIDTH: u16 = 36;
const SETTINGS_HEIGHT: u16 = 8;

pub fn render(app: &mut App, frame: &mut Frame) {
    let palette = Palette::for_mode(app.workspace.theme);
    frame.render_widget(Block::default().style(base(&palette)), frame.area());

    let is_help_mode = matches!(app.mode, AppMode::Help(_));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_main(app, frame, chunks[0], &palette);
    render_footer(app, frame, chunks[1], &palette);

    match &app.mode {
        AppMode::AddTodo => render_input_popup(
            frame,
            &palette,
            "Add To-Do",
            "Task:",
            app.todo_input.as_str(),
            app.todo_input.cursor_pos(),
        ),
        AppMode::ResizeGrid | AppMode::ResizeCells => {
            if let Some(form) = &app.form {
                let title = if app.mode == AppMode::ResizeCells {
                    "Cell Size"
                } else {
                    "Rows & Columns"
                };
                render_form_popup(frame, &palette, title, form);
            }
        }
        _ => {}
    }

    if is_help_mode {
        render_help_popup(app, frame, &palette);
    }
}

fn render_main(app: &mut App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(area);

    render_grid(app, frame, chunks[0], palette);

    if app.workspace.settings_visible {
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SETTINGS_HEIGHT), Constraint::Min(0)])
            .split(chunks[1]);
        render_settings(app, frame, side[0], palette);
        render_todos(app, frame, side[1], palette);
    } else {
        render_todos(app, frame, chunks[1], palette);
    }
}

fn render_grid(app: &mut App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let config = app.workspace.config;
    let title = format!("Grid {}x{}", config.rows, config.cols);
    let focused_title = format!("▶ Grid {}x{}", config.rows, config.cols);
    let panel = PanelConfig::new(&title, *palette)
        .with_focus_indicator(&focused_title)
        .focused(app.focus == Focus::Grid);
    let block = panel.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let previous_origin = app
        .grid_viewport
        .map(|viewport| viewport.origin())
        .unwrap_or((0, 0));
    let viewport = GridViewport::fit(inner, &config, app.cursor, previous_origin);
    app.grid_area = Some(inner);
    app.grid_viewport = Some(viewport);

    let affordance = app.workspace.select.affordance();
    let show_cursor = app.focus == Focus::Grid;
    for row in viewport.rows() {
        for col in viewport.cols() {
            let Some(index) = config.index_of(row, col) else {
                continue;
            };
            let Some(rect) = viewport.cell_rect(inner, row, col) else {
                continue;
            };
            let cell = app.workspace.cell_view(index);
            let cursor = (show_cursor && app.cursor == (row, col)).then_some(affordance);
            render_cell(frame, rect, &cell, cell_style(palette, &cell, cursor));
        }
    }
}

fn render_cell(frame: &mut Frame, rect: Rect, cell: &CellView, style: Style) {
    // Leave a one-column gutter so neighbouring cells stay distinguishable
    let body = if rect.width >= 3 {
        Rect {
            width: rect.width - 1,
            ..rect
        }
    } else {
        rect
    };
    frame.render_widget(Block::default().style(style), body);

    let letter_row = Rect {
        y: body.y + body.height.saturating_sub(1) / 2,
        height: 1u16.min(body.height),
        ..body
    };
    let letter = Paragraph::new(cell.letter.clone())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(letter, letter_row);
}

fn render_settings(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let workspace = &app.workspace;
    let config = workspace.config;
    let select_state = if workspace.select.is_enabled() {
        "ON"
    } else {
        "OFF"
    };

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<13}"), label_text(palette)),
            Span::styled(value, normal_text(palette)),
        ])
    };

    let lines = vec![
        row("Rows:", config.rows.to_string()),
        row("Columns:", config.cols.to_string()),
        row(
            "Cell size:",
            format!("{}x{} px", config.cell_width, config.cell_height),
        ),
        row("Theme:", workspace.theme.to_string()),
        Line::from(vec![
            Span::styled(format!("{:<13}", "Select Mode:"), label_text(palette)),
            Span::styled(select_state, bold_highlight(palette)),
            Span::styled(
                format!("  ({} marked)", workspace.select.highlighted_count()),
                label_text(palette),
            ),
        ]),
        row("Cursor:", format!("row {}, col {}", app.cursor.0 + 1, app.cursor.1 + 1)),
    ];

    let panel = PanelConfig::new("Settings", *palette);
    frame.render_widget(Paragraph::new(lines).block(panel.block()), area);
}

fn render_todos(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let todos = &app.workspace.todos;
    let focused = app.focus == Focus::Todos;
    let title = format!("To-Do ({})", todos.len());
    let focused_title = format!("▶ To-Do ({})", todos.len());
    let panel = PanelConfig::new(&title, *palette)
        .with_focus_indicator(&focused_title)
        .focused(focused);

    if todos.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No to-dos. Tab here, then press a to add one.",
            label_text(palette),
        ))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(panel.block());
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = todos
        .items()
        .iter()
        .map(|item| ListItem::new(Line::from(Span::styled(item.clone(), normal_text(palette)))))
        .collect();

    let list = List::new(items)
        .block(panel.block())
        .highlight_style(selected_item(palette, focused).patch(normal_text(palette)));
    let mut state = ListState::default().with_selected(app.todo_selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let line = match &app.status {
        Some(status) if status.is_error => Line::from(Span::styled(status.text.clone(), error_text())),
        Some(status) => Line::from(Span::styled(status.text.clone(), bold_highlight(palette))),
        None => {
            let hint = KeybindingRegistry::get_provider(app)
                .get_context()
                .footer_hint();
            Line::from(Span::styled(hint, label_text(palette)))
        }
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border(palette, false)),
    );
    frame.render_widget(footer, area);
}

fn render_help_popup(app: &App, frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Help - Keybindings for Current Context")
        .borders(Borders::ALL)
        .border_style(border(palette, true))
        .style(popup_bg(palette));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0)])
        .split(inner);

    let context = KeybindingRegistry::get_provider(app).get_context();

    let mut lines = vec![
        Line::from(Span::styled(context.name.clone(), bold_highlight(palette))),
        Line::from(""),
    ];

    for binding in &context.bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", binding.key), bold_highlight(palette)),
            Span::raw(" "),
            Span::styled(binding.description.clone(), normal_text(palette)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ESC or F1 to close help",
        label_text(palette),
    )));

    frame.render_widget(Paragraph::new(lines), chunks[0]);
}
