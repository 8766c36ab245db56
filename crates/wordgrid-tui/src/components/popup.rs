use crate::dialog::FieldForm;
use crate::theme::{border, bold_highlight, label_text, normal_text, popup_bg, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw an empty bordered popup and return its inner area
pub fn render_popup_with_block(
    frame: &mut Frame,
    palette: &Palette,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border(palette, true))
        .style(popup_bg(palette));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

pub fn render_input_popup(
    frame: &mut Frame,
    palette: &Palette,
    title: &str,
    label: &str,
    input_text: &str,
    cursor_pos: usize,
) {
    let inner = render_popup_with_block(frame, palette, title, 60, 30);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let label_widget = Paragraph::new(label.to_string()).style(bold_highlight(palette));
    frame.render_widget(label_widget, chunks[0]);

    let input = Paragraph::new(input_text.to_string())
        .style(normal_text(palette))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    // Keep the cursor inside the input box even when the text overflows it
    let offset = u16::try_from(cursor_pos).unwrap_or(u16::MAX);
    let cursor_x = chunks[1]
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(chunks[1].right().saturating_sub(2));
    let cursor_y = chunks[1].y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Popup with one labelled line per form field; the active field gets the cursor
pub fn render_form_popup(frame: &mut Frame, palette: &Palette, title: &str, form: &FieldForm) {
    let inner = render_popup_with_block(frame, palette, title, 50, 40);

    let mut lines = Vec::new();
    let mut cursor = None;
    for (i, (label, input)) in form.entries().enumerate() {
        let is_active = i == form.active();
        let marker = if is_active { "▶ " } else { "  " };
        let label_text_value = format!("{marker}{label:<18}");
        if is_active {
            cursor = Some((
                inner.x + 1 + label_text_value.chars().count() as u16 + input.cursor_pos() as u16,
                inner.y + 1 + i as u16,
            ));
        }
        let label_style = if is_active {
            bold_highlight(palette)
        } else {
            label_text(palette)
        };
        lines.push(Line::from(vec![
            Span::styled(label_text_value, label_style),
            Span::styled(input.as_str().to_string(), normal_text(palette)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: apply | Tab: next field | Esc: cancel",
        label_text(palette),
    )));

    let area = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(1),
    };
    frame.render_widget(Paragraph::new(lines), area);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
