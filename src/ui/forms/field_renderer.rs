//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border and text style for a control
fn control_styles(is_active: bool, error: &str) -> (Style, Style) {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_style = if !error.is_empty() {
        Style::default().fg(Color::Red)
    } else {
        text_style
    };
    (text_style, border_style)
}

/// Bordered block titled with `label`, with the error (if any) on the bottom border
fn field_block<'a>(label: &'a str, error: &'a str, border_style: Style) -> Block<'a> {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if error.is_empty() {
        block
    } else {
        block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )))
    }
}

/// Draw a single-line text input
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    error: &str,
) {
    let (style, border_style) = control_styles(is_active, error);
    let cursor = if is_active { "▌" } else { "" };

    let line = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = field_block(label, error, border_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a select showing the current choice between arrows
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: &str,
    is_active: bool,
    error: &str,
) {
    let (style, border_style) = control_styles(is_active, error);
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(display, style),
        Span::styled(" ▶", arrow_style),
    ]);

    let block = field_block(label, error, border_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a bordered list of checkboxes; `focused` is the row with keyboard focus
pub fn draw_checkbox_list(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    items: &[(&str, bool)],
    focused: Option<usize>,
) {
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, (text, checked))| {
            let checkbox = if *checked { "[x]" } else { "[ ]" };
            let style = if focused == Some(i) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{checkbox} {text}"), style))
        })
        .collect();

    let border_style = if focused.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
