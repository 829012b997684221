//! Pizza order form rendering

use super::field_renderer::{draw_checkbox_list, draw_select_field, draw_text_field};
use crate::app::App;
use crate::state::catalog::size_display;
use crate::state::{FieldName, FormFocus, TOPPINGS};
use crate::ui::components::{render_banner, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the order form
pub fn draw_order_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.controller.state();
    let banner_height = if form.outcome.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),             // Success / failure
            Constraint::Length(3),                         // Full name
            Constraint::Length(3),                         // Size
            Constraint::Length(TOPPINGS.len() as u16 + 2), // Toppings
            Constraint::Length(BUTTON_HEIGHT),             // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Order Your Pizza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    render_banner(frame, chunks[0], form);

    let focus = app.state.focus;

    draw_text_field(
        frame,
        chunks[1],
        FieldName::FullName.label(),
        &form.values.full_name,
        "Type full name",
        focus == FormFocus::FullName,
        form.errors.get(FieldName::FullName),
    );

    draw_select_field(
        frame,
        chunks[2],
        FieldName::Size.label(),
        size_display(&form.values.size),
        focus == FormFocus::Size,
        form.errors.get(FieldName::Size),
    );

    let items: Vec<(&str, bool)> = TOPPINGS
        .iter()
        .map(|t| (t.label, form.values.has_topping(t.id)))
        .collect();
    let focused_topping = match focus {
        FormFocus::Topping(i) => Some(i),
        _ => None,
    };
    draw_checkbox_list(
        frame,
        chunks[3],
        FieldName::Toppings.label(),
        &items,
        focused_topping,
    );

    let button_label = if form.is_submitting() {
        "Submitting..."
    } else {
        "Submit"
    };
    let button_area = Rect {
        width: chunks[4].width.min(20),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        button_label,
        focus == FormFocus::Submit,
        form.can_submit(),
    );
}
