//! Submission outcome banner

use crate::state::FormState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the success or failure banner of the last submission, if any
pub fn render_banner(frame: &mut Frame, area: Rect, form: &FormState) {
    let (title, color, message) = match (form.success_message(), form.failure_message()) {
        (Some(message), _) => (" Success ", Color::Green, message),
        (None, Some(message)) => (" Failure ", Color::Red, message),
        (None, None) => return,
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
