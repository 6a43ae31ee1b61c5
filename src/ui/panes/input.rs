//! Value input line

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input field with a block cursor after the typed text
pub fn render_input_pane(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::default()
        .title(" Values (comma or space separated) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.secondary));

    let line = Line::from(vec![
        Span::styled("› ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            " ",
            Style::default()
                .bg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
