//! Status bar rendering with keybindings and playback indicators

use crate::algorithms::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub algorithm: Algorithm,
    pub delay_ms: u64,
    pub step: usize,
    pub message: &'a str,
    pub is_error: bool,
    pub is_playing: bool,
    pub is_input: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);

    // Left side: step counter, algorithm, delay and message
    let left_spans = vec![
        Span::styled(
            format!(" Step {} ", data.step),
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.is_input {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.algorithm.name()),
            bar_bg
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}ms ", data.delay_ms),
            bar_bg.fg(DEFAULT_THEME.number),
        ),
        Span::styled("| ", bar_bg.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} ", data.message),
            bar_bg.fg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let keys: &[(&str, &str)] = if data.is_input {
        &[(" ↵ ", " load "), (" esc ", " cancel ")]
    } else if data.is_playing {
        &[(" r ", " reset "), (" +/- ", " speed "), ("q", " quit ")]
    } else {
        &[
            (" ←/→ ", " algorithm "),
            (" ↵ ", " sort "),
            (" r ", " reset "),
            (" +/- ", " speed "),
            (" i ", " input "),
            ("q", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let badge = if data.is_input {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else {
        None
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
