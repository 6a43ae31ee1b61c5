//! Bar chart pane: one bar per value, colored by visual state

use crate::step::{Value, VisualState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;

/// Bar heights relative to the smallest value, so negative inputs still
/// draw upward. Each bar keeps at least one unit of height.
pub fn bar_heights(values: &[Value]) -> Vec<u64> {
    let floor = values.iter().copied().min().unwrap_or(0).min(0);
    values
        .iter()
        .map(|&v| ((v as i128 - floor as i128) as u64).saturating_add(1))
        .collect()
}

/// Widest bar that fits `count` bars into `width` columns
pub fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = count.min(u16::MAX as usize) as u16;
    (width.saturating_add(BAR_GAP) / count)
        .saturating_sub(BAR_GAP)
        .max(1)
}

/// Render the chart pane
pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[Value],
    states: &[VisualState],
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if values.is_empty() {
        let paragraph = Paragraph::new("(no values, press i to enter some)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 1, 0, 0));
    let inner_width = area.width.saturating_sub(4);
    let width = bar_width(inner_width, values.len());
    let heights = bar_heights(values);

    let bars: Vec<Bar> = values
        .iter()
        .zip(&heights)
        .enumerate()
        .map(|(i, (value, &height))| {
            let state = states.get(i).copied().unwrap_or_default();
            let color = DEFAULT_THEME.state_color(state);
            let mut bar = Bar::default()
                .value(height)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if width >= 2 {
                bar = bar.label(Line::from(i.to_string()));
            }
            bar
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .label_style(Style::default().fg(DEFAULT_THEME.comment))
        .max(heights.iter().copied().max().unwrap_or(1));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heights_shift_negatives() {
        assert_eq!(bar_heights(&[3, 1, 2]), vec![4, 2, 3]);
        assert_eq!(bar_heights(&[-2, 0, 5]), vec![1, 3, 8]);
        assert!(bar_heights(&[]).is_empty());
    }

    #[test]
    fn test_bar_width_fits() {
        // 4 bars of width 4 plus 3 gaps = 19 columns
        assert_eq!(bar_width(20, 4), 4);
        assert_eq!(bar_width(10, 30), 1);
        assert_eq!(bar_width(10, 0), 1);
    }
}
