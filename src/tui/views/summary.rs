//! Summary view
//!
//! Record count and amount total of the last search.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

use super::view_block;

/// Render the summary view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = view_block("Summary Statistics");

    let Some(summary) = app.outcome.as_ref().and_then(|o| o.summary()) else {
        let hint = Paragraph::new("Run a search to see summary statistics.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let metrics = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Length(28), Constraint::Min(0)])
        .split(Rect {
            height: inner.height.min(4),
            ..inner
        });

    render_metric(
        frame,
        metrics[0],
        "Total Records",
        summary.record_count.to_string(),
    );
    if let Some(total) = summary.formatted_total() {
        render_metric(frame, metrics[1], "Total Amount", total);
    }

    if summary.skipped_amounts > 0 && inner.height > 4 {
        let note = Paragraph::new(format!(
            "{} non-numeric amount(s) left out of the total.",
            summary.skipped_amounts
        ))
        .style(Style::default().fg(Color::Yellow));
        let area = Rect {
            y: inner.y + 4,
            height: 1,
            ..inner
        };
        frame.render_widget(note, area);
    }
}

fn render_metric(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let metric = Paragraph::new(vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(metric, area);
}
