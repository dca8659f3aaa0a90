//! Status bar view
//!
//! Shows the statement source, the search mode, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            app.source.describe(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled(
            app.search_mode.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    if app.is_searching() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Searching...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Editing => " Enter:Search  Tab:Next field  Esc:Done ",
        InputMode::Normal => " q:Quit  1-4:Views  i:Edit  ?:Help ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
