//! Help view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::view_block;

/// Render the help view
pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(help_lines())
        .block(view_block("Help"))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Searching"),
        Line::from(""),
        topic("Policy ID", "Use the exact policy number for faster results."),
        topic(
            "Customer Name",
            "Partial matches are allowed but may take longer.",
        ),
        topic(
            "Document Date",
            "Fill in both start and end dates to narrow results by date.",
        ),
        topic("Export", "Download results as Excel for offline use."),
        Line::from(""),
        heading("Search Form"),
        Line::from(""),
        key_line("Tab/Down", "Next field"),
        key_line("S-Tab/Up", "Previous field"),
        key_line("Space", "Switch search mode (on the mode field)"),
        key_line("Enter", "Search"),
        key_line("Esc", "Leave the form"),
        Line::from(""),
        heading("Global Keys"),
        Line::from(""),
        key_line("1-4", "Switch view"),
        key_line("Tab", "Next view"),
        key_line("i, /", "Edit the search value"),
        key_line("s, e", "Edit the start or end date"),
        key_line("m", "Switch search mode"),
        key_line("j/k", "Scroll results"),
        key_line("d", "Download (Export view)"),
        key_line("q", "Quit"),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn topic(name: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<15}", name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(text),
    ])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
