//! Export view
//!
//! Offers the last result set as an Excel download.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::export::{download_path, XLSX_MIME_TYPE};
use crate::tui::app::App;

use super::view_block;

/// Render the export view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = view_block("Export Results");

    let Some(results) = app.outcome.as_ref().and_then(|o| o.results()) else {
        let hint = Paragraph::new("Run a search with results to export them.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let target = download_path(app.paths, &app.settings.export);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "[ Download Excel File ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  press Enter or d"),
        ]),
        Line::from(""),
        detail("Records", results.len().to_string()),
        detail("Sheet", app.settings.export.sheet_name.clone()),
        detail("File", target.display().to_string()),
        detail("Type", XLSX_MIME_TYPE.to_string()),
    ];

    if let Some(path) = &app.last_export {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Saved to {}", path.display()),
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}
