//! Search view
//!
//! Mode selector, value and date inputs, the inline notice, and the result
//! table of the last search.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{ResultSet, SearchMode};
use crate::tui::app::{App, InputMode, SearchField};
use crate::tui::layout::SearchLayout;

use super::view_block;

const LABEL_WIDTH: usize = 12;
const MAX_COLUMN_WIDTH: usize = 30;

/// Render the search view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SearchLayout::new(area);

    render_form(frame, app, layout.form);

    if let Some(notice) = &app.search_notice {
        frame.render_widget(Paragraph::new(notice.line()), layout.notice);
    }

    render_results(frame, app, layout.results);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let focused = |field: SearchField| editing && app.focused_field == field;

    let mut lines = vec![
        mode_line(app.search_mode, focused(SearchField::Mode)),
        app.value_input.line(LABEL_WIDTH, focused(SearchField::Value)),
        app.start_input
            .line(LABEL_WIDTH, focused(SearchField::StartDate)),
        app.end_input.line(LABEL_WIDTH, focused(SearchField::EndDate)),
        Line::from(""),
    ];

    lines.extend(form_hints(app));

    frame.render_widget(
        Paragraph::new(lines).block(view_block("Search Customer Statement")),
        area,
    );
}

/// Advisory lines under the inputs; each applies independently
fn form_hints(app: &App) -> Vec<Line<'static>> {
    let mut hints = Vec::new();
    if app.search_mode.is_slow() {
        hints.push(Line::from(Span::styled(
            "Searching by Customer Name may take longer than searching by Policy ID.",
            Style::default().fg(Color::Yellow),
        )));
    }
    if app.has_partial_date_range() {
        hints.push(Line::from(Span::styled(
            "Fill in both dates to filter by document date.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    hints
}

fn mode_line(selected: SearchMode, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$} ", "Search by:", width = LABEL_WIDTH + 1),
        label_style,
    )];
    for mode in SearchMode::ALL {
        let (marker, style) = if mode == selected {
            ("(*) ", Style::default().add_modifier(Modifier::BOLD))
        } else {
            ("( ) ", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{}{}   ", marker, mode.label()), style));
    }
    Line::from(spans)
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let block = view_block("Results");

    let Some(results) = app.outcome.as_ref().and_then(|o| o.results()) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let visible = area.height.saturating_sub(3) as usize;
    let header = Row::new(results.columns().iter().map(|c| Cell::from(c.as_str()))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let rows = results
        .rows()
        .iter()
        .skip(app.table_offset)
        .take(visible)
        .map(|record| Row::new(record.values().iter().map(|v| Cell::from(v.to_string()))));

    let table = Table::new(rows, column_widths(results))
        .header(header)
        .column_spacing(2)
        .block(block.title_bottom(format!(
            " rows {}-{} of {} ",
            (app.table_offset + 1).min(results.len()),
            (app.table_offset + visible).min(results.len()),
            results.len()
        )));

    frame.render_widget(table, area);
}

/// Width of each column: its widest cell, capped
fn column_widths(results: &ResultSet) -> Vec<Constraint> {
    (0..results.columns().len())
        .map(|i| {
            let widest = results
                .column_values(i)
                .map(|v| v.to_string().chars().count())
                .chain(std::iter::once(results.columns()[i].chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length(widest.min(MAX_COLUMN_WIDTH) as u16)
        })
        .collect()
}
