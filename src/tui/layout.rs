//! Layout definitions for the TUI
//!
//! Tab bar on top, the active view in the middle, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Active view
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the search view
pub struct SearchLayout {
    /// Mode selector and inputs
    pub form: Rect,
    /// Inline notice
    pub notice: Rect,
    /// Result table
    pub results: Rect,
}

impl SearchLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Mode, value, dates, hint
                Constraint::Length(1), // Notice
                Constraint::Min(3),    // Results
            ])
            .split(area);

        Self {
            form: chunks[0],
            notice: chunks[1],
            results: chunks[2],
        }
    }
}

/// Top-right corner rect for toasts
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
