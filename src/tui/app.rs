//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It is the only state kept between key presses; each search replaces the
//! previous outcome wholesale.

use std::path::PathBuf;

use crate::config::{PortalPaths, Settings};
use crate::export::{download_path, write_results_xlsx};
use crate::models::{parse_date_input, SearchCriteria, SearchMode};
use crate::query::StatementSource;
use crate::services::{SearchOutcome, SearchService};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// The four views of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Search,
    Summary,
    Export,
    Help,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Search,
        ActiveTab::Summary,
        ActiveTab::Export,
        ActiveTab::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Summary => "Summary",
            Self::Export => "Export",
            Self::Help => "Help",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Fields of the search form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    Mode,
    #[default]
    Value,
    StartDate,
    EndDate,
}

impl SearchField {
    const ORDER: [SearchField; 4] = [
        SearchField::Mode,
        SearchField::Value,
        SearchField::StartDate,
        SearchField::EndDate,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Main application state
pub struct App<'a> {
    /// Where statements are fetched from
    pub source: &'a dyn StatementSource,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a PortalPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently visible view
    pub active_tab: ActiveTab,

    /// Current input mode
    pub input_mode: InputMode,

    /// Focused field of the search form
    pub focused_field: SearchField,

    /// Selected search mode
    pub search_mode: SearchMode,

    pub value_input: TextInput,
    pub start_input: TextInput,
    pub end_input: TextInput,

    /// Criteria waiting to be run on the next loop iteration
    pub pending_search: Option<SearchCriteria>,

    /// Outcome of the last completed search
    pub outcome: Option<SearchOutcome>,

    /// Inline message under the search form
    pub search_notice: Option<Notification>,

    /// First result row shown in the table
    pub table_offset: usize,

    /// Last file written by the Export view
    pub last_export: Option<PathBuf>,

    /// Transient toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        source: &'a dyn StatementSource,
        settings: &'a Settings,
        paths: &'a PortalPaths,
    ) -> Self {
        Self {
            source,
            settings,
            paths,
            should_quit: false,
            active_tab: ActiveTab::default(),
            input_mode: InputMode::Editing,
            focused_field: SearchField::default(),
            search_mode: SearchMode::default(),
            value_input: TextInput::new()
                .label("Search value")
                .placeholder("e.g. G/001/07/3005/2020/0007"),
            start_input: TextInput::new()
                .label("Start date")
                .placeholder("YYYY-MM-DD"),
            end_input: TextInput::new().label("End date").placeholder("YYYY-MM-DD"),
            pending_search: None,
            outcome: None,
            search_notice: None,
            table_offset: 0,
            last_export: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a different view
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        if tab != ActiveTab::Search {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Start editing the search form at a field
    pub fn edit_field(&mut self, field: SearchField) {
        self.active_tab = ActiveTab::Search;
        self.input_mode = InputMode::Editing;
        self.focused_field = field;
    }

    /// Stop editing the search form
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Text input of the focused field, if it is a text field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            SearchField::Mode => None,
            SearchField::Value => Some(&mut self.value_input),
            SearchField::StartDate => Some(&mut self.start_input),
            SearchField::EndDate => Some(&mut self.end_input),
        }
    }

    /// Toggle between Policy ID and Customer Name
    pub fn toggle_search_mode(&mut self) {
        self.search_mode = self.search_mode.toggle();
    }

    /// Whether exactly one date bound is filled in
    pub fn has_partial_date_range(&self) -> bool {
        self.start_input.value().trim().is_empty() != self.end_input.value().trim().is_empty()
    }

    /// Validate the form and queue a search
    ///
    /// Invalid input is reported inline and nothing is queued.
    pub fn request_search(&mut self) {
        let criteria = parse_date_input(self.start_input.value(), "Start date")
            .and_then(|start| {
                let end = parse_date_input(self.end_input.value(), "End date")?;
                Ok((start, end))
            })
            .and_then(|(start, end)| {
                SearchCriteria::new(self.search_mode, self.value_input.value(), start, end)
            });

        match criteria {
            Ok(criteria) => {
                self.search_notice = Some(Notification::info("Searching..."));
                self.pending_search = Some(criteria);
            }
            Err(e) => {
                self.search_notice = Some(Notification::warning(e.user_message()));
            }
        }
    }

    /// Whether a search is waiting to run
    pub fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Run the queued search, if any, and record its outcome
    pub fn run_pending_search(&mut self) {
        let Some(criteria) = self.pending_search.take() else {
            return;
        };

        let service = SearchService::new(self.source, &self.settings.view);
        self.table_offset = 0;

        match service.search(&criteria) {
            Ok(outcome) => {
                let notice = match &outcome {
                    SearchOutcome::NoRecords => Notification::info(outcome.message()),
                    SearchOutcome::Found { .. } => Notification::success(outcome.message()),
                };
                self.search_notice = Some(notice);
                self.outcome = Some(outcome);
            }
            Err(e) => {
                self.search_notice = Some(Notification::error(e.user_message()));
                self.outcome = None;
            }
        }
    }

    /// Number of rows in the current results
    pub fn result_count(&self) -> usize {
        self.outcome
            .as_ref()
            .and_then(|o| o.results())
            .map(|r| r.len())
            .unwrap_or(0)
    }

    /// Scroll the results table down one row
    pub fn scroll_down(&mut self) {
        if self.table_offset + 1 < self.result_count() {
            self.table_offset += 1;
        }
    }

    /// Scroll the results table up one row
    pub fn scroll_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    /// Write the current results to the download location
    pub fn export_results(&mut self) {
        let Some(results) = self.outcome.as_ref().and_then(|o| o.results()) else {
            self.notifications
                .push(Notification::warning("Run a search with results first."));
            return;
        };

        let path = download_path(self.paths, &self.settings.export);
        let written = self
            .paths
            .ensure_directories()
            .and_then(|_| write_results_xlsx(results, &self.settings.export.sheet_name, &path));

        match written {
            Ok(()) => {
                self.notifications
                    .push(Notification::success(format!("Saved {}", path.display())));
                self.last_export = Some(path);
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.notifications
                    .push(Notification::error(e.user_message()).with_duration(6));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CsvSource;
    use crate::tui::widgets::NotificationType;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const EXTRACT: &str = "\
POLICY_NO,INSURED_NAME,DOCUMENT_DATE,AMOUNT
G/001/07/3005/2020/0007,ACME LTD,2024-01-15,100.00
G/001/07/3005/2020/0007,ACME LTD,2024-03-10,250.50
G/001/07/3005/2020/0007,ACME LTD,2023-12-31,49.50
";

    struct Fixture {
        _file: NamedTempFile,
        _home: TempDir,
        source: CsvSource,
        settings: Settings,
        paths: PortalPaths,
    }

    fn fixture() -> Fixture {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EXTRACT.as_bytes()).unwrap();
        let settings = Settings::default();
        let home = TempDir::new().unwrap();
        Fixture {
            source: CsvSource::new(file.path(), settings.view.clone()),
            paths: PortalPaths::with_base_dir(home.path().to_path_buf()),
            settings,
            _file: file,
            _home: home,
        }
    }

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ActiveTab::Search.next(), ActiveTab::Summary);
        assert_eq!(ActiveTab::Help.next(), ActiveTab::Search);
        assert_eq!(ActiveTab::Search.prev(), ActiveTab::Help);
        assert_eq!(SearchField::EndDate.next(), SearchField::Mode);
        assert_eq!(SearchField::Mode.prev(), SearchField::EndDate);
    }

    #[test]
    fn test_blank_search_is_not_queued() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);

        app.request_search();

        assert!(!app.is_searching());
        let notice = app.search_notice.as_ref().unwrap();
        assert_eq!(notice.notification_type, NotificationType::Warning);
        assert_eq!(notice.message, "Please enter a search value.");
    }

    #[test]
    fn test_invalid_date_is_not_queued() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);
        type_into(&mut app.value_input, "G/001/07/3005/2020/0007");
        type_into(&mut app.start_input, "15/01/2024");

        app.request_search();

        assert!(!app.is_searching());
        assert!(app
            .search_notice
            .as_ref()
            .unwrap()
            .message
            .contains("Start date must be a date"));
    }

    #[test]
    fn test_search_flow() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);
        type_into(&mut app.value_input, "G/001/07/3005/2020/0007");

        app.request_search();
        assert!(app.is_searching());
        assert_eq!(app.search_notice.as_ref().unwrap().message, "Searching...");

        app.run_pending_search();
        assert!(!app.is_searching());
        assert_eq!(app.result_count(), 3);
        let notice = app.search_notice.as_ref().unwrap();
        assert_eq!(notice.notification_type, NotificationType::Success);
        assert_eq!(notice.message, "Found 3 record(s).");

        app.scroll_down();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.table_offset, 2);
    }

    #[test]
    fn test_no_records_flow() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);
        app.toggle_search_mode();
        type_into(&mut app.value_input, "gamma");

        app.request_search();
        app.run_pending_search();

        assert_eq!(app.outcome, Some(SearchOutcome::NoRecords));
        assert_eq!(
            app.search_notice.as_ref().unwrap().message,
            "No records found."
        );
    }

    #[test]
    fn test_source_error_clears_results() {
        let f = fixture();
        let missing = CsvSource::new("/nonexistent/extract.csv", f.settings.view.clone());
        let mut app = App::new(&missing, &f.settings, &f.paths);
        type_into(&mut app.value_input, "P1");

        app.request_search();
        app.run_pending_search();

        assert!(app.outcome.is_none());
        let notice = app.search_notice.as_ref().unwrap();
        assert_eq!(notice.notification_type, NotificationType::Error);
        assert!(notice.message.starts_with("Unexpected error:"));
    }

    #[test]
    fn test_export_requires_results() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);

        app.export_results();

        assert!(app.last_export.is_none());
        assert_eq!(
            app.notifications.current().unwrap().notification_type,
            NotificationType::Warning
        );
    }

    #[test]
    fn test_export_writes_download() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);
        type_into(&mut app.value_input, "G/001/07/3005/2020/0007");
        app.request_search();
        app.run_pending_search();

        app.export_results();

        let path = app.last_export.clone().unwrap();
        assert_eq!(path, f.paths.export_dir().join("customer_statements.xlsx"));
        assert!(path.exists());
    }

    #[test]
    fn test_partial_date_range() {
        let f = fixture();
        let mut app = App::new(&f.source, &f.settings, &f.paths);
        assert!(!app.has_partial_date_range());
        type_into(&mut app.start_input, "2024-01-01");
        assert!(app.has_partial_date_range());
        type_into(&mut app.end_input, "2024-12-31");
        assert!(!app.has_partial_date_range());
    }
}
