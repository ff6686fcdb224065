use crate::event::AppEvent;
use crate::lookup::LookupState;
use crate::ui::{
    format_time_ago,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action, InputMode},
    language_chart::LanguageChart,
    profile_panel::{ProfilePanel, PROFILE_HEIGHT},
    repo_grid::{self, RepoGrid, CARD_HEIGHT},
    search_bar::SearchBar,
    spinner_frame,
    status_bar::StatusBar,
    theme,
};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INTRO: &[&str] = &[
    "Search for a GitHub username and view their profile,",
    "repositories and language breakdown.",
    "",
    "search like: octocat, torvalds, rust-lang",
];

/// A lookup accepted by the state but not yet handed to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub request_id: u64,
    pub username: String,
}

pub struct App {
    pub lookup: LookupState,
    pub input: String,
    pub mode: InputMode,
    pub selected: usize,
    pub repo_scroll: usize,
    pub show_help: bool,
    pub spinner_tick: usize,
    /// Transient message from the last failed browser launch.
    pub notice: Option<String>,
    pub should_quit: bool,
    pending: Option<PendingLookup>,
}

impl App {
    pub fn new(initial_username: Option<String>) -> Self {
        let mut app = Self {
            lookup: LookupState::default(),
            input: String::new(),
            mode: InputMode::Search,
            selected: 0,
            repo_scroll: 0,
            show_help: false,
            spinner_tick: 0,
            notice: None,
            should_quit: false,
            pending: None,
        };
        if let Some(name) = initial_username {
            app.input = name;
            app.submit();
        }
        app
    }

    pub fn take_pending_lookup(&mut self) -> Option<PendingLookup> {
        self.pending.take()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.mode);
                self.handle_action(action);
            }
            AppEvent::Tick => self.spinner_tick = self.spinner_tick.wrapping_add(1),
            AppEvent::Resize => {}
            AppEvent::LookupFinished { request_id, result } => {
                if self.lookup.complete(request_id, result) && self.lookup.profile.is_some() {
                    self.selected = 0;
                    self.repo_scroll = 0;
                    self.mode = InputMode::Browse;
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        if action != Action::None {
            self.notice = None;
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::Char(c) => self.input.push(c),
            Action::Backspace => {
                self.input.pop();
            }
            Action::ClearInput => self.input.clear(),
            Action::Submit => self.submit(),
            Action::LeaveSearch => self.mode = InputMode::Browse,
            Action::EnterSearch => {
                self.mode = InputMode::Search;
                self.show_help = false;
            }
            Action::ScrollDown => {
                if self.selected + 1 < self.lookup.repositories.len() {
                    self.selected += 1;
                }
            }
            Action::ScrollUp => self.selected = self.selected.saturating_sub(1),
            Action::OpenRepo => {
                if let Some(url) = self
                    .lookup
                    .repositories
                    .get(self.selected)
                    .map(|r| r.html_url.clone())
                {
                    self.open_link(&url);
                }
            }
            Action::OpenProfile => {
                if let Some(url) = self.lookup.profile.as_ref().map(|p| p.html_url.clone()) {
                    self.open_link(&url);
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::ClosePopup => self.show_help = false,
            Action::None => {}
        }
    }

    fn submit(&mut self) {
        match self.lookup.begin(&self.input) {
            Some(request_id) => {
                tracing::info!(username = %self.lookup.username, request_id, "lookup started");
                self.pending = Some(PendingLookup {
                    request_id,
                    username: self.lookup.username.clone(),
                });
            }
            None => tracing::debug!(loading = self.lookup.loading, "submit ignored"),
        }
    }

    fn open_link(&mut self, url: &str) {
        if let Err(e) = open::that_detached(url) {
            tracing::warn!(url, error = %e, "failed to open browser");
            self.notice = Some(format!("could not open {url}: {e}"));
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        let fetched = self
            .lookup
            .fetched_at
            .map(|t| format_time_ago(&t, &Utc::now()))
            .unwrap_or_else(|| "never".to_string());
        let header = HeaderBar {
            username: self
                .lookup
                .profile
                .as_ref()
                .map(|p| p.login.as_str())
                .unwrap_or(""),
            repo_count: self
                .lookup
                .profile
                .as_ref()
                .map(|_| self.lookup.repositories.len()),
            fetched: &fetched,
        };
        frame.render_widget(header, main_chunks[0]);

        let search = SearchBar {
            text: &self.input,
            focused: self.mode == InputMode::Search,
            spinner: self
                .lookup
                .loading
                .then(|| spinner_frame(self.spinner_tick)),
        };
        frame.render_widget(search, main_chunks[1]);

        self.render_body(frame, main_chunks[2]);

        let status = StatusBar {
            mode: self.mode,
            error: self.notice.as_deref().or(self.lookup.error.as_deref()),
        };
        frame.render_widget(status, main_chunks[3]);

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let Some(profile) = self.lookup.profile.as_ref() else {
            let lines: Vec<Line> = if self.lookup.loading {
                vec![Line::from(Span::styled(
                    format!("{} Loading {}\u{2026}", spinner_frame(self.spinner_tick), self.lookup.username),
                    Style::default().fg(theme::ACCENT),
                ))]
            } else {
                INTRO
                    .iter()
                    .map(|l| Line::from(Span::styled(*l, Style::default().fg(theme::DIM_TEXT))))
                    .collect()
            };
            let top = area.height.saturating_sub(lines.len() as u16) / 2;
            let text_area = Rect::new(area.x, area.y + top, area.width, area.height - top);
            frame.render_widget(
                Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
                text_area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PROFILE_HEIGHT),
                Constraint::Length(LanguageChart::height(&self.lookup.languages)),
                Constraint::Min(CARD_HEIGHT + 2),
            ])
            .split(area);

        frame.render_widget(ProfilePanel { profile }, chunks[0]);
        frame.render_widget(
            LanguageChart {
                distribution: &self.lookup.languages,
            },
            chunks[1],
        );

        let grid_area = chunks[2];
        self.ensure_scroll_bounds(
            repo_grid::visible_rows(grid_area.height),
            repo_grid::columns_for(grid_area.width),
        );
        let grid = RepoGrid {
            repos: &self.lookup.repositories,
            selected: self.selected,
            scroll: self.repo_scroll,
            focused: self.mode == InputMode::Browse,
        };
        frame.render_widget(grid, grid_area);
    }

    fn ensure_scroll_bounds(&mut self, visible_rows: usize, columns: usize) {
        if visible_rows == 0 || columns == 0 {
            return;
        }
        let row = self.selected / columns;
        if row >= self.repo_scroll + visible_rows {
            self.repo_scroll = row - visible_rows + 1;
        }
        if row < self.repo_scroll {
            self.repo_scroll = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::test_utils::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn finish(app: &mut App, pending: &PendingLookup, langs: &[Option<&str>]) {
        app.handle_event(AppEvent::LookupFinished {
            request_id: pending.request_id,
            result: Ok((make_profile(&pending.username), make_repos(langs))),
        });
    }

    #[test]
    fn typing_and_submit_queues_lookup() {
        let mut app = App::new(None);
        type_text(&mut app, "octocat");
        press(&mut app, KeyCode::Enter);

        let pending = app.take_pending_lookup().unwrap();
        assert_eq!(pending.username, "octocat");
        assert!(app.lookup.loading);
        assert!(app.take_pending_lookup().is_none());
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut app = App::new(Some("octocat".to_string()));
        assert!(app.take_pending_lookup().is_some());

        press(&mut app, KeyCode::Enter);
        assert!(app.take_pending_lookup().is_none());
    }

    #[test]
    fn empty_input_does_not_submit() {
        let mut app = App::new(None);
        press(&mut app, KeyCode::Enter);
        assert!(app.take_pending_lookup().is_none());
        assert!(!app.lookup.loading);
    }

    #[test]
    fn success_switches_to_browse_and_selection_is_bounded() {
        let mut app = App::new(Some("octocat".to_string()));
        let pending = app.take_pending_lookup().unwrap();
        finish(&mut app, &pending, &[Some("Go"), None]);

        assert_eq!(app.mode, InputMode::Browse);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn failure_keeps_search_mode_and_shows_error() {
        let mut app = App::new(Some("ghost".to_string()));
        let pending = app.take_pending_lookup().unwrap();
        app.handle_event(AppEvent::LookupFinished {
            request_id: pending.request_id,
            result: Err(FetchError::ProfileNotFound),
        });

        assert_eq!(app.mode, InputMode::Search);
        assert_eq!(app.lookup.error.as_deref(), Some("User not found"));
    }

    #[test]
    fn q_quits_only_in_browse_mode() {
        let mut app = App::new(None);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn scroll_follows_selection() {
        let mut app = App::new(None);
        app.selected = 9;
        app.ensure_scroll_bounds(2, 2);
        assert_eq!(app.repo_scroll, 3);
        app.selected = 0;
        app.ensure_scroll_bounds(2, 2);
        assert_eq!(app.repo_scroll, 0);
    }

    #[test]
    fn renders_full_screen() {
        let mut app = App::new(Some("octocat".to_string()));
        let pending = app.take_pending_lookup().unwrap();
        finish(&mut app, &pending, &[Some("Go"), Some("Go"), Some("Rust"), None]);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("octocat"));
        assert!(text.contains("Language Breakdown"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("Repositories (4)"));
    }
}
