//! Main TUI application state machine.
//!
//! Handles screen navigation, input events and service integration. Every
//! user action runs to completion before the next event is read; a
//! screening is a single dot product, so there is nothing to defer.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::csv::CsvDataset;
use crate::adapters::model::LogisticModel;
use crate::application::{ScreeningService, StatisticsService};

use super::ui::{
    charts::{render_statistics, StatisticsState},
    dashboard::{render_dashboard, DashboardState},
    form::{render_form, PatientFormState},
    render_disclaimer,
    result::render_result,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    PatientForm,
    Result,
    Statistics,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Screening service (owns the session's last assessment)
    screening: ScreeningService<LogisticModel>,

    /// Statistics service over the reference dataset
    statistics: StatisticsService<CsvDataset>,

    /// Dashboard state
    dashboard_state: DashboardState,

    /// Patient form state
    form_state: PatientFormState,

    /// Statistics screen state
    statistics_state: StatisticsState,
}

impl App {
    /// Create a new application instance from the environment.
    ///
    /// The classifier artifact must load, or startup fails: there is no
    /// degraded mode without a model.
    ///
    /// # Errors
    /// Returns error if the model artifact is missing or invalid.
    pub fn new() -> Result<Self> {
        let model_path =
            std::env::var("CARDIOSCOPE_MODEL_PATH").unwrap_or_else(|_| "models".to_string());
        let data_path = std::env::var("CARDIOSCOPE_DATA_PATH")
            .unwrap_or_else(|_| "data/heart_disease_clean.csv".to_string());

        let model = LogisticModel::load(Path::new(&model_path)).with_context(|| {
            format!(
                "Failed to load model from {model_path:?}. \
                 Set CARDIOSCOPE_MODEL_PATH to a directory containing model.json."
            )
        })?;

        let screening = ScreeningService::new(Arc::new(model));
        let statistics = StatisticsService::new(CsvDataset::new(data_path.clone()));

        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            dashboard_state: DashboardState {
                model_loaded: true,
                model_input_width: screening.model_input_width(),
                dataset_path: data_path,
            },
            screening,
            statistics,
            form_state: PatientFormState::default(),
            statistics_state: StatisticsState::default(),
        })
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => render_dashboard(
                        f,
                        content_area,
                        &self.dashboard_state,
                        self.screening.last_assessment(),
                    ),
                    Screen::PatientForm => render_form(f, content_area, &self.form_state),
                    Screen::Result => {
                        if let Some(assessment) = self.screening.last_assessment() {
                            render_result(f, content_area, assessment);
                        }
                    }
                    Screen::Statistics => render_statistics(
                        f,
                        content_area,
                        &self.statistics_state,
                        self.screening.last_assessment(),
                    ),
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::PatientForm => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
            Screen::Statistics => self.handle_statistics_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = PatientFormState::default();
                self.screen = Screen::PatientForm;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                // Charts include the session outcome, so they unlock once a
                // screening has run.
                if self.screening.has_assessment() {
                    self.load_statistics();
                    self.screen = Screen::Statistics;
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.form_state.load_sample_data();
            }
            KeyCode::Char(c) => {
                self.form_state.input_char(c);
            }
            KeyCode::Backspace => {
                self.form_state.delete_char();
            }
            KeyCode::Delete => {
                self.form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = PatientFormState::default();
                self.screen = Screen::PatientForm;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.load_statistics();
                self.screen = Screen::Statistics;
            }
            _ => {}
        }
    }

    fn handle_statistics_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.statistics.refresh();
                self.load_statistics();
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let record = match self.form_state.to_clinical_record() {
            Ok(record) => record,
            Err(message) => {
                self.form_state.error_message = Some(message);
                return;
            }
        };

        match self.screening.run_screening(&record) {
            Ok(_) => {
                // Wipe plaintext measurements from the UI buffers.
                self.form_state.clear_sensitive();
                self.screen = Screen::Result;
            }
            Err(e) => {
                tracing::error!("Screening failed: {e}");
                self.form_state.error_message = Some(e.to_string());
            }
        }
    }

    fn load_statistics(&mut self) {
        match self.statistics.summary() {
            Ok(summary) => {
                self.statistics_state.summary = Some(summary.clone());
                self.statistics_state.error = None;
            }
            Err(e) => {
                tracing::error!("Statistics unavailable: {e}");
                self.statistics_state.summary = None;
                self.statistics_state.error = Some(e.to_string());
            }
        }
    }

}
