//! # quiz-grader
//!
//! Grades a quiz made of radio-button and checkbox groups against an answer
//! key, then shows the score either as a dismissible results panel or as a
//! plain-text prompt.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_grader::{PresenterKind, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the answer key from a JSON file
//!     let quiz = Quiz::from_json("quiz.json", PresenterKind::Overlay)?;
//!
//!     // Fill in and submit the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod grading;
pub mod logging;
mod models;
pub mod pipeline;
pub mod presenter;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use config::{Config, PresenterKind};
pub use data::{LoadError, load_answer_key_from_json, load_form_from_json};
pub use grading::GradeError;
pub use models::{
    Answer, AnswerKey, AppState, Form, FormSection, Question, ToggleControl, ToggleKind,
};
pub use pipeline::Submission;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load quiz: {0}")]
    Load(#[from] LoadError),

    #[error("form does not match the answer key: {0}")]
    Grade(#[from] GradeError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What a non-interactive grading run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub submission: Submission,
    /// The presenter's view as plain text.
    pub text: String,
}

/// A quiz bound to an answer key and a presentation style.
pub struct Quiz {
    answer_key: AnswerKey,
    presenter: PresenterKind,
}

impl Quiz {
    pub fn new(answer_key: AnswerKey, presenter: PresenterKind) -> Self {
        Self {
            answer_key,
            presenter,
        }
    }

    /// Load a quiz from a JSON answer key.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_grader::{PresenterKind, Quiz};
    ///
    /// let quiz = Quiz::from_json("quiz.json", PresenterKind::Alert).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, presenter: PresenterKind) -> Result<Self, QuizError> {
        let answer_key = load_answer_key_from_json(path)?;
        Ok(Self::new(answer_key, presenter))
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    /// Grade a filled-in form without a terminal UI.
    pub fn grade_form(&self, form: &Form) -> Result<Report, QuizError> {
        let mut presenter = presenter::build(self.presenter);
        let submission = pipeline::submit(form.controls(), &self.answer_key, presenter.as_mut())?;
        let text = presenter.plain_text().unwrap_or_default();

        Ok(Report { submission, text })
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal until the user quits.
    pub fn run(self) -> Result<(), QuizError> {
        let mut app = App::new(self.answer_key, self.presenter);
        let mut session = terminal::Session::open()?;
        run_event_loop(&mut session, &mut app)?;
        session.close()?;
        Ok(())
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    info!(questions = app.answer_key().len(), "quiz started");

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, GradeError> {
    match app.state {
        AppState::Answering => handle_form_input(app, key),
        AppState::Presenting => {
            handle_presenting_input(app, key);
            Ok(false)
        }
    }
}

fn handle_form_input(app: &mut App, key: KeyCode) -> Result<bool, GradeError> {
    match key {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.select_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate()?,
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit()?,
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

// Open views block the form until dismissed.
fn handle_presenting_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Enter | KeyCode::Esc => app.dismiss(),
        _ => {}
    }
}
