//! Presenting grading outcomes.
//!
//! Both renderers implement [`Presenter`]; which one a quiz uses is picked
//! from [`PresenterKind`] by [`build`].

mod alert;
mod overlay;

use ratatui::layout::Flex;
use ratatui::prelude::*;

pub use alert::{Alert, alert_text};
pub use overlay::{LineStyle, Overlay, PanelLine};

use crate::config::PresenterKind;
use crate::grading::QuizResult;
use crate::models::AnswerKey;

/// Message shown when the submit gate finds an unanswered question.
pub const INCOMPLETE_MESSAGE: &str = "Not all questions have been answered.";

/// One graded question as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub number: String,
    pub text: String,
    pub correct: bool,
}

/// Everything a presenter needs to show a graded quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub lines: Vec<SummaryLine>,
    pub score: usize,
    /// Number of questions in the answer key, answered or not.
    pub total: usize,
}

impl ScoreSummary {
    pub fn new(result: &QuizResult, answer_key: &AnswerKey) -> Self {
        let lines = result
            .outcomes()
            .iter()
            .map(|outcome| SummaryLine {
                number: outcome.number(),
                text: outcome.text.clone(),
                correct: outcome.correct,
            })
            .collect();

        Self {
            lines,
            score: result.score(),
            total: answer_key.len(),
        }
    }

    pub fn score_line(&self) -> String {
        format!("You scored {}/{}", self.score, self.total)
    }
}

/// An output strategy for the submit pipeline.
pub trait Presenter {
    /// Show the incomplete-quiz error.
    fn render_error(&mut self, message: &str);

    /// Show the score breakdown.
    fn render_results(&mut self, summary: &ScoreSummary);

    /// Whether a view is currently shown and waiting to be dismissed.
    fn is_open(&self) -> bool;

    /// Close the current view. Does nothing when nothing is open.
    fn dismiss(&mut self);

    /// Scroll the per-question breakdown one row down.
    fn scroll_down(&mut self);

    fn scroll_up(&mut self);

    /// Draw the open view on top of `area`. The score line stays pinned
    /// while the breakdown scrolls.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// The open view as plain text, for non-interactive output.
    fn plain_text(&self) -> Option<String>;
}

pub fn build(kind: PresenterKind) -> Box<dyn Presenter> {
    match kind {
        PresenterKind::Overlay => Box::new(Overlay::new()),
        PresenterKind::Alert => Box::new(Alert::new()),
    }
}

/// A rectangle of `width` x `height` centered in `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Rows `text` occupies when wrapped at `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let columns = text.chars().count().max(1);
    columns.div_ceil(width) as u16
}
