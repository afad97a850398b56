//! The submit handler: collect, gate on completeness, grade, present.

use tracing::{debug, info, warn};

use crate::grading::{self, GradeError};
use crate::models::{AnswerKey, ToggleControl};
use crate::presenter::{INCOMPLETE_MESSAGE, Presenter, ScoreSummary};

/// How a single submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// At least one question had nothing selected; nothing was graded.
    Incomplete { unanswered: Vec<String> },
    Graded(ScoreSummary),
}

/// Run one submission through the pipeline and hand the outcome to `presenter`.
///
/// Grade faults (form and answer key disagreeing) are returned without
/// presenting anything.
pub fn submit<'a, I>(
    controls: I,
    answer_key: &AnswerKey,
    presenter: &mut dyn Presenter,
) -> Result<Submission, GradeError>
where
    I: IntoIterator<Item = &'a ToggleControl>,
{
    let state = grading::collect_state(controls);
    debug!(questions = state.len(), "collected quiz state");

    if !grading::all_questions_answered(&state) {
        let unanswered: Vec<String> = grading::unanswered(&state)
            .into_iter()
            .map(str::to_string)
            .collect();
        debug!(?unanswered, "submission incomplete");

        presenter.render_error(INCOMPLETE_MESSAGE);
        return Ok(Submission::Incomplete { unanswered });
    }

    let result = grading::grade(&state, answer_key).inspect_err(|err| {
        warn!(error = %err, "form does not match the answer key");
    })?;

    let summary = ScoreSummary::new(&result, answer_key);
    info!(score = summary.score, total = summary.total, "quiz graded");

    presenter.render_results(&summary);
    Ok(Submission::Graded(summary))
}
