use thiserror::Error;

use crate::models::AnswerKey;

use super::{QuestionOutcome, QuizResult, QuizState};

/// The form and the answer key disagree about a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("question `{key}` is not in the answer key")]
    UnknownQuestion { key: String },

    #[error("question `{key}` has {rendered} options in the form but {expected} in the answer key")]
    AnswerCountMismatch {
        key: String,
        rendered: usize,
        expected: usize,
    },
}

/// Grade every question in `state` against `answer_key`.
///
/// A question is correct only when each option's selection equals its
/// `is_correct` flag; there is no partial credit.
pub fn grade(state: &QuizState, answer_key: &AnswerKey) -> Result<QuizResult, GradeError> {
    let mut outcomes = Vec::with_capacity(state.len());

    for (key, selected) in state.iter() {
        let question = answer_key
            .get(key)
            .ok_or_else(|| GradeError::UnknownQuestion {
                key: key.to_string(),
            })?;

        if selected.len() != question.answers.len() {
            return Err(GradeError::AnswerCountMismatch {
                key: key.to_string(),
                rendered: selected.len(),
                expected: question.answers.len(),
            });
        }

        let correct = selected
            .iter()
            .copied()
            .zip(question.correct_flags())
            .all(|(given, expected)| given == expected);

        outcomes.push(QuestionOutcome {
            key: key.to_string(),
            text: question.text.clone(),
            correct,
        });
    }

    Ok(QuizResult::from_outcomes(outcomes))
}
