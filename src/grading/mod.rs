//! Collecting, validating and grading a submitted form.

mod collector;
mod grader;
mod state;
mod validator;

pub use collector::{collect_state, question_key};
pub use grader::{GradeError, grade};
pub use state::{QuestionOutcome, QuizResult, QuizState};
pub use validator::{all_questions_answered, unanswered};
