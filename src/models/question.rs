use serde::{Deserialize, Serialize};

/// A single selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(rename = "isCorrect", alias = "is_correct")]
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }

    /// A question with more than one correct answer is answered with checkboxes.
    pub fn is_multi_select(&self) -> bool {
        self.answers.iter().filter(|answer| answer.is_correct).count() > 1
    }

    /// The correctness flags in answer order, as compared against a selection.
    pub fn correct_flags(&self) -> impl Iterator<Item = bool> + '_ {
        self.answers.iter().map(|answer| answer.is_correct)
    }
}

/// The static set of questions a quiz is graded against.
///
/// The question at position `n` is addressed by the key `"n"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey {
    questions: Vec<Question>,
}

impl AnswerKey {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total possible score.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look a question up by its key. Only the canonical decimal form of an
    /// index is a key, so `"01"` or `"+1"` match nothing.
    pub fn get(&self, key: &str) -> Option<&Question> {
        key.parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == key)
            .and_then(|index| self.questions.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| (index.to_string(), question))
    }
}
