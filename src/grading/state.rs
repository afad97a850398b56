//! Per-submission snapshots: what was selected and how it graded.

/// Selections per question key, in the order the keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    entries: Vec<(String, Vec<bool>)>,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection flag to `key`, creating the entry on first sight.
    pub fn push(&mut self, key: &str, checked: bool) {
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, flags)) => flags.push(checked),
            None => self.entries.push((key.to_string(), vec![checked])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[bool]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, flags)| flags.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.entries
            .iter()
            .map(|(key, flags)| (key.as_str(), flags.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<bool>)> for QuizState {
    fn from_iter<I: IntoIterator<Item = (K, Vec<bool>)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (key, flags) in iter {
            let key = key.into();
            for checked in flags {
                state.push(&key, checked);
            }
        }
        state
    }
}

/// Grading outcome of a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub key: String,
    pub text: String,
    pub correct: bool,
}

impl QuestionOutcome {
    /// One-based question number for display. Falls back to the raw key
    /// when it is not an index.
    pub fn number(&self) -> String {
        match self.key.parse::<usize>() {
            Ok(index) => (index + 1).to_string(),
            Err(_) => self.key.clone(),
        }
    }
}

/// Outcomes in the same order as the graded [`QuizState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizResult {
    outcomes: Vec<QuestionOutcome>,
}

impl QuizResult {
    pub(crate) fn from_outcomes(outcomes: Vec<QuestionOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    pub fn get(&self, key: &str) -> Option<&QuestionOutcome> {
        self.outcomes.iter().find(|outcome| outcome.key == key)
    }

    /// Number of questions graded correct.
    pub fn score(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.correct).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
