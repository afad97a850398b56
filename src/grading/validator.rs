use super::QuizState;

/// True iff every question in `state` has at least one selected option.
pub fn all_questions_answered(state: &QuizState) -> bool {
    state.iter().all(|(_, flags)| is_answered(flags))
}

/// Keys of the questions with nothing selected, in form order.
pub fn unanswered(state: &QuizState) -> Vec<&str> {
    state
        .iter()
        .filter(|(_, flags)| !is_answered(flags))
        .map(|(key, _)| key)
        .collect()
}

fn is_answered(flags: &[bool]) -> bool {
    flags.iter().any(|&checked| checked)
}
