use crate::models::{GROUP_SEPARATOR, ToggleControl};

use super::QuizState;

/// Question key a control belongs to: the group name up to the separator,
/// or the whole name when there is none.
pub fn question_key(name: &str) -> &str {
    name.split_once(GROUP_SEPARATOR)
        .map_or(name, |(prefix, _)| prefix)
}

/// Snapshot the checked state of every control, grouped by question key.
pub fn collect_state<'a, I>(controls: I) -> QuizState
where
    I: IntoIterator<Item = &'a ToggleControl>,
{
    let mut state = QuizState::new();
    for control in controls {
        state.push(question_key(&control.name), control.checked);
    }
    state
}
