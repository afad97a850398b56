mod form;
mod question;

pub use form::{Form, FormSection, GROUP_SEPARATOR, ToggleControl, ToggleKind};
pub use question::{Answer, AnswerKey, Question};

/// Which screen the interactive quiz is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Filling in the form.
    Answering,
    /// A presenter view is open on top of the form.
    Presenting,
}
